//! Core module for the reservation admin
//!
//! 包含核心组件:
//! - WorkflowError / FieldErrors: workflow failure taxonomy
//! - Notifier: toast-style success/failure notifications
//! - Confirm: modal confirmation before destructive actions
//! - AppConfig: backend and logging configuration
//! - logging: tracing subscriber setup

pub mod config;
pub mod confirm;
pub mod error;
pub mod logging;
pub mod notify;

pub use config::AppConfig;
pub use confirm::{Confirm, StdinConfirm};
pub use error::{FieldErrors, WorkflowError};
pub use notify::{ConsoleNotifier, Notification, NotificationVariant, Notifier};
