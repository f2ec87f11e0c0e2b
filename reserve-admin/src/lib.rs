//! Reserve Admin - restaurant reservation administration
//!
//! 页面控制器:
//! - bookings: make, edit and cancel reservations
//! - customers / tables / time slots: catalog maintenance
//!
//! The controllers in [`workflow`] hold page state and talk to the backend
//! through [`reserve_client::ReservationApi`]; [`display`] resolves what a
//! booking shows; [`commands`] is the terminal front end.

pub use reserve_client;
pub use shared;

pub mod commands;
pub mod core;
pub mod display;
pub mod forms;
pub mod workflow;

pub use crate::core::{FieldErrors, Notification, Notifier, WorkflowError};
pub use workflow::{BookingWorkflow, CatalogWorkflow, DeleteOutcome, FormMode, LoadState};
