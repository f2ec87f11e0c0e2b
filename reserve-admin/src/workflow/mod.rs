//! Page controllers
//!
//! One controller instance per page. It owns the page state (loaded lists,
//! the form being edited, the edit target) and exposes the operations staff
//! trigger. Outcomes are reported through the [`Notifier`](crate::core::Notifier)
//! and returned to the caller.

use std::sync::atomic::{AtomicBool, Ordering};

pub mod booking;
pub mod catalog;

pub use booking::{BookingPage, BookingWorkflow, FormMode};
pub use catalog::{CatalogEntity, CatalogPage, CatalogWorkflow};

/// Page data readiness
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Loading,
    Failed {
        message: String,
    },
    Ready,
}

impl LoadState {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }
}

/// Result of a delete request that passed its preconditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// Staff declined the confirmation
    Cancelled,
}

/// Holds the submit flag; cleared on drop
///
/// ```ignore
/// let _guard = SubmitGuard::try_acquire(&self.submitting)
///     .ok_or(WorkflowError::SubmitInFlight)?;
/// ```
#[derive(Debug)]
pub struct SubmitGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> SubmitGuard<'a> {
    /// `None` when a submit already holds the flag
    #[must_use]
    pub fn try_acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Label for a submit button
pub fn submit_label(submitting: bool, idle: &'static str) -> &'static str {
    if submitting {
        "Submitting..."
    } else {
        idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_guard_is_exclusive_and_released() {
        let flag = AtomicBool::new(false);
        {
            let guard = SubmitGuard::try_acquire(&flag);
            assert!(guard.is_some());
            assert!(SubmitGuard::try_acquire(&flag).is_none());
            assert!(flag.load(Ordering::Acquire));
        }
        assert!(!flag.load(Ordering::Acquire));
        assert!(SubmitGuard::try_acquire(&flag).is_some());
    }

    #[test]
    fn test_submit_label() {
        assert_eq!(submit_label(false, "Book Table"), "Book Table");
        assert_eq!(submit_label(true, "Book Table"), "Submitting...");
    }
}
