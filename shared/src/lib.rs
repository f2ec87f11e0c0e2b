//! Shared types for the reservation admin
//!
//! Domain models exchanged with the reservation REST backend, plus the
//! time-of-day helpers used wherever a slot time is shown to staff.

pub mod models;
pub mod util;

// Re-exports
pub use models::{Booking, Customer, Resource, Table, TimeSlot};
pub use serde::{Deserialize, Serialize};
