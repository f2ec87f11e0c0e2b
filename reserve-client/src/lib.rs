//! Reserve Client - HTTP client for the reservation backend
//!
//! Typed CRUD over the four backend resources (Customer, Table, TimeSlot,
//! Booking) plus the customer-scoped booking query.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
#[cfg(feature = "in-memory")]
pub mod memory;

pub use api::{ReservationApi, ReservationClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-memory")]
pub use memory::{InMemoryApi, RecordedCall};

// Re-export shared types for convenience
pub use shared::models::{Booking, Customer, Resource, Table, TimeSlot};
