//! Data models
//!
//! Wire shapes of the reservation backend (JSON, camelCase).
//! All IDs are `i64`; integer fields coming off the wire go through
//! [`serde_helpers`] so numeric strings are accepted exactly once, here.

pub mod booking;
pub mod customer;
pub mod serde_helpers;
pub mod table;
pub mod time_slot;

// Re-exports
pub use booking::*;
pub use customer::*;
pub use table::*;
pub use time_slot::*;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// A REST resource owned by the backend.
///
/// Every resource lives under a single collection path (`/Customer`,
/// `/Table`, ...) and is replaced wholesale on update, with its identity
/// travelling in the body.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection path segment, without slashes
    const PATH: &'static str;

    /// Human readable singular name ("customer", "time slot")
    const LABEL: &'static str;

    /// Server assigned identity, absent until persisted
    fn id(&self) -> Option<i64>;

    /// Same record carrying the given identity
    fn with_id(self, id: i64) -> Self;
}
