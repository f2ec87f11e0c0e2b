//! Booking Model

use serde::{Deserialize, Serialize};

use super::{Resource, serde_helpers};

/// Identity sent with a new booking; the backend ignores it and assigns its own
pub const UNSAVED_BOOKING_ID: i64 = 0;

/// Booking entity (预订)
///
/// Holds references to a customer, a table and a time slot; never embedded
/// copies. `booking_number` is assigned by the backend and never sent back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::lenient_int_opt"
    )]
    pub id: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::lenient_int_opt"
    )]
    pub booking_number: Option<i64>,
    #[serde(deserialize_with = "serde_helpers::lenient_int")]
    pub customer_id: i64,
    #[serde(deserialize_with = "serde_helpers::lenient_int")]
    pub table_id: i64,
    #[serde(deserialize_with = "serde_helpers::lenient_int")]
    pub booking_slot_id: i64,
    pub booking_date: String,
    #[serde(deserialize_with = "serde_helpers::lenient_int")]
    pub number_of_people: i32,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub special_request: String,
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_confirmed: bool,
}

/// Fields staff fill in when making a reservation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub customer_id: i64,
    pub table_id: i64,
    pub booking_slot_id: i64,
    pub booking_date: String,
    pub number_of_people: i32,
    pub special_request: String,
}

impl BookingDraft {
    /// Wire record for create/update.
    ///
    /// Identity is the unsaved sentinel, no booking number, always confirmed.
    pub fn into_booking(self) -> Booking {
        Booking {
            id: Some(UNSAVED_BOOKING_ID),
            booking_number: None,
            customer_id: self.customer_id,
            table_id: self.table_id,
            booking_slot_id: self.booking_slot_id,
            booking_date: self.booking_date,
            number_of_people: self.number_of_people,
            special_request: self.special_request,
            is_confirmed: true,
        }
    }
}

impl Resource for Booking {
    const PATH: &'static str = "Booking";
    const LABEL: &'static str = "booking";

    /// Persisted identity; the unsaved sentinel counts as none
    fn id(&self) -> Option<i64> {
        self.id.filter(|id| *id != UNSAVED_BOOKING_ID)
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
