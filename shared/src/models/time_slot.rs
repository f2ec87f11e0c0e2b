//! Time Slot Model

use serde::{Deserialize, Serialize};

use super::{Resource, serde_helpers};

/// Bookable time slot (时段)
///
/// `time` is a time of day without a date ("18:30", "18:30:00").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::lenient_int_opt"
    )]
    pub id: Option<i64>,
    pub slot_id: String,
    #[serde(default, deserialize_with = "serde_helpers::string_or_empty")]
    pub time: String,
}

impl TimeSlot {
    /// New unsaved time slot
    pub fn new(slot_id: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            id: None,
            slot_id: slot_id.into(),
            time: time.into(),
        }
    }
}

impl Resource for TimeSlot {
    const PATH: &'static str = "TimeSlot";
    const LABEL: &'static str = "time slot";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
