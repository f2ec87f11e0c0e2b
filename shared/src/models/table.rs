//! Restaurant Table Model

use serde::{Deserialize, Serialize};

use super::{Resource, serde_helpers};

/// Restaurant table entity (桌台)
///
/// `table_number` is a label ("12", "T-3", "Patio 1"), not necessarily numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::lenient_int_opt"
    )]
    pub id: Option<i64>,
    pub table_number: String,
    #[serde(deserialize_with = "serde_helpers::lenient_int")]
    pub number_of_seats: i32,
}

impl Table {
    /// New unsaved table
    pub fn new(table_number: impl Into<String>, number_of_seats: i32) -> Self {
        Self {
            id: None,
            table_number: table_number.into(),
            number_of_seats,
        }
    }
}

impl Resource for Table {
    const PATH: &'static str = "Table";
    const LABEL: &'static str = "table";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
