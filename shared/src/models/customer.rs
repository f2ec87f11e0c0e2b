//! Customer Model

use serde::{Deserialize, Serialize};

use super::{Resource, serde_helpers};

/// Customer entity (顾客)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "serde_helpers::lenient_int_opt"
    )]
    pub id: Option<i64>,
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

impl Customer {
    /// New unsaved customer
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }
}

impl Resource for Customer {
    const PATH: &'static str = "Customer";
    const LABEL: &'static str = "customer";

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
