//! Workflow error types

use std::collections::BTreeMap;
use std::fmt;

use reserve_client::ClientError;
use thiserror::Error;
use validator::ValidationErrors;

/// Inline form errors, one message per offending field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    /// Message shown next to `field`, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

impl From<ValidationErrors> for FieldErrors {
    /// A missing value is reported before anything else wrong with it
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, list) in errors.field_errors() {
            let chosen = list
                .iter()
                .find(|e| e.code == "length")
                .or_else(|| list.first());
            if let Some(error) = chosen {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {}", field));
                fields.insert(field.to_string(), message);
            }
        }
        fields
    }
}

/// Workflow operation error
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// Form input rejected before any request was made
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// Edit or delete requested for a record that was never persisted
    #[error("Cannot {action} {entity} without ID")]
    MissingIdentity {
        action: &'static str,
        entity: &'static str,
    },

    /// A submit for the same form is still running
    #[error("A submission is already in progress")]
    SubmitInFlight,

    /// Backend call failed
    #[error("Client error: {0}")]
    Client(#[from] ClientError),
}

impl WorkflowError {
    /// Field errors when this is a validation failure
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            WorkflowError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}
