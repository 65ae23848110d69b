use thiserror::Error;

use crate::model::ContactField;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{field} cannot be empty")]
    EmptyField { field: String },

    #[error("Invalid {field}: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Contact with this {field} already exists: {value}")]
    DuplicateContact { field: ContactField, value: String },

    #[error("Contact not found: {key}")]
    NotFound { key: String },

    #[error("Contact table has unexpected columns: {found}")]
    Schema { found: String },

    #[error("Contact table row {row} has a blank {field}")]
    BlankCell { row: usize, field: ContactField },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ContactError {
    /// Storage failures end the current operation and are not retried.
    pub fn is_storage_failure(&self) -> bool {
        matches!(
            self,
            ContactError::Io(_)
                | ContactError::Csv(_)
                | ContactError::Schema { .. }
                | ContactError::BlankCell { .. }
        )
    }

    /// Text shown at an interactive prompt after a rejected answer.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::InvalidFormat { field, reason } if field == "number" => {
                format!("Invalid number. {}", reason)
            }
            ContactError::EmptyField { .. } => "Field cannot be empty.".to_string(),
            other => other.to_string(),
        }
    }
}

pub type ContactResult<T> = Result<T, ContactError>;
