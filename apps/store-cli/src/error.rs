//! # Operation Error Type
//!
//! Unified failure type for store operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in an Operation                           │
//! │                                                                         │
//! │  Validator ── Vec<ValidationError> ──────────┐                          │
//! │                                               │                          │
//! │  Repository ── DbError::UniqueViolation ─────┤                          │
//! │            ├── DbError::NotFound ────────────┼──► OperationError        │
//! │            ├── DbError::Rule(CoreError) ─────┤         │                │
//! │            └── anything else ────────────────┘         │                │
//! │                                                         ▼                │
//! │                                      failure_lines() → "❌ ..." (stderr) │
//! │                                                         │                │
//! │                                                         ▼                │
//! │                                      operation returns None / false     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use store_core::{CoreError, ValidationError};
use store_db::DbError;
use thiserror::Error;

/// Why an operation failed.
#[derive(Debug, Error)]
pub enum OperationError {
    /// Entity input rejected before touching storage.
    #[error("validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// A single argument rejected before touching storage.
    #[error(transparent)]
    InvalidInput(ValidationError),

    /// Customer email already registered.
    #[error("email already registered: {0}")]
    DuplicateEmail(String),

    /// Referenced customer or product does not exist.
    #[error("{entity} ID {id} not found")]
    NotFound { entity: String, id: String },

    /// Deletion refused because the customer has orders.
    #[error("customer \"{name}\" has orders")]
    CustomerHasOrders { name: String },

    /// A total or stock value too large to represent.
    #[error(transparent)]
    Rejected(CoreError),

    /// Any other storage failure.
    #[error(transparent)]
    Storage(DbError),
}

impl OperationError {
    /// Lines printed for this failure, in order.
    pub fn failure_lines(&self) -> Vec<String> {
        match self {
            OperationError::Validation(errors) => {
                let mut lines = vec!["❌ Validation errors:".to_string()];
                lines.extend(errors.iter().map(|e| format!("  - {}", e)));
                lines
            }
            OperationError::InvalidInput(err) => {
                vec![format!("❌ {}", capitalize(&err.to_string()))]
            }
            OperationError::DuplicateEmail(email) => {
                vec![format!("❌ Email already registered: {}", email)]
            }
            OperationError::NotFound { entity, id } => {
                vec![format!("❌ {} ID {} not found", entity, id)]
            }
            OperationError::CustomerHasOrders { name } => vec![format!(
                "❌ Customer \"{}\" has orders and cannot be deleted",
                name
            )],
            OperationError::Rejected(err) => vec![format!("❌ {}", err)],
            OperationError::Storage(err) => vec![format!("❌ Error: {}", err)],
        }
    }
}

/// Classifies database errors into operator-facing failures.
impl From<DbError> for OperationError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::UniqueViolation { value, .. } => OperationError::DuplicateEmail(value),
            DbError::NotFound { entity, id } => OperationError::NotFound { entity, id },
            DbError::Rule(rule) => rule.into(),
            other => {
                tracing::error!(error = %other, "Storage operation failed");
                OperationError::Storage(other)
            }
        }
    }
}

impl From<CoreError> for OperationError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CustomerHasOrders { name, .. } => OperationError::CustomerHasOrders { name },
            other => OperationError::Rejected(other),
        }
    }
}

impl From<ValidationError> for OperationError {
    fn from(err: ValidationError) -> Self {
        OperationError::InvalidInput(err)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn capitalize(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
