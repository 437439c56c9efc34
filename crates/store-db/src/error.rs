//! # Storage Errors
//!
//! What can go wrong between a repository call and SQLite.
//!
//! ```text
//! sqlx::Error ──► DbError ──► OperationError (store-cli) ──► "❌ ..." line
//!                    │
//!                    └── constraint failures are sorted by ErrorKind,
//!                        never by matching message text
//! ```

use sqlx::error::{DatabaseError, ErrorKind};
use store_core::CoreError;
use thiserror::Error;

/// Failure of a store database call.
#[derive(Debug, Error)]
pub enum DbError {
    /// No customer or product has the requested id.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// A second customer with an already registered email.
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// A `pedidos` row pointing at a missing customer, or a delete that
    /// would orphan one.
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// CHECK constraint violation (negative stock, non-positive price).
    #[error("Check constraint violation: {message}")]
    CheckViolation { message: String },

    /// A business rule rejected the operation.
    #[error(transparent)]
    Rule(#[from] CoreError),

    /// The database file could not be opened, or the pool is closed.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Any other error reported by SQLite itself.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Timed out waiting for a free connection.
    #[error("Connection pool exhausted")]
    PoolExhausted,

    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// `DbError::not_found("Product", 7)` reads "Product not found: 7".
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        DbError::UniqueViolation {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Returns true when this error is a unique violation.
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, DbError::UniqueViolation { .. })
    }
}

/// Names the column (or constraint) a database error points at.
///
/// Backends that report the constraint name (PostgreSQL) are used as-is;
/// SQLite only carries it in the message (`UNIQUE constraint failed: t.col`).
fn constraint_target(err: &dyn DatabaseError) -> String {
    if let Some(constraint) = err.constraint() {
        return constraint.to_string();
    }

    err.message()
        .rsplit_once(": ")
        .map(|(_, target)| target.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// ```text
/// sqlx::Error::RowNotFound              → DbError::NotFound
/// Database(kind = UniqueViolation)      → DbError::UniqueViolation
/// Database(kind = ForeignKeyViolation)  → DbError::ForeignKeyViolation
/// Database(kind = CheckViolation)       → DbError::CheckViolation
/// Database(other)                       → DbError::QueryFailed
/// sqlx::Error::PoolTimedOut             → DbError::PoolExhausted
/// Other                                 → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => DbError::UniqueViolation {
                    field: constraint_target(&*db_err),
                    value: "unknown".to_string(),
                },
                ErrorKind::ForeignKeyViolation => DbError::ForeignKeyViolation {
                    message: db_err.message().to_string(),
                },
                ErrorKind::CheckViolation => DbError::CheckViolation {
                    message: db_err.message().to_string(),
                },
                _ => DbError::QueryFailed(db_err.message().to_string()),
            },

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

pub type DbResult<T> = Result<T, DbError>;
