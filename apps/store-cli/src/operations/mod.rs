//! # Store Operations
//!
//! The externally invokable use cases, as methods on [`Store`].
//!
//! ## Operation Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  store.add_customer("Maria Santos", "maria@email.com", "")             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate ──fail──► "❌ Validation errors: ..." (stderr) ──► None       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  repository call ──fail──► OperationError lines (stderr) ──► None      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  "✅ ..." (stdout) ──► Some(value)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No error escapes an operation; callers only see the success value.

mod customer;
mod order;
mod product;
mod report;

use store_db::Database;

use crate::error::OperationError;

/// Owned handle to the store database.
///
/// Built once at startup from a [`Database`] and closed explicitly
/// at the end of the run.
#[derive(Debug, Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    pub fn new(db: Database) -> Self {
        Store { db }
    }

    /// The underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Closes the connection pool.
    pub async fn close(&self) {
        self.db.close().await;
    }
}

/// Prints the outcome of an operation and keeps only the success value.
fn report<T>(result: Result<T, OperationError>, render: impl FnOnce(&T) -> String) -> Option<T> {
    match result {
        Ok(value) => {
            println!("{}", render(&value));
            Some(value)
        }
        Err(err) => {
            for line in err.failure_lines() {
                eprintln!("{}", line);
            }
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Store;
    use store_db::{Database, DbConfig};

    pub async fn store() -> Store {
        Store::new(Database::new(DbConfig::in_memory()).await.unwrap())
    }
}
