//! # Error Types
//!
//! Domain-specific error types for store-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  store-core errors (this file)                                         │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  store-db errors (separate crate)                                      │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  store-cli errors (app)                                                │
//! │  └── OperationError   - What the operator sees on the console          │
//! │                                                                         │
//! │  ValidationError ─────────────────────────► OperationError → ❌        │
//! │  CoreError ──► DbError::Rule (or direct) ──► OperationError → ❌        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (name, field, etc.)
//! 3. Errors are enum variants, never String
//! 4. The `Display` text of a `ValidationError` IS the operator message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business rule errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Customer still has orders referencing it.
    ///
    /// ## When This Occurs
    /// - Deleting a customer with one or more orders
    #[error("Customer \"{name}\" has orders and cannot be deleted")]
    CustomerHasOrders { name: String, order_count: i64 },

    /// A computed amount left the range of `i64` cents.
    ///
    /// ## When This Occurs
    /// - Stock value of a product or of the whole catalogue
    /// - Summing the prices of an order
    #[error("{what} is too large to compute")]
    AmountOverflow { what: &'static str },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when operator input doesn't meet requirements.
/// Validation always runs before any storage access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value has the wrong shape (e.g. an email without `@`).
    #[error("invalid {field}")]
    Invalid { field: String },

    /// Value must be strictly greater than zero.
    #[error("{field} must be greater than zero")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    Negative { field: String },
}

impl ValidationError {
    /// Creates a Required error for a field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result of a business rule or an amount computation.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::required("name").to_string(), "name is required");

        let err = ValidationError::TooShort {
            field: "name".to_string(),
            min: 3,
        };
        assert_eq!(err.to_string(), "name must be at least 3 characters");

        let err = ValidationError::Invalid {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "invalid email");

        let err = ValidationError::MustBePositive {
            field: "price".to_string(),
        };
        assert_eq!(err.to_string(), "price must be greater than zero");

        let err = ValidationError::Negative {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity cannot be negative");
    }

    #[test]
    fn test_customer_has_orders_message() {
        let err = CoreError::CustomerHasOrders {
            name: "Maria Santos".to_string(),
            order_count: 2,
        };
        assert_eq!(
            err.to_string(),
            "Customer \"Maria Santos\" has orders and cannot be deleted"
        );
    }

    #[test]
    fn test_amount_overflow_message() {
        let err = CoreError::AmountOverflow {
            what: "Order total",
        };
        assert_eq!(err.to_string(), "Order total is too large to compute");
    }
}
