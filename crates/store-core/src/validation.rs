//! # Validation Module
//!
//! Input validation for customers, products, stock updates and searches.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: THIS MODULE (pure, shared by runner and simulation)          │
//! │  ├── Required fields, minimum lengths, email shape                     │
//! │  └── Positive price, non-negative stock                                │
//! │           │                                                             │
//! │           ▼  (no storage access when any error is found)                │
//! │  Layer 2: Database (SQLite)                                            │
//! │  ├── NOT NULL / CHECK constraints                                      │
//! │  ├── UNIQUE (clientes.email)                                           │
//! │  └── Foreign key (pedidos.cliente_id)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The entity validators accumulate every failure instead of stopping at
//! the first one, so the operator sees all problems with a form at once.
//!
//! ## Usage
//! ```rust
//! use store_core::validation::validate_customer;
//!
//! let errors = validate_customer("Jo", "joao-email.com");
//! let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
//! assert_eq!(messages, ["name must be at least 3 characters", "invalid email"]);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::MIN_CUSTOMER_NAME_LEN;

/// Result type for single-field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates customer input.
///
/// ## Rules (in order)
/// 1. Blank name → `name is required`
/// 2. Otherwise, fewer than 3 characters after trimming →
///    `name must be at least 3 characters`
/// 3. Blank email → `email is required`
/// 4. Otherwise, no `@` → `invalid email`
///
/// An empty vector means the input is valid.
pub fn validate_customer(name: &str, email: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let name = name.trim();
    if name.is_empty() {
        errors.push(ValidationError::required("name"));
    } else if name.chars().count() < MIN_CUSTOMER_NAME_LEN {
        errors.push(ValidationError::TooShort {
            field: "name".to_string(),
            min: MIN_CUSTOMER_NAME_LEN,
        });
    }

    let email = email.trim();
    if email.is_empty() {
        errors.push(ValidationError::required("email"));
    } else if !email.contains('@') {
        errors.push(ValidationError::Invalid {
            field: "email".to_string(),
        });
    }

    errors
}

/// Validates product input.
///
/// ## Rules
/// - Blank name → `name is required`
/// - Price zero or negative → `price must be greater than zero`
pub fn validate_product(name: &str, price: Money) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(ValidationError::required("name"));
    }

    if !price.is_positive() {
        errors.push(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    errors
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a stock quantity; zero is allowed.
pub fn validate_stock_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a customer search term.
///
/// ## Returns
/// The trimmed term.
pub fn validate_search_term(term: &str) -> ValidationResult<&str> {
    let term = term.trim();

    if term.is_empty() {
        return Err(ValidationError::required("search term"));
    }

    Ok(term)
}

// =============================================================================
// Unit Tests
// =============================================================================
