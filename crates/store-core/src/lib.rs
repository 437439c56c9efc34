//! # store-core: Pure Business Logic for the Store Manager
//!
//! This crate contains the domain types and business rules of the store
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Store Manager Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │            store-cli (runner + simulation)                      │   │
//! │  │    add_customer, list_products, create_order, ...               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ store-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │   money   │  │ validation│                  │   │
//! │  │   │ Customer  │  │   Money   │  │  customer │                  │   │
//! │  │   │  Product  │  │           │  │  product  │                  │   │
//! │  │   │   Order   │  │           │  │   stock   │                  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CONSOLE • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    store-db (Database Layer)                    │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Product, Order, SalesSummary)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for customers, products and stock
//! - [`text`] - Unicode case-insensitive matching and name ordering
//!
//! ## Example Usage
//!
//! ```rust
//! use store_core::money::Money;
//! use store_core::validation::validate_product;
//!
//! let price = Money::from_major_minor(80, 0);
//! assert!(validate_product("Mouse Logitech", price).is_empty());
//! assert_eq!(price.to_string(), "R$ 80.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod text;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum customer name length, counted in characters after trimming.
pub const MIN_CUSTOMER_NAME_LEN: usize = 3;

/// Currency symbol used when rendering [`Money`].
pub const CURRENCY_SYMBOL: &str = "R$";
