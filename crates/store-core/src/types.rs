//! # Domain Types
//!
//! Core domain types used throughout the store manager.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Customer     │   │     Product     │   │      Order      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  id             │       │
//! │  │  name           │   │  name           │   │  customer_id FK │       │
//! │  │  email (unique) │   │  price_cents    │   │  total_cents    │       │
//! │  │  phone          │   │  stock (>= 0)   │   │  created_at     │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  Inputs: NewCustomer, NewProduct    Read models: ProductListing,        │
//! │                                                  SalesSummary           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identifiers are generated by the database on insert and never change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Database-generated entity identifier.
pub type EntityId = i64;

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: EntityId,
    pub name: String,
    /// Unique across customers.
    pub email: String,
    /// Empty when not provided.
    pub phone: String,
}

impl Customer {
    /// Phone as shown in listings, `-` when empty.
    pub fn display_phone(&self) -> &str {
        if self.phone.is_empty() {
            "-"
        } else {
            &self.phone
        }
    }
}

/// Input for creating a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        NewCustomer {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    pub id: EntityId,
    pub name: String,
    /// Price in cents (smallest currency unit).
    pub price_cents: i64,
    /// Units in stock, never negative.
    pub stock: i64,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Value of the units in stock (`price × stock`).
    pub fn stock_value(&self) -> CoreResult<Money> {
        self.price()
            .checked_mul(self.stock)
            .ok_or(CoreError::AmountOverflow {
                what: "Stock value",
            })
    }
}

/// Input for creating a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub stock: i64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: Money, stock: i64) -> Self {
        NewProduct {
            name: name.into(),
            price,
            stock,
        }
    }
}

/// Products ordered by name together with their summed stock value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductListing {
    pub products: Vec<Product>,
    pub total_stock_value: Money,
}

impl ProductListing {
    /// Builds a listing, summing `price × stock` over every product.
    ///
    /// Fails instead of wrapping when a value leaves the `i64` cent range.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut total_stock_value = Money::zero();
        for product in &products {
            total_stock_value = total_stock_value
                .checked_add(product.stock_value()?)
                .ok_or(CoreError::AmountOverflow {
                    what: "Total stock value",
                })?;
        }

        Ok(ProductListing {
            products,
            total_stock_value,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }
}

// =============================================================================
// Order
// =============================================================================

/// An order placed by a customer.
///
/// The total is a snapshot of the referenced products' prices at creation
/// time. Line items are not stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    pub id: EntityId,
    pub customer_id: EntityId,
    pub total_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Returns the order total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Sales Report
// =============================================================================

/// One line of the sales report: a customer and their order totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct SalesSummary {
    pub customer_name: String,
    pub order_count: i64,
    /// Zero for customers without orders.
    pub total_cents: i64,
}

impl SalesSummary {
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
