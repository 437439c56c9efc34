//! # Money Module
//!
//! Integer-cent amounts in reais.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Where amounts come from and where they end up                          │
//! │                                                                         │
//! │  produtos.preco (INTEGER cents) ──► Product::price()                    │
//! │        │                                 │                              │
//! │        │                                 ├──► × estoque ──► stock value │
//! │        │                                 │                              │
//! │        └──► Σ over the order ──► pedidos.valor_total ──► sales report   │
//! │                                                                         │
//! │  Every step is checked i64 arithmetic; rendering happens once, at the   │
//! │  console, as "R$ 1234.56".                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use store_core::money::Money;
//!
//! let mouse = Money::from_major_minor(80, 0);
//! let keyboard = Money::from_cents(35000);
//!
//! assert_eq!(mouse.checked_add(keyboard).unwrap().to_string(), "R$ 430.00");
//! assert_eq!(mouse.checked_mul(25).unwrap().cents(), 200000);
//! assert!(Money::from_cents(i64::MAX).checked_mul(2).is_none());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::CURRENCY_SYMBOL;

// =============================================================================
// Money Type
// =============================================================================

/// An amount in centavos.
///
/// Serializes as a bare integer, so seed files and database columns carry
/// cents directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Wraps a raw centavo count.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (reais and centavos).
    ///
    /// ## Example
    /// ```rust
    /// use store_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(3500, 0).cents(), 350000);
    /// assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    /// ```
    ///
    /// The sign is taken from `major`; `minor` is always 0-99.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Strictly greater than zero; the rule for product prices.
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Sum of two amounts, `None` past `i64` cents.
    #[inline]
    pub const fn checked_add(self, other: Money) -> Option<Money> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Amount times a unit count, `None` past `i64` cents.
    #[inline]
    pub const fn checked_mul(self, qty: i64) -> Option<Money> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `R$ 1234.56`, the format used by every console report.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0.is_negative() { "-" } else { "" };
        write!(
            f,
            "{} {}{}.{:02}",
            CURRENCY_SYMBOL,
            sign,
            self.major().abs(),
            self.minor()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
