//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Units                                        │
//! │    Catalog prices are whole currency units (no fractional part),    │
//! │    so Money is a plain unsigned integer and all cart math is        │
//! │    exact by construction.                                           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use minishop_core::money::Money;
//!
//! let price = Money::from_units(8_500);
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.units(), 17_000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary amount in whole currency units.
///
/// ## Design Decisions
/// - **u64 (unsigned)**: prices are non-negative and this storefront has
///   no refunds or discounts, so negative amounts cannot occur
/// - **Single field tuple struct**: zero-cost abstraction over u64
/// - **Transparent serde**: serializes as a bare integer, which is what
///   the checkout payload wire format expects
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: u64) -> Self {
        Money(units)
    }

    /// Returns the amount in whole currency units.
    #[inline]
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Zero money value. The total of an empty cart.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies the amount by a line quantity.
    ///
    /// ## Example
    /// ```rust
    /// use minishop_core::money::Money;
    ///
    /// let unit_price = Money::from_units(2_500);
    /// assert_eq!(unit_price.multiply_quantity(2).units(), 5_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as u64)
    }

    /// Formats the bare amount with thousands grouping ("35 000").
    ///
    /// Grouping uses a regular space, matching the uk-UA locale style
    /// the storefront displays prices in.
    pub fn grouped(&self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        let offset = digits.len() % 3;
        for (i, ch) in digits.chars().enumerate() {
            if i != 0 && (i + 3 - offset) % 3 == 0 {
                out.push(' ');
            }
            out.push(ch);
        }
        out
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows the grouped amount with the currency sign ("35 000 ₴").
///
/// This is the label the view renderer puts on product cards. Anything
/// fancier (locale negotiation, symbol position) belongs to the
/// presentation surface, which is out of scope.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ₴", self.grouped())
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Summation over cart lines.
impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(35_000);
        assert_eq!(money.units(), 35_000);
    }

    #[test]
    fn test_zero() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert_eq!(zero, Money::default());
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(8_500);
        let b = Money::from_units(2_500);

        assert_eq!((a + b).units(), 11_000);

        let mut acc = Money::zero();
        acc += a;
        acc += b;
        assert_eq!(acc.units(), 11_000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_units(2_500);
        assert_eq!(unit_price.multiply_quantity(3).units(), 7_500);
        assert_eq!(unit_price.multiply_quantity(0).units(), 0);
    }

    #[test]
    fn test_sum() {
        let total: Money = [8_500, 2_500, 2_500]
            .iter()
            .map(|&u| Money::from_units(u))
            .sum();
        assert_eq!(total.units(), 13_500);
    }

    #[test]
    fn test_grouping() {
        assert_eq!(Money::from_units(0).grouped(), "0");
        assert_eq!(Money::from_units(999).grouped(), "999");
        assert_eq!(Money::from_units(8_500).grouped(), "8 500");
        assert_eq!(Money::from_units(35_000).grouped(), "35 000");
        assert_eq!(Money::from_units(1_234_567).grouped(), "1 234 567");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(45_000)), "45 000 ₴");
        assert_eq!(format!("{}", Money::zero()), "0 ₴");
    }
}
