//! Money type for earnings amounts
//!
//! Punches are paid in whole currency units, so amounts are stored as a plain
//! `i64` with no fractional part.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use daka::models::Money;
    /// let amount = Money::new(20);
    /// assert_eq!(amount.amount(), 20);
    /// ```
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Price of `count` units at this rate
    ///
    /// # Examples
    /// ```
    /// use daka::models::Money;
    /// assert_eq!(Money::new(20).times(3), Money::new(60));
    /// ```
    pub const fn times(&self, count: u32) -> Self {
        Self(self.0 * count as i64)
    }

    /// How many whole `unit`s fit into this amount (floor)
    ///
    /// Returns 0 for a non-positive unit.
    pub fn units_floor(&self, unit: Money) -> i64 {
        if unit.0 <= 0 {
            return 0;
        }
        self.0.div_euclid(unit.0)
    }

    /// How many `unit`s are needed to cover this amount (ceiling)
    ///
    /// Returns 0 for a non-positive amount or unit.
    pub fn units_ceil(&self, unit: Money) -> i64 {
        if self.0 <= 0 || unit.0 <= 0 {
            return 0;
        }
        (self.0 + unit.0 - 1) / unit.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}
