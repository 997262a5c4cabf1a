//! Day-count type with decimal precision.
//!
//! CRITICAL: Never use floating-point for day quantities.
//! Balances mix whole and half days and are re-summed on every
//! reconciliation; this type wraps `rust_decimal::Decimal` so repeated
//! arithmetic never drifts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// A quantity of leave days (whole or half days).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Days(pub Decimal);

impl Days {
    /// Zero days.
    pub const ZERO: Self = Self(Decimal::ZERO);
    /// One day.
    pub const ONE: Self = Self(Decimal::ONE);

    /// Half a day.
    #[must_use]
    pub fn half() -> Self {
        Self(Decimal::new(5, 1))
    }

    /// Creates a day quantity from a decimal value.
    #[must_use]
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Creates a whole-day quantity.
    #[must_use]
    pub fn whole(days: u32) -> Self {
        Self(Decimal::from(days))
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns true if the quantity is zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if the quantity is negative.
    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    /// Returns true if the quantity is strictly positive.
    #[must_use]
    pub fn is_positive(self) -> bool {
        self.0.is_sign_positive() && !self.0.is_zero()
    }

    /// Rounds to two decimal places, half-up.
    #[must_use]
    pub fn round2(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Clamps the quantity to at most `max`.
    #[must_use]
    pub fn min(self, max: Self) -> Self {
        if self.0 > max.0 { max } else { self }
    }
}

impl std::ops::Add for Days {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Days {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::ops::AddAssign for Days {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::ops::SubAssign for Days {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl std::ops::Neg for Days {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Days {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|d| d.0).sum())
    }
}

impl From<Decimal> for Days {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Days {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
