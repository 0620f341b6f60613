//! Prices
//!
//! All monetary amounts are integer minor units (paise); display is in
//! rupees. Arithmetic saturates rather than wrapping.

use std::{fmt, iter::Sum};

use serde::{Deserialize, Serialize};

/// A monetary amount in minor units (paise).
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a price from minor units (paise).
    #[must_use]
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Create a price from whole rupees.
    #[must_use]
    pub const fn from_rupees(rupees: u64) -> Self {
        Self(rupees.saturating_mul(100))
    }

    /// The amount in minor units (paise).
    #[must_use]
    pub const fn as_minor(self) -> u64 {
        self.0
    }

    /// Multiply by a quantity, saturating at the maximum representable amount.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Add another amount, saturating at the maximum representable amount.
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupees_are_hundred_paise() {
        assert_eq!(Price::from_rupees(15), Price::from_minor(15_00));
    }

    #[test]
    fn times_scales_by_quantity() {
        assert_eq!(Price::from_minor(10_00).times(3), Price::from_minor(30_00));
    }

    #[test]
    fn times_saturates_instead_of_wrapping() {
        assert_eq!(
            Price::from_minor(u64::MAX).times(2),
            Price::from_minor(u64::MAX)
        );
    }

    #[test]
    fn sum_of_prices() {
        let total: Price = [Price::from_minor(10_00), Price::from_minor(5_50)]
            .into_iter()
            .sum();

        assert_eq!(total, Price::from_minor(15_50));
    }

    #[test]
    fn displays_in_rupees() {
        assert_eq!(Price::from_minor(15_00).to_string(), "₹15.00");
        assert_eq!(Price::from_minor(7).to_string(), "₹0.07");
        assert_eq!(Price::from_minor(120_50).to_string(), "₹120.50");
    }
}
