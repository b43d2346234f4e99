//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as plain JSON numbers (`199`, `249.5`). Internally they
//! are [`Decimal`] so cart subtotals and totals add up exactly.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Display-only currency prefix. Never part of the stored value.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
    /// The input is negative.
    #[error("price cannot be negative")]
    Negative,
}

/// A product price in the shop's single currency.
///
/// ```
/// use lush_petals_core::Price;
///
/// let price: Price = "199".parse().unwrap();
/// assert_eq!(price.to_string(), "₹199.00");
/// assert_eq!(price.times(2).to_string(), "₹398.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Zero, the starting point of a cart total.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The raw amount, without currency.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }

    /// The amount fixed to two decimal places, without the currency prefix.
    ///
    /// Halves round away from zero.
    #[must_use]
    pub fn fixed(&self) -> String {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}")
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{CURRENCY_SYMBOL}{}", self.fixed())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount =
            Decimal::from_str(s.trim()).map_err(|_| PriceError::Invalid(s.to_string()))?;
        if amount.is_sign_negative() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_two_decimals() {
        assert_eq!("199".parse::<Price>().unwrap().fixed(), "199.00");
        assert_eq!("12.5".parse::<Price>().unwrap().fixed(), "12.50");
        assert_eq!("0.125".parse::<Price>().unwrap().to_string(), "₹0.13");
    }

    #[test]
    fn test_parse_rejects_garbage_and_negatives() {
        assert!(matches!("rose".parse::<Price>(), Err(PriceError::Invalid(_))));
        assert_eq!("-1".parse::<Price>(), Err(PriceError::Negative));
    }

    #[test]
    fn test_sum_is_exact() {
        let prices = ["0.1", "0.2"].map(|p| p.parse::<Price>().unwrap());
        let total: Price = prices.into_iter().sum();
        assert_eq!(total, "0.3".parse().unwrap());
    }

    #[test]
    fn test_decodes_json_integers_and_floats() {
        let whole: Price = serde_json::from_str("199").unwrap();
        assert_eq!(whole.fixed(), "199.00");
        let fractional: Price = serde_json::from_str("249.99").unwrap();
        assert_eq!(fractional.fixed(), "249.99");
    }

    #[test]
    fn test_encodes_as_json_number() {
        let price: Price = "249.99".parse().unwrap();
        let value = serde_json::to_value(price).unwrap();
        assert!(value.is_number());
    }
}
