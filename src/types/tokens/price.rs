//! Fiat price type (USD per token)

use serde::{Deserialize, Serialize};

use super::normalized::NormalizedBalance;
use super::usd::UsdValue;

/// Price of one token in USD.
///
/// Distinguishes a per-unit quote from balances and from aggregate values.
///
/// # Examples
///
/// ```
/// use olyfolio::{NormalizedBalance, UsdPrice, UsdValue};
///
/// let price = UsdPrice::new(10.0);
/// let value = price.value_of(NormalizedBalance::new(5.0));
/// assert_eq!(value, UsdValue::new(50.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UsdPrice(f64);

impl UsdPrice {
    /// Zero price (no quote)
    pub const ZERO: Self = Self(0.0);

    /// Create a new price per token
    pub const fn new(price_per_token: f64) -> Self {
        Self(price_per_token)
    }

    /// Get the inner f64 value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Check if the price is effectively zero (within epsilon)
    pub fn is_zero(&self) -> bool {
        self.0.abs() < f64::EPSILON
    }

    /// USD value of a given balance at this price.
    ///
    /// The balance is the unrounded normalized quantity; display rounding
    /// must not happen before this multiplication.
    pub fn value_of(&self, balance: NormalizedBalance) -> UsdValue {
        UsdValue::new(balance.as_f64() * self.0)
    }
}

impl From<f64> for UsdPrice {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for UsdPrice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
