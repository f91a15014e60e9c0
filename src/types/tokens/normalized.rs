//! Normalized (human-readable) balance type

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Token balance rescaled by decimals into human-readable form.
///
/// This is the unrounded quantity that feeds value computation. Display
/// rounding happens at the presentation layer and never flows back here.
///
/// # Invariant
///
/// Balances are never negative: creation clamps negative inputs to zero.
///
/// # Examples
///
/// ```
/// use olyfolio::{NormalizedBalance, UsdPrice, UsdValue};
///
/// let balance = NormalizedBalance::new(5.0);
/// let value = UsdPrice::new(10.0).value_of(balance);
/// assert_eq!(value, UsdValue::new(50.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedBalance(f64);

impl NormalizedBalance {
    /// Zero balance
    pub const ZERO: Self = Self(0.0);

    /// Create a new normalized balance, clamping negative inputs to zero.
    pub fn new(balance: f64) -> Self {
        Self(balance.max(0.0))
    }

    /// Get the inner f64 value
    pub const fn as_f64(&self) -> f64 {
        self.0
    }

    /// Check if the balance is effectively zero (within epsilon)
    pub fn is_zero(&self) -> bool {
        self.0.abs() < f64::EPSILON
    }
}

impl From<f64> for NormalizedBalance {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl Add for NormalizedBalance {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::fmt::Display for NormalizedBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let balance = NormalizedBalance::new(1.5);
        assert_eq!(balance.as_f64(), 1.5);
    }

    #[test]
    fn test_clamps_negative_to_zero() {
        assert_eq!(NormalizedBalance::new(-1.0).as_f64(), 0.0);
        assert_eq!(NormalizedBalance::new(-0.000001).as_f64(), 0.0);
        assert_eq!(NormalizedBalance::new(100.5).as_f64(), 100.5);
    }

    #[test]
    fn test_zero() {
        assert!(NormalizedBalance::ZERO.is_zero());
        assert!(NormalizedBalance::new(0.0).is_zero());
        assert!(!NormalizedBalance::new(0.1).is_zero());
    }

    #[test]
    fn test_addition() {
        let sum = NormalizedBalance::new(1.5) + NormalizedBalance::new(2.5);
        assert_eq!(sum.as_f64(), 4.0);
    }

    #[test]
    fn test_display_formatting() {
        let balance = NormalizedBalance::new(1.234567890);
        assert_eq!(format!("{}", balance), "1.234568");
    }

    #[test]
    fn test_serialization() {
        let balance = NormalizedBalance::new(1.5);
        let json = serde_json::to_string(&balance).unwrap();
        let deserialized: NormalizedBalance = serde_json::from_str(&json).unwrap();
        assert_eq!(balance, deserialized);
    }
}
