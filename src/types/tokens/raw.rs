//! Raw on-chain balance type

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::convention::DecimalConvention;
use super::normalized::NormalizedBalance;

/// Raw token balance as returned by the chain, denominated in the token's
/// smallest subunit.
///
/// This value must not be treated as a floating-point quantity until it is
/// rescaled with the token's [`DecimalConvention`] via
/// [`rescale`](Self::rescale).
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use olyfolio::{DecimalConvention, RawBalance};
///
/// // 5 OHM in 9-decimal subunits
/// let raw = RawBalance::new(U256::from(5_000_000_000u64));
/// let balance = raw.rescale(DecimalConvention::Subunit(9));
/// assert_eq!(balance.as_f64(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawBalance(U256);

impl RawBalance {
    /// Zero balance
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new raw balance from U256
    pub const fn new(amount: U256) -> Self {
        Self(amount)
    }

    /// Get the inner U256 value
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Rescale by the token's decimal convention: balance / 10^decimals.
    ///
    /// Converts the raw integer into an unrounded human-readable quantity.
    /// Exact subunit multiples rescale exactly (10^9 subunits at 9 decimals
    /// is exactly 1.0).
    pub fn rescale(&self, convention: DecimalConvention) -> NormalizedBalance {
        // U256 has no lossless f64 conversion; go through the decimal string
        let raw_str = self.0.to_string();
        let raw_f64 = raw_str.parse::<f64>().unwrap_or_else(|e| {
            tracing::warn!(
                balance = %self.0,
                error = %e,
                "Failed to parse raw balance to f64, using 0.0"
            );
            0.0
        });

        NormalizedBalance::new(raw_f64 / convention.divisor())
    }
}

impl From<u64> for RawBalance {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for RawBalance {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for RawBalance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
