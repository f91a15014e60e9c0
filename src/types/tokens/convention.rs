//! Decimal-scaling conventions for tracked tokens

use serde::{Deserialize, Serialize};

/// How a token's on-chain integer balance maps to a human-readable quantity.
///
/// OHM and sOHM store balances as integer subunits with 9 decimals, like
/// gwei. wsOHM balances are denominated in the chain's native 18-decimal
/// form. The convention also fixes the display precision for the token:
/// subunit balances render with 2 decimals, native-decimal balances with 5.
///
/// # Examples
///
/// ```
/// use olyfolio::DecimalConvention;
///
/// let ohm = DecimalConvention::Subunit(9);
/// assert_eq!(ohm.decimals(), 9);
/// assert_eq!(ohm.display_precision(), 2);
///
/// let wsohm = DecimalConvention::Native;
/// assert_eq!(wsohm.decimals(), 18);
/// assert_eq!(wsohm.display_precision(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecimalConvention {
    /// Integer subunit with the given number of decimals (9 or 18 today).
    Subunit(u8),
    /// The chain's native 18-decimal denomination.
    Native,
}

impl DecimalConvention {
    /// Decimals of the chain's native denomination.
    pub const NATIVE_DECIMALS: u8 = 18;

    /// Number of decimal places between the raw integer and one whole token.
    pub const fn decimals(&self) -> u8 {
        match self {
            Self::Subunit(decimals) => *decimals,
            Self::Native => Self::NATIVE_DECIMALS,
        }
    }

    /// Divisor for rescaling: 10^decimals.
    pub fn divisor(&self) -> f64 {
        10_f64.powi(self.decimals() as i32)
    }

    /// Fixed display precision for balances under this convention.
    ///
    /// Presentation-only; value computation always uses the unrounded
    /// quantity.
    pub const fn display_precision(&self) -> usize {
        match self {
            Self::Subunit(_) => 2,
            Self::Native => 5,
        }
    }
}

impl std::fmt::Display for DecimalConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subunit(decimals) => write!(f, "subunit-{decimals}"),
            Self::Native => write!(f, "native-{}", Self::NATIVE_DECIMALS),
        }
    }
}
