//! Strong types for token balances and fiat values
//!
//! Newtype wrappers that keep raw on-chain integers, human-readable
//! quantities, and USD-denominated values from being mixed up.
//!
//! # Type Relationships
//!
//! ```text
//! RawBalance (U256, smallest subunit)
//!     |
//!     | rescale(DecimalConvention)
//!     ↓
//! NormalizedBalance (f64, human-readable, unrounded)
//!     |
//!     | × UsdPrice
//!     ↓
//! UsdValue (f64, USD-denominated)
//! ```
//!
//! Display rounding (2 decimals for subunit tokens, 5 for native-decimal
//! tokens) happens in [`crate::display`] and never feeds back into value
//! computation.

mod convention;
mod normalized;
mod price;
mod raw;
mod usd;

pub use convention::DecimalConvention;
pub use normalized::NormalizedBalance;
pub use price::UsdPrice;
pub use raw::RawBalance;
pub use usd::UsdValue;
