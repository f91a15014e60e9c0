//! Error types for the olyfolio library.
//!
//! Follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`RegistryError`],
//!   [`BalanceError`], [`PriceError`], ...)
//! - **Unified error type** ([`OlyfolioError`]) for callers that don't need
//!   to distinguish error sources
//!
//! None of these are recovered inside the pipeline itself; each propagates
//! to the orchestrating caller, which decides the fallback display state.
//! Only [`ConfigError`] at startup is fatal to the process.

mod address;
mod balance;
mod config;
mod price;
mod registry;
mod valuation;

pub use address::InvalidAddress;
pub use balance::BalanceError;
pub use config::ConfigError;
pub use price::PriceError;
pub use registry::RegistryError;
pub use valuation::ValuationError;

/// Unified error type for all olyfolio operations.
///
/// Module-specific error types convert automatically via `From`, so `?`
/// propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum OlyfolioError {
    /// Missing or malformed startup configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from token registry initialization or lookup.
    #[error("Token registry error: {0}")]
    Registry(#[from] RegistryError),

    /// Error from on-chain balance retrieval.
    #[error("Balance error: {0}")]
    Balance(#[from] BalanceError),

    /// Error from the fiat price provider.
    #[error("Price error: {0}")]
    Price(#[from] PriceError),

    /// Error from a valuation cycle.
    #[error("Valuation error: {0}")]
    Valuation(#[from] ValuationError),
}
