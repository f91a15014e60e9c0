//! Error types for on-chain balance retrieval.

use super::address::InvalidAddress;
use super::registry::RegistryError;

/// Errors that can occur while fetching a token balance.
///
/// Chain failures are not recovered locally and carry no retry logic; each
/// fetch is a single attempt whose error propagates to the caller, which
/// decides the fallback display.
#[derive(Debug, thiserror::Error)]
pub enum BalanceError {
    /// The symbol is not in the token registry.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The wallet address failed canonicalization.
    #[error(transparent)]
    InvalidAddress(#[from] InvalidAddress),

    /// The balance-of call failed (network, timeout, or revert).
    #[error("chain query failed for {symbol}")]
    ChainQuery {
        /// Symbol whose balance query failed
        symbol: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl BalanceError {
    /// Create a `ChainQuery` error from any error type.
    pub fn chain_query(
        symbol: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        BalanceError::ChainQuery {
            symbol: symbol.into(),
            source: Box::new(source),
        }
    }
}
