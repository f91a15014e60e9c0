//! Error types for the valuation aggregator.

use super::balance::BalanceError;
use super::price::PriceError;

/// Errors from a valuation cycle.
///
/// Distinguishes the balance path from the price path so the orchestrator
/// can apply the matching fallback: zero-display for balance failures, an
/// explicit prices-unavailable state for price failures.
#[derive(Debug, thiserror::Error)]
pub enum ValuationError {
    /// A balance fetch failed; no partial balances are kept.
    #[error("balance retrieval failed: {0}")]
    Balance(#[from] BalanceError),

    /// The price fetch failed; no stale prices are reused.
    #[error("price retrieval failed: {0}")]
    Price(#[from] PriceError),
}
