//! On-chain balance retrieval
//!
//! Resolves a token through the registry, canonicalizes the wallet
//! address, issues the read-only balance query against the token contract,
//! and rescales the raw integer by the token's decimal convention. Each
//! query is a single attempt; chain failures propagate to the caller,
//! which owns the fallback display policy.

use std::sync::Arc;

use alloy_network::Ethereum;
use alloy_provider::Provider;
use alloy_sol_types::sol;
use async_trait::async_trait;
use tracing::debug;

use crate::address;
use crate::errors::BalanceError;
use crate::registry::{BalanceCall, TokenRegistry};
use crate::types::tokens::{NormalizedBalance, RawBalance};

sol! {
    /// Minimal ERC-20 read interface for balance queries.
    ///
    /// Declared statically so the registry's interface descriptors resolve
    /// to typed bindings at compile time instead of runtime-parsed ABI
    /// blobs.
    #[sol(rpc)]
    interface IErc20Balance {
        function balanceOf(address owner) external view returns (uint256);
    }
}

/// Source of normalized token balances for a wallet.
///
/// Trait seam over [`BalanceFetcher`] so the aggregator can be driven by a
/// mock in tests and is never tied to a live provider.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Fetch the unrounded normalized balance of `symbol` held by `wallet`.
    async fn fetch_balance(
        &self,
        symbol: &str,
        wallet: &str,
    ) -> Result<NormalizedBalance, BalanceError>;
}

/// Fetches token balances through an injected alloy provider.
///
/// Holds the shared [`TokenRegistry`] and the provider; no ambient global
/// client handles. Lifecycle is tied to process start and stop.
#[derive(Debug, Clone)]
pub struct BalanceFetcher<P> {
    registry: Arc<TokenRegistry>,
    provider: P,
}

impl<P> BalanceFetcher<P> {
    /// Create a fetcher over the given registry and provider.
    pub fn new(registry: Arc<TokenRegistry>, provider: P) -> Self {
        Self { registry, provider }
    }
}

impl<P> BalanceFetcher<P>
where
    P: Provider<Ethereum> + Clone,
{
    /// Fetch and rescale one token balance.
    ///
    /// # Errors
    ///
    /// - [`BalanceError::Registry`] if `symbol` is not tracked
    /// - [`BalanceError::InvalidAddress`] if `wallet` fails
    ///   canonicalization (defends against callers that skipped the
    ///   validator)
    /// - [`BalanceError::ChainQuery`] on network, timeout, or revert; not
    ///   recovered here, single attempt
    pub async fn fetch_balance(
        &self,
        symbol: &str,
        wallet: &str,
    ) -> Result<NormalizedBalance, BalanceError> {
        let descriptor = self.registry.lookup(symbol)?;
        let wallet = address::canonicalize(wallet)?;

        let raw = match descriptor.balance_call {
            BalanceCall::Erc20BalanceOf => {
                let token = IErc20Balance::new(descriptor.contract, self.provider.clone());
                token
                    .balanceOf(wallet)
                    .call()
                    .await
                    .map_err(|e| BalanceError::chain_query(descriptor.symbol, e))?
            }
        };

        let raw = RawBalance::new(raw);
        debug!(
            symbol = descriptor.symbol,
            contract = %descriptor.contract,
            raw = %raw,
            "Fetched token balance"
        );

        Ok(raw.rescale(descriptor.convention))
    }
}

#[async_trait]
impl<P> BalanceSource for BalanceFetcher<P>
where
    P: Provider<Ethereum> + Clone,
{
    async fn fetch_balance(
        &self,
        symbol: &str,
        wallet: &str,
    ) -> Result<NormalizedBalance, BalanceError> {
        BalanceFetcher::fetch_balance(self, symbol, wallet).await
    }
}
