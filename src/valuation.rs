//! Valuation aggregation
//!
//! Combines balances and prices into per-token USD values and a portfolio
//! total. Stateless between invocations; every call recomputes the whole
//! result, never a partial update.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future::{join_all, try_join};
use serde::Serialize;

use crate::balance::BalanceSource;
use crate::errors::ValuationError;
use crate::price::{PriceBook, PriceSource};
use crate::registry::TokenRegistry;
use crate::types::tokens::{DecimalConvention, NormalizedBalance, UsdPrice, UsdValue};

/// Valuation of a single tracked token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenValuation {
    /// Token symbol, in registry display order
    pub symbol: &'static str,
    /// Unrounded normalized balance (zero when the wallet is invalid)
    pub balance: NormalizedBalance,
    /// Decimal convention, carried for display precision
    pub convention: DecimalConvention,
    /// Current USD quote (real even when the wallet is invalid)
    pub price: UsdPrice,
    /// balance × price, on the unrounded balance
    pub value: UsdValue,
}

/// One refresh cycle's complete output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationResult {
    /// Per-token valuations in registry display order
    pub tokens: Vec<TokenValuation>,
    /// Exact sum of per-token values
    pub total: UsdValue,
    /// Whether the wallet address was valid this cycle
    pub wallet_valid: bool,
    /// When the cycle computed this result
    pub as_of: DateTime<Utc>,
}

/// Combines balance and price sources into [`ValuationResult`]s.
///
/// Both collaborators are injected behind trait seams; the aggregator owns
/// no network state of its own.
pub struct ValuationAggregator<B, P> {
    registry: Arc<TokenRegistry>,
    balances: B,
    prices: P,
}

impl<B, P> ValuationAggregator<B, P>
where
    B: BalanceSource,
    P: PriceSource,
{
    /// Create an aggregator over the given registry and sources.
    pub fn new(registry: Arc<TokenRegistry>, balances: B, prices: P) -> Self {
        Self {
            registry,
            balances,
            prices,
        }
    }

    /// The registry this aggregator values tokens against.
    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    /// Run one valuation cycle for `wallet`.
    ///
    /// Prices are fetched unconditionally, every cycle, with no caching.
    /// When `wallet_valid` is `false` the balance source is never invoked:
    /// every balance and value is zero, the total is zero, and the real
    /// fetched prices still populate the result. When `wallet_valid` is
    /// `true`, the price fetch and the per-token balance fetches run
    /// concurrently, and the first balance error fails the whole
    /// aggregation with no partial results.
    pub async fn aggregate(
        &self,
        wallet: &str,
        wallet_valid: bool,
    ) -> Result<ValuationResult, ValuationError> {
        let quote_ids = self.registry.quote_ids();

        if !wallet_valid {
            let book = self.prices.fetch_prices(&quote_ids).await?;
            return self.zeroed(&book);
        }

        let prices_fut = async {
            self.prices
                .fetch_prices(&quote_ids)
                .await
                .map_err(ValuationError::from)
        };
        let balances_fut = async {
            let fetches = self
                .registry
                .descriptors()
                .iter()
                .map(|descriptor| self.balances.fetch_balance(descriptor.symbol, wallet));
            let mut balances = Vec::with_capacity(self.registry.descriptors().len());
            for result in join_all(fetches).await {
                balances.push(result.map_err(ValuationError::from)?);
            }
            Ok(balances)
        };

        let (book, balances) = try_join(prices_fut, balances_fut).await?;

        let mut tokens = Vec::with_capacity(balances.len());
        let mut total = UsdValue::ZERO;
        for (descriptor, balance) in self.registry.descriptors().iter().zip(balances) {
            let price = book.price_for(descriptor.quote_id)?;
            let value = price.value_of(balance);
            total += value;
            tokens.push(TokenValuation {
                symbol: descriptor.symbol,
                balance,
                convention: descriptor.convention,
                price,
                value,
            });
        }

        Ok(ValuationResult {
            tokens,
            total,
            wallet_valid: true,
            as_of: Utc::now(),
        })
    }

    /// Zero-balance result carrying real prices, for an invalid wallet.
    fn zeroed(&self, book: &PriceBook) -> Result<ValuationResult, ValuationError> {
        let mut tokens = Vec::with_capacity(self.registry.descriptors().len());
        for descriptor in self.registry.descriptors() {
            let price = book.price_for(descriptor.quote_id)?;
            tokens.push(TokenValuation {
                symbol: descriptor.symbol,
                balance: NormalizedBalance::ZERO,
                convention: descriptor.convention,
                price,
                value: UsdValue::ZERO,
            });
        }

        Ok(ValuationResult {
            tokens,
            total: UsdValue::ZERO,
            wallet_valid: false,
            as_of: Utc::now(),
        })
    }
}

impl ValuationResult {
    /// Valuation for `symbol`, if tracked.
    pub fn token(&self, symbol: &str) -> Option<&TokenValuation> {
        self.tokens
            .iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Price of `symbol` in this result, if tracked.
    pub fn price_of(&self, symbol: &str) -> Option<UsdPrice> {
        self.token(symbol).map(|t| t.price)
    }
}
