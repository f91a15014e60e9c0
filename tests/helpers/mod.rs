//! Test helpers for olyfolio integration tests
//!
//! Mock balance and price sources so the aggregator and refresh job can
//! be exercised without chain or HTTP connections.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use olyfolio::errors::RegistryError;
use olyfolio::{
    BalanceError, BalanceSource, NormalizedBalance, PriceBook, PriceError, PriceSource, UsdPrice,
};

/// Mock BalanceSource with fixed per-symbol balances.
///
/// Counts every call so tests can assert the source was never touched for
/// an invalid wallet.
pub struct MockBalanceSource {
    balances: HashMap<String, f64>,
    fail_symbol: Option<String>,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockBalanceSource {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            fail_symbol: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set the balance returned for a symbol.
    pub fn with_balance(mut self, symbol: &str, balance: f64) -> Self {
        self.balances.insert(symbol.to_string(), balance);
        self
    }

    /// Make one symbol fail with a chain query error.
    pub fn with_failure(mut self, symbol: &str) -> Self {
        self.fail_symbol = Some(symbol.to_string());
        self
    }

    /// Shared call counter, usable after the mock moves into the
    /// aggregator.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl BalanceSource for MockBalanceSource {
    async fn fetch_balance(
        &self,
        symbol: &str,
        _wallet: &str,
    ) -> Result<NormalizedBalance, BalanceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_symbol.as_deref() == Some(symbol) {
            return Err(BalanceError::chain_query(
                symbol,
                std::io::Error::new(std::io::ErrorKind::TimedOut, "mock chain timeout"),
            ));
        }

        self.balances
            .get(symbol)
            .copied()
            .map(NormalizedBalance::new)
            .ok_or_else(|| BalanceError::Registry(RegistryError::unknown_token(symbol)))
    }
}

/// Mock PriceSource returning a fixed quote book, or failing outright.
pub struct MockPriceSource {
    prices: HashMap<String, f64>,
    fail: bool,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockPriceSource {
    pub fn new() -> Self {
        Self {
            prices: HashMap::new(),
            fail: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Set the quote returned for an id.
    pub fn with_price(mut self, id: &str, price: f64) -> Self {
        self.prices.insert(id.to_string(), price);
        self
    }

    /// Make every fetch fail with a malformed payload error.
    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }

    /// Shared call counter, usable after the mock moves into the
    /// aggregator.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl PriceSource for MockPriceSource {
    async fn fetch_prices(&self, ids: &[&str]) -> Result<PriceBook, PriceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(PriceError::malformed_payload("mock provider failure"));
        }

        let mut book = PriceBook::new();
        for (id, price) in &self.prices {
            book.insert(id.clone(), UsdPrice::new(*price));
        }

        // A configured book missing a requested id behaves like a real
        // provider response missing that symbol
        for id in ids {
            book.price_for(id)?;
        }

        Ok(book)
    }
}
