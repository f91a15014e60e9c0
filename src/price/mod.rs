//! Fiat price retrieval
//!
//! A [`PriceSource`] produces a [`PriceBook`] of USD quotes keyed by quote
//! id. Implementations fetch fresh on every call; there is no caching at
//! the 60-second refresh cadence. The pegged sOHM price never appears
//! here: the registry resolves it from the OHM quote.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::errors::PriceError;
use crate::types::tokens::UsdPrice;

mod ticker;

pub use ticker::{TickerClient, DEFAULT_API_BASE};

/// Source of fresh USD quotes for a set of quote ids.
///
/// Trait seam over [`TickerClient`] so the aggregator can be driven by a
/// mock in tests and is never tied to a live HTTP endpoint.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch current quotes for all `ids` in one batched request.
    ///
    /// Implementations must fail with [`PriceError`] if any requested id is
    /// absent from the response; a partial book is never returned.
    async fn fetch_prices(&self, ids: &[&str]) -> Result<PriceBook, PriceError>;
}

/// USD quotes from one fetch, keyed by quote id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBook {
    quotes: HashMap<String, UsdPrice>,
}

impl PriceBook {
    /// Create an empty price book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a quote for the given id.
    pub fn insert(&mut self, id: impl Into<String>, price: UsdPrice) {
        self.quotes.insert(id.into(), price);
    }

    /// Quote for `id`, if present.
    pub fn get(&self, id: &str) -> Option<UsdPrice> {
        self.quotes.get(id).copied()
    }

    /// Quote for `id`, failing if absent.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::MissingQuote`] so an incomplete provider
    /// response fails the cycle instead of valuing a token at nothing.
    pub fn price_for(&self, id: &str) -> Result<UsdPrice, PriceError> {
        self.get(id).ok_or_else(|| PriceError::missing_quote(id))
    }

    /// Number of quotes in the book.
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Whether the book holds no quotes.
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl<I: Into<String>> FromIterator<(I, UsdPrice)> for PriceBook {
    fn from_iter<T: IntoIterator<Item = (I, UsdPrice)>>(iter: T) -> Self {
        Self {
            quotes: iter
                .into_iter()
                .map(|(id, price)| (id.into(), price))
                .collect(),
        }
    }
}
