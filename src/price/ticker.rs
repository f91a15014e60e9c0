//! Ticker HTTP client for the fiat price provider.
//!
//! Speaks the provider's `GET /currencies/ticker?key=<API_KEY>&ids=a,b`
//! endpoint, which returns a JSON array of `{"id": ..., "price": "..."}`
//! entries with the price as a decimal string. One batched request covers
//! all requested ids; there is no caching and no retry.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::errors::PriceError;
use crate::types::tokens::UsdPrice;

use super::{PriceBook, PriceSource};

/// Default API base of the hosted price provider.
pub const DEFAULT_API_BASE: &str = "https://api.nomics.com/v1";

/// One entry of the ticker response.
#[derive(Debug, Deserialize)]
struct TickerEntry {
    id: String,
    price: String,
}

/// Reqwest-based client for the ticker price API.
///
/// The base URL is injectable so tests can point the client at a local
/// mock server.
#[derive(Debug, Clone)]
pub struct TickerClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl TickerClient {
    /// Create a client for the given API base and key.
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key: api_key.into(),
        }
    }

    /// Create a client with a custom reqwest client.
    pub fn with_client(client: reqwest::Client, base_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }

    async fn fetch(&self, ids: &[&str]) -> Result<PriceBook, PriceError> {
        let url = format!(
            "{}/currencies/ticker",
            self.base_url.as_str().trim_end_matches('/')
        );
        let ids_param = ids.join(",");

        debug!(ids = %ids_param, "Requesting ticker quotes");

        let response = self
            .client
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("ids", ids_param.as_str())])
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PriceError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let entries: Vec<TickerEntry> = serde_json::from_str(&body)
            .map_err(|e| PriceError::malformed_payload(e.to_string()))?;

        let mut book = PriceBook::new();
        for entry in entries {
            let price = entry.price.parse::<f64>().map_err(|_| {
                PriceError::malformed_payload(format!(
                    "unparseable price {:?} for id {}",
                    entry.price, entry.id
                ))
            })?;
            book.insert(entry.id, UsdPrice::new(price));
        }

        // A response missing any requested id fails the whole fetch
        for id in ids {
            book.price_for(id)?;
        }

        Ok(book)
    }
}

#[async_trait]
impl PriceSource for TickerClient {
    async fn fetch_prices(&self, ids: &[&str]) -> Result<PriceBook, PriceError> {
        self.fetch(ids).await
    }
}
