//! Error types for the fiat price provider.

/// Errors that can occur while fetching price quotes.
///
/// Every variant fails the whole refresh cycle: the aggregator never emits
/// a result with partial prices.
#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    /// The HTTP request itself failed (connection, timeout, TLS).
    #[error("price request failed")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("price provider returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, for diagnostics
        body: String,
    },

    /// The response body could not be decoded into ticker entries.
    #[error("malformed price payload: {details}")]
    MalformedPayload {
        /// What failed to decode
        details: String,
    },

    /// A requested quote id is absent from the response.
    #[error("price missing for quote id {id}")]
    MissingQuote {
        /// The absent quote id
        id: String,
    },
}

impl PriceError {
    /// Create a `MalformedPayload` error with details.
    pub fn malformed_payload(details: impl Into<String>) -> Self {
        PriceError::MalformedPayload {
            details: details.into(),
        }
    }

    /// Create a `MissingQuote` error for the given quote id.
    pub fn missing_quote(id: impl Into<String>) -> Self {
        PriceError::MissingQuote { id: id.into() }
    }
}
