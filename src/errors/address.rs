//! Wallet address error type.

/// A malformed wallet address reached a component that expects a
/// pre-validated one.
///
/// The validator returns plain `false` for bad input; this error only
/// appears when the balance fetcher is called directly with a string that
/// fails canonicalization.
#[derive(Debug, thiserror::Error)]
#[error("invalid wallet address: {input:?}")]
pub struct InvalidAddress {
    /// The rejected input string
    pub input: String,
}

impl InvalidAddress {
    /// Create an `InvalidAddress` error for the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}
