//! Error types for the token registry.

/// Errors from token registry initialization and lookup.
///
/// A lookup miss indicates a configuration bug (the registry is loaded from
/// trusted data at startup, never from user input), not a user error.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The requested symbol is not a tracked token.
    #[error("unknown token symbol: {symbol}")]
    UnknownToken {
        /// The symbol that missed
        symbol: String,
    },

    /// A token descriptor failed to parse during registry initialization.
    ///
    /// Raised once at startup; the registry refuses to construct with a
    /// malformed contract address rather than failing later mid-cycle.
    #[error("malformed descriptor for {symbol}")]
    MalformedDescriptor {
        /// Symbol of the offending descriptor
        symbol: &'static str,
        /// The underlying parse error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RegistryError {
    /// Create an `UnknownToken` error for the given symbol.
    pub fn unknown_token(symbol: impl Into<String>) -> Self {
        RegistryError::UnknownToken {
            symbol: symbol.into(),
        }
    }

    /// Create a `MalformedDescriptor` error from any error type.
    pub fn malformed_descriptor(
        symbol: &'static str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        RegistryError::MalformedDescriptor {
            symbol,
            source: Box::new(source),
        }
    }
}
