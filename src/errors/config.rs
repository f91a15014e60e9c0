//! Error types for startup configuration.

/// Errors from reading process configuration at startup.
///
/// These are the only errors fatal to the process; everything downstream
/// degrades per-cycle instead.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is absent.
    #[error("missing required environment variable {name}")]
    MissingVar {
        /// Name of the absent variable
        name: &'static str,
    },

    /// An environment variable is present but unusable.
    #[error("invalid value for {name}: {details}")]
    InvalidValue {
        /// Name of the offending variable
        name: &'static str,
        /// Why the value was rejected
        details: String,
    },
}

impl ConfigError {
    /// Create an `InvalidValue` error with details.
    pub fn invalid_value(name: &'static str, details: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            name,
            details: details.into(),
        }
    }
}
