//! Process configuration from the environment
//!
//! Two variables are required at startup: the RPC endpoint and the price
//! API key. Absence of either is fatal to the process; everything else
//! has a default.

use std::time::Duration;

use url::Url;

use crate::errors::ConfigError;
use crate::price::DEFAULT_API_BASE;

/// RPC endpoint for the chain provider (required)
pub const RPC_URL_VAR: &str = "INFURA_URL";
/// API key for the price provider (required)
pub const PRICE_API_KEY_VAR: &str = "NOMICS_API_KEY";
/// Price API base override, for self-hosted or mock endpoints (optional)
pub const PRICE_API_URL_VAR: &str = "PRICE_API_URL";
/// Wallet address to value at startup (optional)
pub const WALLET_ADDRESS_VAR: &str = "WALLET_ADDRESS";
/// Refresh cadence override in seconds (optional)
pub const REFRESH_INTERVAL_VAR: &str = "REFRESH_INTERVAL_SECS";

const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

/// Startup configuration for the valuation service.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON-RPC endpoint of the chain provider
    pub rpc_url: Url,
    /// API key for the price provider
    pub price_api_key: String,
    /// Base URL of the price API
    pub price_api_url: Url,
    /// Wallet address to value at startup, if any
    pub wallet: Option<String>,
    /// Cadence of timer-triggered refresh cycles
    pub refresh_interval: Duration,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if a required variable is
    /// absent and [`ConfigError::InvalidValue`] if a present variable
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        let rpc_url = require(RPC_URL_VAR)?
            .parse::<Url>()
            .map_err(|e| ConfigError::invalid_value(RPC_URL_VAR, e.to_string()))?;

        let price_api_key = require(PRICE_API_KEY_VAR)?;

        let price_api_url = optional(PRICE_API_URL_VAR)
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
            .parse::<Url>()
            .map_err(|e| ConfigError::invalid_value(PRICE_API_URL_VAR, e.to_string()))?;

        let wallet = optional(WALLET_ADDRESS_VAR);

        let refresh_interval = match optional(REFRESH_INTERVAL_VAR) {
            Some(secs) => {
                let secs = secs
                    .parse::<u64>()
                    .map_err(|e| ConfigError::invalid_value(REFRESH_INTERVAL_VAR, e.to_string()))?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_REFRESH_INTERVAL,
        };

        Ok(Self {
            rpc_url,
            price_api_key,
            price_api_url,
            wallet,
            refresh_interval,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar { name })
}

fn optional(name: &'static str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment mutation is process-global; serialize these tests.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_all() {
        for name in [
            RPC_URL_VAR,
            PRICE_API_KEY_VAR,
            PRICE_API_URL_VAR,
            WALLET_ADDRESS_VAR,
            REFRESH_INTERVAL_VAR,
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn test_missing_rpc_url_is_fatal() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all();
        std::env::set_var(PRICE_API_KEY_VAR, "key");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar { name } if name == RPC_URL_VAR));
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all();
        std::env::set_var(RPC_URL_VAR, "https://mainnet.example/v3/abc");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar { name } if name == PRICE_API_KEY_VAR));
    }

    #[test]
    fn test_defaults_apply() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all();
        std::env::set_var(RPC_URL_VAR, "https://mainnet.example/v3/abc");
        std::env::set_var(PRICE_API_KEY_VAR, "key");

        let config = Config::from_env().unwrap();
        assert_eq!(config.price_api_url.as_str(), "https://api.nomics.com/v1");
        assert_eq!(config.refresh_interval, Duration::from_secs(60));
        assert!(config.wallet.is_none());
    }

    #[test]
    fn test_overrides_apply() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all();
        std::env::set_var(RPC_URL_VAR, "https://mainnet.example/v3/abc");
        std::env::set_var(PRICE_API_KEY_VAR, "key");
        std::env::set_var(PRICE_API_URL_VAR, "http://localhost:9000/v1");
        std::env::set_var(WALLET_ADDRESS_VAR, "0x12a8141ede9e39343e0aa2362762f6f53d10f292");
        std::env::set_var(REFRESH_INTERVAL_VAR, "30");

        let config = Config::from_env().unwrap();
        assert_eq!(config.price_api_url.as_str(), "http://localhost:9000/v1");
        assert_eq!(
            config.wallet.as_deref(),
            Some("0x12a8141ede9e39343e0aa2362762f6f53d10f292")
        );
        assert_eq!(config.refresh_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_interval_rejected() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all();
        std::env::set_var(RPC_URL_VAR, "https://mainnet.example/v3/abc");
        std::env::set_var(PRICE_API_KEY_VAR, "key");
        std::env::set_var(REFRESH_INTERVAL_VAR, "soon");

        let err = Config::from_env().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { name, .. } if name == REFRESH_INTERVAL_VAR
        ));
    }
}
