//! HTTP provider factory
//!
//! The valuation pipeline only issues read-only calls, so providers are
//! built without the recommended fillers and return a plain
//! `RootProvider` over the Ethereum network type.

use alloy_network::Ethereum;
use alloy_provider::{ProviderBuilder, RootProvider};
use url::Url;

/// Type alias for an HTTP provider on the Ethereum network
pub type EthereumHttpProvider = RootProvider<Ethereum>;

/// Create an HTTP provider for the configured RPC endpoint.
///
/// The endpoint URL is already validated by configuration loading, so
/// construction is infallible here.
pub fn create_http_provider(url: &Url) -> EthereumHttpProvider {
    ProviderBuilder::new()
        .disable_recommended_fillers()
        .network::<Ethereum>()
        .connect_http(url.clone())
}
