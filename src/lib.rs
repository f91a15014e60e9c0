//! Wallet valuation for Olympus DAO tokens.
//!
//! Given a wallet address, olyfolio reads the on-chain balances of the
//! tracked tokens (OHM, sOHM, wsOHM), fetches current USD quotes, and
//! aggregates per-token and total fiat values, refreshing on a fixed
//! cadence.
//!
//! # Pipeline
//!
//! ```text
//! address ──> is_valid_address ──┐
//!                                ▼
//! TokenRegistry ──> BalanceFetcher ──┐
//!                                    ├──> ValuationAggregator ──> ValuationResult
//!               TickerClient ────────┘
//! ```
//!
//! - [`is_valid_address`] checks wallet address syntax (EIP-55 aware)
//! - [`TokenRegistry`] maps symbols to contracts, decimal conventions, and
//!   quote ids
//! - [`BalanceFetcher`] reads raw balances over JSON-RPC and rescales them
//! - [`TickerClient`] fetches fresh USD quotes each cycle, uncached
//! - [`ValuationAggregator`] combines both into a [`ValuationResult`]
//! - [`RefreshJob`] serializes cycles and publishes display updates
//!   atomically
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use olyfolio::{
//!     is_valid_address, BalanceFetcher, TickerClient, TokenRegistry,
//!     ValuationAggregator,
//! };
//!
//! let registry = Arc::new(TokenRegistry::mainnet()?);
//! let fetcher = BalanceFetcher::new(registry.clone(), provider);
//! let ticker = TickerClient::new(api_base, api_key);
//! let aggregator = ValuationAggregator::new(registry, fetcher, ticker);
//!
//! let address = "0x12a8141ede9e39343e0aa2362762f6f53d10f292";
//! let result = aggregator.aggregate(address, is_valid_address(address)).await?;
//! println!("{}", result.total);
//! ```

pub mod address;
pub mod balance;
pub mod bootstrap;
pub mod config;
pub mod display;
pub mod errors;
pub mod job;
pub mod price;
pub mod provider;
pub mod registry;
mod spans;
pub mod types;
pub mod valuation;

pub use address::{canonicalize, is_valid_address};
pub use balance::{BalanceFetcher, BalanceSource};
pub use config::Config;
pub use errors::{
    BalanceError, ConfigError, InvalidAddress, OlyfolioError, PriceError, RegistryError,
    ValuationError,
};
pub use job::{DisplayUpdate, RefreshHandle, RefreshJob, RefreshRequest, Trigger};
pub use price::{PriceBook, PriceSource, TickerClient};
pub use provider::{create_http_provider, EthereumHttpProvider};
pub use registry::{BalanceCall, TokenDescriptor, TokenRegistry};
pub use types::tokens::{DecimalConvention, NormalizedBalance, RawBalance, UsdPrice, UsdValue};
pub use valuation::{TokenValuation, ValuationAggregator, ValuationResult};
