//! Process wiring and the periodic refresh loop.

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};

use crate::balance::BalanceFetcher;
use crate::config::Config;
use crate::display;
use crate::errors::OlyfolioError;
use crate::job::{DisplayUpdate, RefreshJob, Trigger};
use crate::price::TickerClient;
use crate::provider::create_http_provider;
use crate::registry::TokenRegistry;
use crate::valuation::ValuationAggregator;

/// Main entry point for the service.
///
/// Loads configuration, builds the valuation pipeline, and drives it on
/// the configured cadence. Each published update is rendered to the log,
/// standing in for the real presentation layer.
pub async fn run() -> Result<(), OlyfolioError> {
    // Load environment variables
    dotenv().ok();

    let config = Config::from_env()?;

    let registry = Arc::new(TokenRegistry::mainnet()?);
    info!(
        chain = %registry.chain(),
        tokens = registry.descriptors().len(),
        "Token registry initialized"
    );

    let provider = create_http_provider(&config.rpc_url);
    let fetcher = BalanceFetcher::new(Arc::clone(&registry), provider);
    let ticker = TickerClient::new(config.price_api_url.clone(), config.price_api_key.clone());
    let aggregator = ValuationAggregator::new(Arc::clone(&registry), fetcher, ticker);

    let handle = RefreshJob::init(aggregator);

    // Stand-in display sink: render each published update to the log
    let mut updates = handle.updates();
    tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let update = updates.borrow_and_update().clone();
            render(&update);
        }
    });

    let address = config.wallet.clone().unwrap_or_default();
    if !handle.submit(address.clone(), Trigger::Load).await {
        warn!("Refresh actor stopped before the initial load");
    }

    let mut interval = tokio::time::interval(config.refresh_interval);
    interval.tick().await; // the first tick resolves immediately
    loop {
        interval.tick().await;
        if !handle.tick(address.clone()) {
            warn!("Refresh queue full, dropping timer tick");
        }
    }
}

fn render(update: &DisplayUpdate) {
    match update {
        DisplayUpdate::Pending => {}
        DisplayUpdate::Ready(result) => {
            for token in &result.tokens {
                info!(
                    symbol = token.symbol,
                    balance = %display::format_balance(token.balance, token.convention, result.wallet_valid),
                    price = %display::format_price(token.price),
                    value = %display::format_value(token.value, result.wallet_valid),
                    "Token valuation"
                );
            }
            info!("{}", display::format_total(result.total, result.wallet_valid));
        }
        DisplayUpdate::BalancesUnavailable => {
            warn!("Chain query failed; balances show as zero until the next cycle");
        }
        DisplayUpdate::PricesUnavailable => {
            warn!("Price provider failed; prices unavailable this cycle");
        }
    }
}
