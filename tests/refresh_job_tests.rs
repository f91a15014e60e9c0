//! Refresh actor behavior: cycle serialization and display policy

mod helpers;

use std::sync::Arc;

use helpers::{MockBalanceSource, MockPriceSource};
use olyfolio::{DisplayUpdate, RefreshJob, TokenRegistry, Trigger, ValuationAggregator};

const WALLET: &str = "0x12a8141ede9e39343e0aa2362762f6f53d10f292";

fn registry() -> Arc<TokenRegistry> {
    Arc::new(TokenRegistry::mainnet().unwrap())
}

fn full_balances() -> MockBalanceSource {
    MockBalanceSource::new()
        .with_balance("OHM", 5.0)
        .with_balance("sOHM", 2.0)
        .with_balance("wsOHM", 0.1)
}

fn full_prices() -> MockPriceSource {
    MockPriceSource::new()
        .with_price("OHM", 10.0)
        .with_price("WSOHM", 873.25)
}

#[tokio::test]
async fn publishes_complete_result_for_valid_wallet() {
    let aggregator = ValuationAggregator::new(registry(), full_balances(), full_prices());
    let handle = RefreshJob::init(aggregator);
    let mut updates = handle.updates();

    assert!(handle.submit(WALLET, Trigger::Load).await);
    updates.changed().await.unwrap();

    let update = updates.borrow_and_update().clone();
    match update {
        DisplayUpdate::Ready(result) => {
            assert!(result.wallet_valid);
            assert_eq!(result.tokens.len(), 3);
            assert!((result.total.as_f64() - 157.325).abs() < 1e-9);
        }
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_address_publishes_zeroed_result_with_prices() {
    let balances = full_balances();
    let balance_calls = balances.counter();
    let aggregator = ValuationAggregator::new(registry(), balances, full_prices());
    let handle = RefreshJob::init(aggregator);
    let mut updates = handle.updates();

    assert!(handle.submit("not-an-address", Trigger::Edit).await);
    updates.changed().await.unwrap();

    let update = updates.borrow_and_update().clone();
    match update {
        DisplayUpdate::Ready(result) => {
            assert!(!result.wallet_valid);
            assert!(result.total.is_zero());
            assert!(result.tokens.iter().all(|t| t.balance.is_zero()));
            assert!(result.tokens.iter().all(|t| !t.price.is_zero()));
        }
        other => panic!("expected Ready, got {other:?}"),
    }
    assert_eq!(balance_calls.load(std::sync::atomic::Ordering::SeqCst), 0);
}

#[tokio::test]
async fn balance_failure_publishes_balances_unavailable() {
    let balances = full_balances().with_failure("wsOHM");
    let aggregator = ValuationAggregator::new(registry(), balances, full_prices());
    let handle = RefreshJob::init(aggregator);
    let mut updates = handle.updates();

    assert!(handle.submit(WALLET, Trigger::Tick).await);
    updates.changed().await.unwrap();

    assert_eq!(
        *updates.borrow_and_update(),
        DisplayUpdate::BalancesUnavailable
    );
}

#[tokio::test]
async fn price_failure_publishes_prices_unavailable() {
    let aggregator = ValuationAggregator::new(
        registry(),
        full_balances(),
        MockPriceSource::new().failing(),
    );
    let handle = RefreshJob::init(aggregator);
    let mut updates = handle.updates();

    assert!(handle.submit(WALLET, Trigger::Tick).await);
    updates.changed().await.unwrap();

    assert_eq!(
        *updates.borrow_and_update(),
        DisplayUpdate::PricesUnavailable
    );
}

#[tokio::test]
async fn later_cycle_replaces_earlier_state() {
    let aggregator = ValuationAggregator::new(registry(), full_balances(), full_prices());
    let handle = RefreshJob::init(aggregator);
    let mut updates = handle.updates();

    assert!(handle.submit("not-an-address", Trigger::Edit).await);
    assert!(handle.submit(WALLET, Trigger::Edit).await);

    // Wait until the valid-wallet cycle lands; the watch channel only ever
    // exposes one whole cycle at a time
    loop {
        updates.changed().await.unwrap();
        let update = updates.borrow_and_update().clone();
        if let DisplayUpdate::Ready(result) = update {
            if result.wallet_valid {
                assert!((result.total.as_f64() - 157.325).abs() < 1e-9);
                break;
            }
            assert!(result.total.is_zero());
        }
    }
}
