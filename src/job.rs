//! Refresh cycle orchestration
//!
//! A single-consumer actor owns the valuation pipeline and processes one
//! refresh request at a time, so cycles for a wallet are serialized and
//! the display sink never sees interleaved updates from two cycles. The
//! completed state of each cycle is published atomically through a watch
//! channel.

use tokio::sync::{mpsc, watch};
use tracing::{info, warn, Instrument};

use crate::address::is_valid_address;
use crate::balance::BalanceSource;
use crate::errors::ValuationError;
use crate::price::PriceSource;
use crate::spans;
use crate::valuation::{ValuationAggregator, ValuationResult};

/// Requests queued ahead of the in-flight cycle before ticks get dropped.
const REQUEST_QUEUE_DEPTH: usize = 8;

/// What caused a refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Initial load of the interface
    Load,
    /// The wallet address changed
    Edit,
    /// The periodic timer fired
    Tick,
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Load => write!(f, "load"),
            Self::Edit => write!(f, "edit"),
            Self::Tick => write!(f, "tick"),
        }
    }
}

/// One refresh request from the presentation layer.
#[derive(Debug)]
pub struct RefreshRequest {
    /// Wallet address as entered, not yet validated
    pub address: String,
    /// What caused the request
    pub trigger: Trigger,
}

/// Display sink state published after each cycle.
///
/// Every update carries one whole cycle's output; a mix of two cycles can
/// never be observed.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayUpdate {
    /// No cycle has completed yet
    Pending,
    /// A cycle completed; render this result
    Ready(ValuationResult),
    /// The chain query failed; render the zero-display fallback rather
    /// than stale balances
    BalancesUnavailable,
    /// The price provider failed; render an explicit unavailable state
    /// rather than stale prices
    PricesUnavailable,
}

/// The refresh actor.
pub struct RefreshJob;

impl RefreshJob {
    /// Spawn the refresh actor and return its handle.
    pub fn init<B, P>(aggregator: ValuationAggregator<B, P>) -> RefreshHandle
    where
        B: BalanceSource + 'static,
        P: PriceSource + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<RefreshRequest>(REQUEST_QUEUE_DEPTH);
        let (updates_tx, updates_rx) = watch::channel(DisplayUpdate::Pending);

        tokio::spawn(async move {
            while let Some(request) = rx.recv().await {
                let update = Self::run_cycle(&aggregator, &request).await;
                if updates_tx.send(update).is_err() {
                    // every receiver is gone, nothing left to display
                    break;
                }
            }
        });

        RefreshHandle {
            tx,
            updates: updates_rx,
        }
    }

    /// Run one cycle: validate, aggregate, map errors to display policy.
    async fn run_cycle<B, P>(
        aggregator: &ValuationAggregator<B, P>,
        request: &RefreshRequest,
    ) -> DisplayUpdate
    where
        B: BalanceSource,
        P: PriceSource,
    {
        let wallet_valid = is_valid_address(&request.address);
        let span = spans::refresh_cycle(request.trigger, wallet_valid);

        async {
            match aggregator.aggregate(&request.address, wallet_valid).await {
                Ok(result) => {
                    info!(total = %result.total, wallet_valid, "Refresh cycle complete");
                    DisplayUpdate::Ready(result)
                }
                Err(ValuationError::Balance(e)) => {
                    warn!(error = %e, "Balance path failed, falling back to zero display");
                    DisplayUpdate::BalancesUnavailable
                }
                Err(ValuationError::Price(e)) => {
                    warn!(error = %e, "Price path failed, no prices this cycle");
                    DisplayUpdate::PricesUnavailable
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Handle to the refresh actor.
#[derive(Clone)]
pub struct RefreshHandle {
    tx: mpsc::Sender<RefreshRequest>,
    updates: watch::Receiver<DisplayUpdate>,
}

impl RefreshHandle {
    /// Queue a refresh for a load or address-edit event.
    ///
    /// Waits for queue capacity. Returns `false` if the actor is gone.
    pub async fn submit(&self, address: impl Into<String>, trigger: Trigger) -> bool {
        self.tx
            .send(RefreshRequest {
                address: address.into(),
                trigger,
            })
            .await
            .is_ok()
    }

    /// Submit a timer tick.
    ///
    /// A tick arriving while the queue is full (a cycle in flight with
    /// backlog) is dropped rather than piled up; the next tick will catch
    /// up. Returns `false` when dropped.
    pub fn tick(&self, address: impl Into<String>) -> bool {
        self.tx
            .try_send(RefreshRequest {
                address: address.into(),
                trigger: Trigger::Tick,
            })
            .is_ok()
    }

    /// Watch the display sink.
    pub fn updates(&self) -> watch::Receiver<DisplayUpdate> {
        self.updates.clone()
    }
}
