//! Tracing span helpers for refresh operations.
//!
//! Span creation is kept orthogonal to business logic: instrumented
//! operations get a helper here instead of `#[instrument]` attributes
//! inline.

use tracing::Span;

use crate::job::Trigger;

/// Create span for one refresh cycle.
///
/// Parent: None (root span for the cycle)
/// Children: provider and price-client request spans
#[inline]
pub(crate) fn refresh_cycle(trigger: Trigger, wallet_valid: bool) -> Span {
    tracing::info_span!(
        "olyfolio.refresh_cycle",
        trigger = %trigger,
        wallet_valid,
    )
}
