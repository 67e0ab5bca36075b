// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for wallet operations.
//!
//! Telemetry concerns are kept out of business logic. Instead of using
//! `#[instrument]` attributes directly on functions, each instrumented
//! operation has a corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     async { /* business logic */ }.instrument(span).await
//! }
//! ```

use alloy_primitives::Address;
use tracing::Span;

/// Create span for a fee estimate.
///
/// Parent: None (root span for this operation)
/// Children: fetch_usd_price span
#[inline]
pub(crate) fn estimate_fee(from: Address, asset: &str) -> Span {
    tracing::info_span!("slimwallet.estimate_fee", from = %from, asset = asset)
}

/// Create span for refreshing every balance of a session.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn refresh_balances(holder: Address, asset_count: usize) -> Span {
    tracing::info_span!(
        "slimwallet.refresh_balances",
        holder = %holder,
        asset_count = asset_count,
    )
}

/// Create span for broadcasting a transfer and waiting for its receipt.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn send_transfer(from: Address, to: Address, asset: &str) -> Span {
    tracing::info_span!(
        "slimwallet.send_transfer",
        from = %from,
        to = %to,
        asset = asset,
    )
}

/// Create span for a single USD price lookup.
///
/// Parent: estimate_fee span, when called from a fee estimate
#[inline]
pub(crate) fn fetch_usd_price(price_id: &str) -> Span {
    tracing::debug_span!("slimwallet.fetch_usd_price", price_id = price_id)
}
