// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Fee estimation for transfer drafts

use std::sync::Arc;

use bigdecimal::BigDecimal;
use tracing::{info, warn, Instrument};

use crate::errors::{NetworkError, PriceError, TransferError};
use crate::price::PriceFeed;
use crate::session::WalletSession;
use crate::spans;
use crate::transfer::{TransferDraft, TransferRequest};

use super::core::{compute_fee, scale_price, FeeEstimate};

/// Estimates the native and USD cost of a transfer
///
/// Gas units, fee per gas and the native asset's USD price are fetched
/// concurrently; the first failure (in that order) is returned.
#[derive(Clone)]
pub struct FeeEstimator {
    prices: Arc<dyn PriceFeed>,
}

impl std::fmt::Debug for FeeEstimator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeeEstimator").finish_non_exhaustive()
    }
}

impl FeeEstimator {
    /// Create an estimator pricing fees with `prices`
    pub fn new(prices: Arc<dyn PriceFeed>) -> Self {
        Self { prices }
    }

    /// Estimate the fee of sending `draft` from the session's wallet.
    ///
    /// # Errors
    ///
    /// - [`TransferError::Validation`] if the draft cannot be turned into a
    ///   request (no network call is made)
    /// - [`TransferError::Rejected`] if gas estimation reverts
    /// - [`TransferError::Network`] if the node fails or has no fee data
    /// - [`TransferError::Price`] if the USD price is unavailable
    pub async fn estimate(
        &self,
        session: &WalletSession,
        draft: &TransferDraft,
    ) -> Result<FeeEstimate, TransferError> {
        let request = TransferRequest::from_draft(session.address(), draft)?;
        let span = spans::estimate_fee(session.address(), draft.asset().ticker());

        async move {
            let client = session.client();
            let native_asset = session.native_asset();

            let (gas_units, fee_per_gas, price) = tokio::join!(
                client.estimate_gas(&request),
                client.fee_per_gas(),
                self.prices.usd_price(&native_asset.coingecko_id),
            );

            let result = assemble(gas_units, fee_per_gas, price);

            match &result {
                Ok(estimate) => info!(
                    gas_units = estimate.gas_units,
                    fee_per_gas = estimate.fee_per_gas,
                    cost = %estimate.summary(native_asset),
                    "Fee estimated"
                ),
                Err(e) => warn!(error = %e, kind = e.kind().label(), "Fee estimate failed"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Combine the three concurrent lookups, reporting the first failure.
fn assemble(
    gas_units: Result<u64, TransferError>,
    fee_per_gas: Result<u128, NetworkError>,
    price: Result<BigDecimal, PriceError>,
) -> Result<FeeEstimate, TransferError> {
    let gas_units = gas_units?;
    let fee_per_gas = fee_per_gas?;
    let scaled_price = scale_price(&price?)?;
    Ok(compute_fee(gas_units, fee_per_gas, &scaled_price))
}
