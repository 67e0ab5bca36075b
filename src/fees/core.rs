// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact fee arithmetic
//!
//! All amounts are arbitrary-precision integers. The USD price is the only
//! decimal input; it is rounded to cents and scaled to an integer before any
//! multiplication, so no floating point is involved anywhere.

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::BigUint;

use crate::config::constants::PRICE_SCALE_FACTOR;
use crate::config::Asset;
use crate::errors::PriceError;
use crate::units::format_amount;

/// Estimated cost of a transfer
///
/// `cost_usd` uses the same scale as `cost_native`: it is denominated in
/// "USD smallest units" with the native asset's decimals, so both values are
/// displayed with those decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeeEstimate {
    /// Estimated gas units
    pub gas_units: u64,
    /// EIP-1559 max fee per gas, in wei
    pub fee_per_gas: u128,
    /// `gas_units * fee_per_gas`, in wei
    pub cost_native: BigUint,
    /// `cost_native * scaled_price / 100`
    pub cost_usd: BigUint,
}

impl FeeEstimate {
    /// Native cost in display units of `native_asset`
    pub fn native_display(&self, native_asset: &Asset) -> String {
        format_amount(&self.cost_native, native_asset.decimals)
    }

    /// USD cost in display units
    pub fn usd_display(&self, native_asset: &Asset) -> String {
        format_amount(&self.cost_usd, native_asset.decimals)
    }

    /// `"<usd> USD (<native> <ticker>)"`
    pub fn summary(&self, native_asset: &Asset) -> String {
        format!(
            "{} USD ({} {})",
            self.usd_display(native_asset),
            self.native_display(native_asset),
            native_asset.ticker
        )
    }
}

/// Round a USD price half-up to cents and scale it to an integer.
///
/// # Examples
///
/// ```
/// use std::str::FromStr;
/// use bigdecimal::BigDecimal;
/// use num_bigint::BigUint;
/// use slimwallet::fees::scale_price;
///
/// let price = BigDecimal::from_str("1800.005").unwrap();
/// assert_eq!(scale_price(&price).unwrap(), BigUint::from(180_001u32));
/// ```
///
/// # Errors
///
/// Returns [`PriceError::NegativePrice`] for prices below zero.
pub fn scale_price(price: &BigDecimal) -> Result<BigUint, PriceError> {
    let factor = BigDecimal::from(PRICE_SCALE_FACTOR);
    let scaled = (price * &factor).with_scale_round(0, RoundingMode::HalfUp);
    let (integer, _) = scaled.into_bigint_and_exponent();
    integer.to_biguint().ok_or_else(|| PriceError::NegativePrice {
        price: price.to_string(),
    })
}

/// Compute the fee for `gas_units` at `fee_per_gas`, priced with an
/// already-scaled USD price.
pub fn compute_fee(gas_units: u64, fee_per_gas: u128, scaled_price: &BigUint) -> FeeEstimate {
    let cost_native = BigUint::from(gas_units) * BigUint::from(fee_per_gas);
    let cost_usd = &cost_native * scaled_price / BigUint::from(PRICE_SCALE_FACTOR);

    FeeEstimate {
        gas_units,
        fee_per_gas,
        cost_native,
        cost_usd,
    }
}
