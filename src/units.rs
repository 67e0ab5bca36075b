// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion between smallest-unit integers and display strings
//!
//! Amounts move through the wallet as integers in the asset's smallest unit
//! (wei for the native currency). This module converts them to en-US display
//! strings without any floating point, and parses typed display amounts back
//! into smallest units.

use alloy_primitives::{utils::parse_units, U256};
use num_bigint::BigUint;
use num_traits::Num;
use tracing::warn;

use crate::errors::ValidationError;

/// Largest supported `decimals` value (10^77 is the largest power of ten below 2^256)
pub const MAX_DECIMALS: u8 = 77;

/// Format a smallest-unit amount as an en-US decimal string.
///
/// `amount` may be a decimal or `0x`-prefixed hex integer. A missing or
/// malformed amount, or an unsupported `decimals` value, yields `"0"`; the
/// failure is logged and never propagated.
///
/// # Examples
///
/// ```
/// use slimwallet::units::format_smallest_unit;
///
/// assert_eq!(format_smallest_unit(None, 18), "0");
/// assert_eq!(format_smallest_unit(Some("1000000000000000000"), 18), "1");
/// assert_eq!(format_smallest_unit(Some("1500000000000000000"), 18), "1.5");
/// assert_eq!(format_smallest_unit(Some("1234500000000000000000"), 18), "1,234.5");
/// ```
pub fn format_smallest_unit(amount: Option<&str>, decimals: u8) -> String {
    match parse_smallest_unit(amount, decimals) {
        Ok(value) => format_amount(&value, decimals),
        Err(reason) => {
            warn!(?amount, decimals, %reason, "Failed to format smallest-unit amount, showing 0");
            "0".to_string()
        }
    }
}

/// Format an optional `U256` amount, with the same fallback rules as
/// [`format_smallest_unit`].
pub fn format_u256(amount: Option<U256>, decimals: u8) -> String {
    let raw = amount.map(|value| value.to_string());
    format_smallest_unit(raw.as_deref(), decimals)
}

/// Format an arbitrary-precision amount.
///
/// The integer part is grouped with commas, trailing fractional zeros are
/// trimmed and the decimal point is dropped for whole values.
pub fn format_amount(amount: &BigUint, decimals: u8) -> String {
    let digits = amount.to_str_radix(10);
    let decimals = usize::from(decimals);

    let (whole, fraction) = if digits.len() > decimals {
        let (whole, fraction) = digits.split_at(digits.len() - decimals);
        (whole.to_string(), fraction.to_string())
    } else {
        ("0".to_string(), format!("{digits:0>decimals$}"))
    };

    let whole = group_thousands(&whole);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        whole
    } else {
        format!("{whole}.{fraction}")
    }
}

/// Parse a typed display amount into smallest units.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyAmount`] for blank input and
/// [`ValidationError::InvalidAmount`] for negative, malformed, or
/// over-precise input.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use slimwallet::units::parse_display_amount;
///
/// let wei = parse_display_amount("0.5", 18).unwrap();
/// assert_eq!(wei, U256::from(500_000_000_000_000_000u64));
/// ```
pub fn parse_display_amount(amount: &str, decimals: u8) -> Result<U256, ValidationError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyAmount);
    }
    if trimmed.starts_with('-') {
        return Err(ValidationError::invalid_amount(
            trimmed,
            "amount must not be negative",
        ));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(ValidationError::invalid_amount(
            trimmed,
            "only digits and a decimal point are allowed",
        ));
    }
    if let Some((_, fraction)) = trimmed.split_once('.') {
        if fraction.len() > usize::from(decimals) {
            return Err(ValidationError::invalid_amount(
                trimmed,
                format!("at most {decimals} fractional digits are allowed"),
            ));
        }
    }

    parse_units(trimmed, decimals)
        .map(|parsed| parsed.get_absolute())
        .map_err(|e| ValidationError::invalid_amount(trimmed, e))
}

fn parse_smallest_unit(amount: Option<&str>, decimals: u8) -> Result<BigUint, String> {
    let raw = amount.ok_or_else(|| "amount is missing".to_string())?.trim();
    if decimals > MAX_DECIMALS {
        return Err(format!("{decimals} decimals exceeds the maximum of {MAX_DECIMALS}"));
    }

    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => BigUint::from_str_radix(hex, 16),
        None => BigUint::from_str_radix(raw, 10),
    };

    parsed.map_err(|e| e.to_string())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
