// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Editable transfer input

use crate::config::Asset;

/// The asset a draft transfers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSelection {
    /// A configured asset
    Resolved(Asset),
    /// A typed ticker that matches no configured asset
    Unresolved {
        /// The ticker as typed
        ticker: String,
    },
}

impl AssetSelection {
    /// Look `ticker` up (exact match) among `candidates`.
    pub fn resolve<'a>(ticker: &str, candidates: impl IntoIterator<Item = &'a Asset>) -> Self {
        candidates
            .into_iter()
            .find(|asset| asset.ticker == ticker)
            .map(|asset| AssetSelection::Resolved(asset.clone()))
            .unwrap_or_else(|| AssetSelection::Unresolved {
                ticker: ticker.to_string(),
            })
    }

    /// The selected asset, if resolved
    pub fn asset(&self) -> Option<&Asset> {
        match self {
            AssetSelection::Resolved(asset) => Some(asset),
            AssetSelection::Unresolved { .. } => None,
        }
    }

    /// Ticker of the selection, resolved or not
    pub fn ticker(&self) -> &str {
        match self {
            AssetSelection::Resolved(asset) => &asset.ticker,
            AssetSelection::Unresolved { ticker } => ticker,
        }
    }
}

/// Recipient, amount and asset as entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferDraft {
    to: String,
    amount: String,
    asset: AssetSelection,
}

impl TransferDraft {
    /// An empty draft for `asset`
    pub fn new(asset: AssetSelection) -> Self {
        Self {
            to: String::new(),
            amount: String::new(),
            asset,
        }
    }

    /// Recipient as typed
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Normalized display amount
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Selected asset
    pub fn asset(&self) -> &AssetSelection {
        &self.asset
    }

    /// Set the recipient, stored exactly as typed.
    pub fn set_to(&mut self, to: impl Into<String>) {
        self.to = to.into();
    }

    /// Set the amount after [`normalize_amount`].
    pub fn set_amount(&mut self, amount: &str) {
        self.amount = normalize_amount(amount);
    }

    /// Replace the asset selection.
    pub fn set_asset(&mut self, asset: AssetSelection) {
        self.asset = asset;
    }

    /// Whether every field needed to build a request is filled in.
    pub fn is_complete(&self) -> bool {
        self.asset.asset().is_some() && !self.to.trim().is_empty() && !self.amount.is_empty()
    }
}

/// Trim a typed amount and drop `,` thousands separators from its integer part.
///
/// Commas are only removed when every group after the first has exactly three
/// digits. Any other comma (a decimal comma, a misplaced separator, a comma in
/// the fraction) is kept so that parsing rejects the amount instead of
/// changing its value.
///
/// ```
/// use slimwallet::transfer::normalize_amount;
///
/// assert_eq!(normalize_amount(" 1,234.5 "), "1234.5");
/// assert_eq!(normalize_amount("0,5"), "0,5");
/// ```
pub fn normalize_amount(amount: &str) -> String {
    let trimmed = amount.trim();
    let (whole, rest) = match trimmed.find('.') {
        Some(dot) => trimmed.split_at(dot),
        None => (trimmed, ""),
    };
    if !whole.contains(',') {
        return trimmed.to_string();
    }

    let mut groups = whole.split(',');
    let first_ok = groups
        .next()
        .is_some_and(|g| (1..=3).contains(&g.len()) && g.bytes().all(|b| b.is_ascii_digit()));
    let rest_ok = groups.all(|g| g.len() == 3 && g.bytes().all(|b| b.is_ascii_digit()));

    if first_ok && rest_ok {
        format!("{}{rest}", whole.replace(',', ""))
    } else {
        trimmed.to_string()
    }
}
