// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Concurrent balance refresh
//!
//! One native balance query and one ERC-20 `balanceOf` query per configured
//! token are issued in parallel with `futures::join_all`. Every query's
//! outcome is captured on its own, so a failing token never hides the others.
//!
//! # Example
//!
//! ```rust,ignore
//! use slimwallet::balance::refresh_balances;
//!
//! for balance in refresh_balances(&session).await {
//!     println!("{}: {}", balance.asset.ticker, balance.display());
//! }
//! ```

use alloy_primitives::U256;
use futures::future::join_all;
use tracing::{info, warn, Instrument};

use crate::config::Asset;
use crate::errors::NetworkError;
use crate::session::WalletSession;
use crate::spans;
use crate::units::format_u256;

/// Outcome of one balance query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BalanceStatus {
    /// The balance in smallest units
    Available(U256),
    /// The query failed
    Unavailable {
        /// Display message of the failure
        reason: String,
    },
}

/// A fresh asset record with the outcome of its balance query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetBalance {
    /// Copy of the configured asset; `balance` is set when available
    pub asset: Asset,
    /// Query outcome
    pub status: BalanceStatus,
}

impl AssetBalance {
    fn from_result(asset: &Asset, result: Result<U256, NetworkError>) -> Self {
        match result {
            Ok(balance) => Self {
                asset: asset.with_balance(Some(balance)),
                status: BalanceStatus::Available(balance),
            },
            Err(e) => {
                warn!(
                    asset = %asset.ticker,
                    token = ?asset.address,
                    error = %e,
                    "Failed to fetch balance"
                );
                Self {
                    asset: asset.with_balance(None),
                    status: BalanceStatus::Unavailable {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    fn missing_contract(asset: &Asset) -> Self {
        warn!(asset = %asset.ticker, "Token has no contract address, balance not queried");
        Self {
            asset: asset.with_balance(None),
            status: BalanceStatus::Unavailable {
                reason: format!("token {} has no contract address", asset.ticker),
            },
        }
    }

    /// Whether the balance was fetched
    pub fn is_available(&self) -> bool {
        matches!(self.status, BalanceStatus::Available(_))
    }

    /// Formatted balance, or `"unavailable"` if the query failed
    pub fn display(&self) -> String {
        match self.status {
            BalanceStatus::Available(balance) => format_u256(Some(balance), self.asset.decimals),
            BalanceStatus::Unavailable { .. } => "unavailable".to_string(),
        }
    }
}

/// Fetch the native balance and every token balance of the session's wallet.
///
/// Results are native first, then tokens in configuration order. The
/// session's configured assets are never modified.
pub async fn refresh_balances(session: &WalletSession) -> Vec<AssetBalance> {
    let holder = session.address();
    let client = session.client();
    let span = spans::refresh_balances(holder, session.token_assets().len() + 1);

    async move {
        let native = async {
            let result = client.native_balance(holder).await;
            AssetBalance::from_result(session.native_asset(), result)
        };

        let tokens = join_all(session.token_assets().iter().map(|asset| async move {
            match asset.address {
                Some(token) => {
                    AssetBalance::from_result(asset, client.token_balance(token, holder).await)
                }
                None => AssetBalance::missing_contract(asset),
            }
        }));

        let (native, tokens) = tokio::join!(native, tokens);

        let mut balances = Vec::with_capacity(tokens.len() + 1);
        balances.push(native);
        balances.extend(tokens);

        let unavailable = balances.iter().filter(|b| !b.is_available()).count();
        info!(count = balances.len(), unavailable, "Balances refreshed");
        balances
    }
    .instrument(span)
    .await
}
