// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Minimal EVM wallet core
//!
//! slimwallet unlocks a wallet from a recovery phrase, shows native and ERC-20
//! balances on one configured chain, and submits native or token transfers
//! after previewing their fee in native-currency and USD terms.
//!
//! # Modules
//!
//! - [`config`]: chain and asset configuration, secrets and settings
//! - [`session`]: the unlocked wallet on its selected chain
//! - [`chain`]: the [`ChainClient`] seam and its alloy implementation
//! - [`price`]: the [`PriceFeed`] seam and the CoinGecko client
//! - [`fees`]: exact fee arithmetic and the [`FeeEstimator`]
//! - [`transfer`]: drafts, requests and the [`TransferForm`] state machine
//! - [`balance`]: concurrent balance refresh
//! - [`units`]: smallest-unit formatting and parsing
//! - [`errors`]: typed errors for every operation
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use slimwallet::{
//!     create_wallet_provider, refresh_balances, signer_from_mnemonic, AlloyChainClient,
//!     BlockchainConfig, ProviderConfig, WalletSession,
//! };
//!
//! let assets = BlockchainConfig::from_path("blockchain.json")?.select_chain(None)?;
//! let signer = signer_from_mnemonic(&phrase, 0)?;
//! let address = signer.address();
//! let provider = create_wallet_provider(&ProviderConfig::new(assets.rpc_url(None)?), signer)?;
//! let session = WalletSession::new(address, assets, Arc::new(AlloyChainClient::new(provider)));
//!
//! for balance in refresh_balances(&session).await {
//!     println!("{} {}", balance.display(), balance.asset.ticker);
//! }
//! ```

pub mod balance;
pub mod bootstrap;
pub mod chain;
pub mod config;
pub mod errors;
pub mod fees;
pub mod price;
pub mod provider;
pub mod session;
mod spans;
pub mod transfer;
pub mod units;

pub use balance::{refresh_balances, AssetBalance, BalanceStatus};
pub use chain::{AlloyChainClient, ChainClient, TransferReceipt};
pub use config::{Asset, BlockchainConfig, Chain, ChainAssets, Secrets, WalletSettings};
pub use errors::{
    ChainRejection, ConfigError, FailureKind, NetworkError, PriceError, TransferError,
    ValidationError,
};
pub use fees::{FeeEstimate, FeeEstimator};
pub use price::{CoinGeckoPriceFeed, PriceFeed};
pub use provider::{create_wallet_provider, ProviderConfig, WalletProvider};
pub use session::{signer_from_mnemonic, WalletSession};
pub use transfer::{
    AssetSelection, FeeStatus, FormState, TransferDraft, TransferForm, TransferRequest,
};
