// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Signing provider construction
//!
//! The wallet talks to a single chain through one type-erased provider that
//! signs locally with the session's derived key. Keeping the provider erased
//! lets the chain client stay generic over `Provider<Ethereum>` while the
//! binary only names [`WalletProvider`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use slimwallet::provider::{create_wallet_provider, ProviderConfig};
//! use slimwallet::AlloyChainClient;
//!
//! let provider = create_wallet_provider(&ProviderConfig::new(rpc_url), signer)?;
//! let client = AlloyChainClient::new(provider);
//! ```

use alloy_network::Ethereum;
use alloy_provider::DynProvider;

mod config;
mod factory;

pub use config::ProviderConfig;
pub use factory::create_wallet_provider;

/// Type-erased Ethereum provider with nonce, gas, chain-id and wallet fillers
pub type WalletProvider = DynProvider<Ethereum>;
