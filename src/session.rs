// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet session context
//!
//! A [`WalletSession`] bundles everything an operation needs to know about the
//! unlocked wallet: its address, the selected chain with its assets, and the
//! chain client. It is passed explicitly to the fee estimator, the balance
//! aggregator and the transfer form.

use std::fmt;
use std::sync::Arc;

use alloy_primitives::Address;
use alloy_signer_local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};

use crate::chain::ChainClient;
use crate::config::{Asset, Chain, ChainAssets};
use crate::errors::ConfigError;

/// Derive the signer at `index` on the default Ethereum HD path
/// (`m/44'/60'/0'/0/{index}`).
///
/// Whitespace in the phrase is normalized before derivation.
///
/// # Examples
///
/// ```
/// use slimwallet::session::signer_from_mnemonic;
///
/// let phrase = "test test test test test test test test test test test junk";
/// let signer = signer_from_mnemonic(phrase, 0).unwrap();
/// assert_eq!(
///     signer.address().to_string(),
///     "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
/// );
/// ```
pub fn signer_from_mnemonic(phrase: &str, index: u32) -> Result<PrivateKeySigner, ConfigError> {
    let phrase = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
    let invalid = |e: alloy_signer_local::LocalSignerError| ConfigError::InvalidMnemonic {
        details: e.to_string(),
    };

    MnemonicBuilder::<English>::default()
        .phrase(phrase)
        .index(index)
        .map_err(invalid)?
        .build()
        .map_err(invalid)
}

/// The unlocked wallet on its selected chain
#[derive(Clone)]
pub struct WalletSession {
    address: Address,
    chain: Chain,
    native_asset: Asset,
    token_assets: Vec<Asset>,
    client: Arc<dyn ChainClient>,
}

impl WalletSession {
    /// Create a session for `address` on the validated chain `assets`.
    pub fn new(address: Address, assets: ChainAssets, client: Arc<dyn ChainClient>) -> Self {
        let ChainAssets {
            chain,
            native_asset,
            token_assets,
        } = assets;

        Self {
            address,
            chain,
            native_asset,
            token_assets,
            client,
        }
    }

    /// Wallet address
    pub fn address(&self) -> Address {
        self.address
    }

    /// Selected chain
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Native currency of the selected chain
    pub fn native_asset(&self) -> &Asset {
        &self.native_asset
    }

    /// ERC-20 tokens on the selected chain
    pub fn token_assets(&self) -> &[Asset] {
        &self.token_assets
    }

    /// Native asset followed by tokens, in configuration order
    pub fn all_assets(&self) -> impl Iterator<Item = &Asset> {
        std::iter::once(&self.native_asset).chain(self.token_assets.iter())
    }

    /// Chain client
    pub fn client(&self) -> &dyn ChainClient {
        self.client.as_ref()
    }
}

impl fmt::Debug for WalletSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletSession")
            .field("address", &self.address)
            .field("chain", &self.chain.id)
            .field("native_asset", &self.native_asset.ticker)
            .field(
                "token_assets",
                &self
                    .token_assets
                    .iter()
                    .map(|asset| asset.ticker.as_str())
                    .collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}
