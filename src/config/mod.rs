//! Chain and asset configuration
//!
//! The wallet is configured by a JSON document listing chains and assets,
//! loaded once at startup and treated as immutable afterwards:
//!
//! ```json
//! {
//!   "chains": [
//!     {
//!       "id": "ethereum",
//!       "name": "Ethereum",
//!       "nativeAssetId": "eth",
//!       "blockchainExplorer": "https://etherscan.io/tx",
//!       "rpcEndpoint": "http://localhost:8545"
//!     }
//!   ],
//!   "assets": [
//!     { "id": "eth", "chainId": "ethereum", "ticker": "ETH", "name": "Ether",
//!       "decimals": 18, "coingeckoId": "ethereum" },
//!     { "id": "usdc", "chainId": "ethereum", "ticker": "USDC", "name": "USD Coin",
//!       "decimals": 6, "address": "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48",
//!       "coingeckoId": "usd-coin" }
//!   ]
//! }
//! ```
//!
//! Secrets (recovery phrase, RPC endpoint, price API key) never live in this
//! file; see [`Secrets`].
//!
//! # Example
//!
//! ```rust,ignore
//! use slimwallet::BlockchainConfig;
//!
//! let config = BlockchainConfig::from_path("blockchain.json")?;
//! let assets = config.select_chain(None)?;
//! println!("{} ({})", assets.chain.name, assets.native_asset.ticker);
//! ```

use std::path::Path;

use alloy_primitives::{Address, TxHash, U256};
use serde::{Deserialize, Serialize};

use crate::config::constants::{env, DEFAULT_DECIMALS};
use crate::errors::ConfigError;

pub mod constants;
mod secrets;

pub use secrets::{Secrets, WalletSettings};

fn default_decimals() -> u8 {
    DEFAULT_DECIMALS
}

/// A native currency or ERC-20 token on a configured chain
///
/// `address` is `None` exactly when the asset is its chain's native currency;
/// [`BlockchainConfig::select_chain`] rejects configurations that break this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    /// Configuration id
    pub id: String,
    /// Id of the chain this asset lives on
    pub chain_id: String,
    /// Display ticker (e.g. "ETH")
    pub ticker: String,
    /// Display name
    pub name: String,
    /// Decimal places of the smallest unit
    #[serde(default = "default_decimals")]
    pub decimals: u8,
    /// ERC-20 contract address, absent for the native currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// CoinGecko price id
    #[serde(alias = "coingekoId")]
    pub coingecko_id: String,
    /// Latest fetched balance in smallest units; only set on records produced
    /// by the balance aggregator, never read from configuration
    #[serde(skip)]
    pub balance: Option<U256>,
}

impl Asset {
    /// Whether this is the chain's native currency
    pub fn is_native(&self) -> bool {
        self.address.is_none()
    }

    /// A copy of this asset carrying `balance`
    #[must_use]
    pub fn with_balance(&self, balance: Option<U256>) -> Self {
        Self {
            balance,
            ..self.clone()
        }
    }
}

/// A configured chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chain {
    /// Configuration id
    pub id: String,
    /// Display name
    pub name: String,
    /// Id of the native asset in the asset list
    pub native_asset_id: String,
    /// Explorer URL template for transactions
    pub blockchain_explorer: String,
    /// RPC endpoint; may be overridden by the environment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_endpoint: Option<String>,
}

impl Chain {
    /// Explorer URL for a transaction.
    ///
    /// A `{hash}` placeholder in the template is substituted; otherwise the
    /// hash is appended as a path segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::TxHash;
    /// use slimwallet::Chain;
    ///
    /// let chain = Chain {
    ///     id: "ethereum".into(),
    ///     name: "Ethereum".into(),
    ///     native_asset_id: "eth".into(),
    ///     blockchain_explorer: "https://etherscan.io/tx/".into(),
    ///     rpc_endpoint: None,
    /// };
    /// let url = chain.transaction_url(&TxHash::ZERO);
    /// assert_eq!(url, format!("https://etherscan.io/tx/{}", TxHash::ZERO));
    /// ```
    pub fn transaction_url(&self, tx_hash: &TxHash) -> String {
        let template = self.blockchain_explorer.as_str();
        if template.contains("{hash}") {
            template.replace("{hash}", &tx_hash.to_string())
        } else {
            format!("{}/{tx_hash}", template.trim_end_matches('/'))
        }
    }
}

/// The chain list and asset list loaded from configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainConfig {
    /// Configured chains
    pub chains: Vec<Chain>,
    /// Configured assets across all chains
    pub assets: Vec<Asset>,
}

/// The selected chain with its validated native asset and tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainAssets {
    /// Selected chain
    pub chain: Chain,
    /// The chain's native currency
    pub native_asset: Asset,
    /// ERC-20 tokens on the chain, in configuration order
    pub token_assets: Vec<Asset>,
}

impl ChainAssets {
    /// Resolve the RPC endpoint, preferring `override_url` over the chain's
    /// configured endpoint.
    pub fn rpc_url(&self, override_url: Option<&str>) -> Result<String, ConfigError> {
        override_url
            .map(str::to_string)
            .or_else(|| self.chain.rpc_endpoint.clone())
            .ok_or_else(|| ConfigError::MissingRpcEndpoint {
                chain_id: self.chain.id.clone(),
                env: env::RPC_URL,
            })
    }
}

impl BlockchainConfig {
    /// Parse configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse configuration from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Select a chain (by id, or the first one) and validate its assets.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NoChains`] / [`ConfigError::UnknownChain`] if no chain matches
    /// - [`ConfigError::MissingNativeAsset`] if the native asset is not on the chain
    /// - [`ConfigError::NativeAssetHasAddress`] / [`ConfigError::TokenWithoutAddress`]
    ///   if the address invariant is broken
    pub fn select_chain(&self, chain_id: Option<&str>) -> Result<ChainAssets, ConfigError> {
        let chain = match chain_id {
            Some(id) => self
                .chains
                .iter()
                .find(|chain| chain.id == id)
                .ok_or_else(|| ConfigError::UnknownChain { id: id.to_string() })?,
            None => self.chains.first().ok_or(ConfigError::NoChains)?,
        };

        let native_asset = self
            .assets
            .iter()
            .find(|asset| asset.id == chain.native_asset_id && asset.chain_id == chain.id)
            .ok_or_else(|| ConfigError::MissingNativeAsset {
                chain_id: chain.id.clone(),
                asset_id: chain.native_asset_id.clone(),
            })?;

        if !native_asset.is_native() {
            return Err(ConfigError::NativeAssetHasAddress {
                asset_id: native_asset.id.clone(),
            });
        }

        let token_assets = self
            .assets
            .iter()
            .filter(|asset| asset.chain_id == chain.id && asset.id != native_asset.id)
            .map(|asset| {
                if asset.is_native() {
                    Err(ConfigError::TokenWithoutAddress {
                        asset_id: asset.id.clone(),
                    })
                } else {
                    Ok(asset.clone())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ChainAssets {
            chain: chain.clone(),
            native_asset: native_asset.clone(),
            token_assets,
        })
    }
}
