//! Well-known names and constants
//!
//! This module centralizes environment variable names and magic numbers used
//! throughout the slimwallet crate.

use std::time::Duration;

/// Environment variables read at startup
pub mod env {
    /// Wallet recovery phrase (required)
    pub const MNEMONIC: &str = "WALLET_MNEMONIC";

    /// HD account index derived from the phrase (default 0)
    pub const ACCOUNT_INDEX: &str = "WALLET_ACCOUNT_INDEX";

    /// RPC endpoint, overrides the chain's `rpcEndpoint`
    pub const RPC_URL: &str = "WALLET_RPC_URL";

    /// Path of the blockchain configuration file
    pub const CONFIG_PATH: &str = "WALLET_CONFIG";

    /// Chain id to select (default: first configured chain)
    pub const CHAIN_ID: &str = "WALLET_CHAIN_ID";

    /// CoinGecko API key (required)
    pub const PRICE_API_KEY: &str = "COINGECKO_API_KEY";

    /// CoinGecko base URL override
    pub const PRICE_API_URL: &str = "COINGECKO_API_URL";

    /// Recipient of the transfer driven by the binary
    pub const TRANSFER_TO: &str = "TRANSFER_TO";

    /// Display amount of the transfer driven by the binary
    pub const TRANSFER_AMOUNT: &str = "TRANSFER_AMOUNT";

    /// Ticker of the transferred asset (default: native asset)
    pub const TRANSFER_ASSET: &str = "TRANSFER_ASSET";

    /// Set to `1` or `true` to submit after the fee preview
    pub const TRANSFER_CONFIRM: &str = "TRANSFER_CONFIRM";
}

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "blockchain.json";

/// Public CoinGecko API base URL
pub const DEFAULT_PRICE_API_URL: &str = "https://api.coingecko.com/api/v3";

/// Fixed-point scale applied to USD prices before integer multiplication (cents)
pub const PRICE_SCALE_FACTOR: u32 = 100;

/// Decimals used when an asset does not declare any
pub const DEFAULT_DECIMALS: u8 = 18;

/// Timeout for price API requests
pub const PRICE_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for RPC requests
pub const RPC_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
