//! Error types for configuration and secret loading.

use std::path::PathBuf;

/// Errors raised while loading chain/asset configuration, secrets, or the
/// wallet signer.
///
/// These are the only errors that stop the `slimwallet` binary: without a
/// valid chain, native asset and signer there is no wallet to show.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set (or is empty).
    #[error("Missing required environment variable {name}")]
    MissingEnv {
        /// Name of the variable
        name: &'static str,
    },

    /// An environment variable is set but cannot be parsed.
    #[error("Invalid value for {name}: {details}")]
    InvalidEnv {
        /// Name of the variable
        name: &'static str,
        /// Why the value was rejected
        details: String,
    },

    /// The configuration file could not be read.
    #[error("Failed to read configuration file {}", path.display())]
    Read {
        /// Path that was read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for the expected layout.
    #[error("Failed to parse blockchain configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration defines no chain at all.
    #[error("Configuration defines no chains")]
    NoChains,

    /// The requested chain id does not exist in the configuration.
    #[error("No chain configured with id '{id}'")]
    UnknownChain {
        /// The requested chain id
        id: String,
    },

    /// The chain's native asset is missing from the asset list.
    #[error("Native asset '{asset_id}' of chain '{chain_id}' is not configured")]
    MissingNativeAsset {
        /// Chain whose native asset is missing
        chain_id: String,
        /// The `nativeAssetId` the chain refers to
        asset_id: String,
    },

    /// A native asset carries a contract address.
    #[error("Native asset '{asset_id}' must not have a contract address")]
    NativeAssetHasAddress {
        /// Offending asset id
        asset_id: String,
    },

    /// A token asset has no contract address.
    #[error("Token asset '{asset_id}' has no contract address")]
    TokenWithoutAddress {
        /// Offending asset id
        asset_id: String,
    },

    /// No RPC endpoint is configured for the selected chain.
    #[error("Chain '{chain_id}' has no RPC endpoint; set {env}")]
    MissingRpcEndpoint {
        /// Selected chain id
        chain_id: String,
        /// Environment variable that can supply one
        env: &'static str,
    },

    /// The RPC endpoint is not a usable URL.
    #[error("Invalid RPC URL '{url}': {details}")]
    InvalidRpcUrl {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        details: String,
    },

    /// The HTTP client for the price API could not be built.
    #[error("Failed to build price API client: {details}")]
    PriceClient {
        /// Builder failure
        details: String,
    },

    /// The recovery phrase does not derive a signer.
    #[error("Invalid wallet mnemonic: {details}")]
    InvalidMnemonic {
        /// Derivation failure, never the phrase itself
        details: String,
    },
}

impl ConfigError {
    /// Create an `InvalidEnv` error.
    pub fn invalid_env(name: &'static str, details: impl Into<String>) -> Self {
        ConfigError::InvalidEnv {
            name,
            details: details.into(),
        }
    }

    /// Create an `InvalidRpcUrl` error.
    pub fn invalid_rpc_url(url: impl Into<String>, details: impl std::fmt::Display) -> Self {
        ConfigError::InvalidRpcUrl {
            url: url.into(),
            details: details.to_string(),
        }
    }
}
