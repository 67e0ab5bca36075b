// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Environment-provided secrets and runtime settings

use std::fmt;
use std::path::PathBuf;

use crate::config::constants::{env, DEFAULT_CONFIG_PATH, DEFAULT_PRICE_API_URL};
use crate::errors::ConfigError;

/// Secrets read once at startup and never persisted.
///
/// `Debug` output redacts every value.
#[derive(Clone)]
pub struct Secrets {
    /// Wallet recovery phrase
    pub mnemonic: String,
    /// RPC endpoint override
    pub rpc_url: Option<String>,
    /// Price API key
    pub price_api_key: String,
}

impl Secrets {
    /// Read secrets from the process environment (and `.env`, if loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    /// Read secrets through an arbitrary lookup function.
    ///
    /// Empty values count as missing.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Ok(Self {
            mnemonic: get(env::MNEMONIC).ok_or(ConfigError::MissingEnv {
                name: env::MNEMONIC,
            })?,
            rpc_url: get(env::RPC_URL),
            price_api_key: get(env::PRICE_API_KEY).ok_or(ConfigError::MissingEnv {
                name: env::PRICE_API_KEY,
            })?,
        })
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("mnemonic", &"<redacted>")
            .field("rpc_url", &self.rpc_url.as_ref().map(|_| "<redacted>"))
            .field("price_api_key", &"<redacted>")
            .finish()
    }
}

/// Non-secret runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletSettings {
    /// Blockchain configuration file
    pub config_path: PathBuf,
    /// Chain to select; `None` selects the first configured chain
    pub chain_id: Option<String>,
    /// HD account index
    pub account_index: u32,
    /// Price API base URL
    pub price_api_url: String,
}

impl Default for WalletSettings {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            chain_id: None,
            account_index: 0,
            price_api_url: DEFAULT_PRICE_API_URL.to_string(),
        }
    }
}

impl WalletSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    /// Read settings through an arbitrary lookup function, falling back to
    /// defaults for unset values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let account_index = match get(env::ACCOUNT_INDEX) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|e| ConfigError::invalid_env(env::ACCOUNT_INDEX, e.to_string()))?,
            None => defaults.account_index,
        };

        Ok(Self {
            config_path: get(env::CONFIG_PATH)
                .map(PathBuf::from)
                .unwrap_or(defaults.config_path),
            chain_id: get(env::CHAIN_ID),
            account_index,
            price_api_url: get(env::PRICE_API_URL).unwrap_or(defaults.price_api_url),
        })
    }
}
