// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Provider factory for the signing wallet provider

use alloy_network::EthereumWallet;
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_client::ClientBuilder;
use alloy_signer_local::PrivateKeySigner;
use alloy_transport::utils::guess_local_url;
use alloy_transport_http::Http;
use tracing::debug;

use crate::errors::ConfigError;

use super::config::ProviderConfig;
use super::WalletProvider;

/// Create an HTTP provider that signs with `signer`
///
/// The provider uses alloy's recommended fillers (nonce, gas, chain id) and
/// the wallet filler, so `send_transaction` only needs `from`, `to`, `value`
/// and `input` set.
///
/// # Examples
///
/// ```rust,ignore
/// use slimwallet::provider::{create_wallet_provider, ProviderConfig};
///
/// let provider = create_wallet_provider(
///     &ProviderConfig::new("http://localhost:8545"),
///     signer,
/// )?;
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The URL cannot be parsed
/// - The HTTP client cannot be built
pub fn create_wallet_provider(
    config: &ProviderConfig,
    signer: PrivateKeySigner,
) -> Result<WalletProvider, ConfigError> {
    let url: url::Url = config
        .url
        .parse()
        .map_err(|e| ConfigError::invalid_rpc_url(&config.url, e))?;

    let http_client = reqwest::Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|e| ConfigError::invalid_rpc_url(&config.url, e))?;

    let is_local = guess_local_url(&url);
    let transport = Http::with_client(http_client, url);
    let client = ClientBuilder::default().transport(transport, is_local);

    debug!(
        signer = %signer.address(),
        timeout_secs = config.timeout.as_secs(),
        "Created wallet provider"
    );

    Ok(ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect_client(client)
        .erased())
}
