//! Startup and the environment-driven transfer flow of the binary.

use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{info, warn};

use crate::{
    balance::refresh_balances,
    chain::AlloyChainClient,
    config::{constants::env, BlockchainConfig, Secrets, WalletSettings},
    errors::ValidationError,
    fees::FeeEstimator,
    price::CoinGeckoPriceFeed,
    provider::{create_wallet_provider, ProviderConfig},
    session::{signer_from_mnemonic, WalletSession},
    transfer::{FeeStatus, FormState, TransferForm},
};

/// Main entry point for the application.
///
/// Configuration failures are returned; everything after the wallet is
/// unlocked is logged and never fails the process.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let settings = WalletSettings::from_env()?;
    let secrets = Secrets::from_env()?;

    let config = BlockchainConfig::from_path(&settings.config_path)?;
    let assets = config.select_chain(settings.chain_id.as_deref())?;
    let rpc_url = assets.rpc_url(secrets.rpc_url.as_deref())?;

    let signer = signer_from_mnemonic(&secrets.mnemonic, settings.account_index)?;
    let address = signer.address();
    let provider = create_wallet_provider(&ProviderConfig::new(rpc_url), signer)?;
    let prices = CoinGeckoPriceFeed::new(&settings.price_api_url, &secrets.price_api_key)?;

    let session = WalletSession::new(address, assets, Arc::new(AlloyChainClient::new(provider)));
    let estimator = FeeEstimator::new(Arc::new(prices));
    info!(%address, chain = %session.chain().name, "Wallet unlocked");

    for balance in refresh_balances(&session).await {
        info!(
            asset = %balance.asset.ticker,
            balance = %balance.display(),
            "Balance"
        );
    }

    let Some(input) = TransferInput::from_env() else {
        info!(
            "No transfer requested; set {} and {} to preview one",
            env::TRANSFER_TO,
            env::TRANSFER_AMOUNT
        );
        return Ok(());
    };

    if let Err(e) = drive_transfer(&session, &estimator, &input).await {
        warn!(error = %e, "Transfer not submitted");
    }
    Ok(())
}

/// A transfer described by environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferInput {
    /// Recipient as typed
    pub to: String,
    /// Display amount as typed
    pub amount: String,
    /// Ticker to transfer; `None` keeps the native asset
    pub asset: Option<String>,
    /// Submit after a successful preview
    pub confirm: bool,
}

impl TransferInput {
    /// Read the transfer from the process environment.
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|name| dotenvy::var(name).ok())
    }

    /// Read the transfer through an arbitrary lookup; `None` unless both the
    /// recipient and the amount are set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        Some(Self {
            to: get(env::TRANSFER_TO)?,
            amount: get(env::TRANSFER_AMOUNT)?,
            asset: get(env::TRANSFER_ASSET),
            confirm: get(env::TRANSFER_CONFIRM)
                .is_some_and(|value| matches!(value.trim(), "1" | "true" | "yes")),
        })
    }
}

/// Preview `input` and, if confirmed, submit it.
pub async fn drive_transfer(
    session: &WalletSession,
    estimator: &FeeEstimator,
    input: &TransferInput,
) -> Result<FormState, ValidationError> {
    let mut form = TransferForm::for_session(session);
    form.set_recipient(input.to.as_str())?;
    form.set_amount(&input.amount)?;
    if let Some(ticker) = &input.asset {
        if !form.select_asset(ticker)? {
            warn!(%ticker, "Unknown asset; preview and submission stay disabled");
            return Ok(form.state().clone());
        }
    }

    form.preview(estimator, session).await?;
    match form.state() {
        FormState::ReadyToSend { estimate } => {
            info!(fee = %estimate.summary(session.native_asset()), "Fee preview");
        }
        FormState::Previewing {
            fee: FeeStatus::Failed { kind, message },
        } => {
            warn!(kind = kind.label(), %message, "Fee preview failed");
            return Ok(form.state().clone());
        }
        other => return Ok(other.clone()),
    }

    if !input.confirm {
        info!(
            "Set {}=1 to submit this transfer",
            env::TRANSFER_CONFIRM
        );
        return Ok(form.state().clone());
    }

    form.send(session).await?;
    match form.state() {
        FormState::Succeeded {
            tx_hash,
            explorer_url,
        } => info!(%tx_hash, %explorer_url, "Transfer submitted"),
        FormState::Failed {
            kind,
            reason,
            tx_hash,
        } => {
            warn!(kind = kind.label(), %reason, ?tx_hash, "Transfer failed")
        }
        other => warn!(state = other.name(), "Unexpected form state after submission"),
    }
    Ok(form.state().clone())
}
