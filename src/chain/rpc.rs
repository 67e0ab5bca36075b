// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! [`ChainClient`] over an alloy provider

use alloy_network::{Ethereum, ReceiptResponse, TransactionBuilder};
use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::{PendingTransactionBuilder, Provider};
use alloy_rpc_types::TransactionRequest;
use alloy_transport::TransportError;
use async_trait::async_trait;
use tracing::{debug, info};

use crate::errors::{ChainRejection, NetworkError, TransferError};
use crate::transfer::TransferRequest;

use super::erc20::IERC20;
use super::{ChainClient, TransferReceipt};

/// Chain client backed by an alloy provider
///
/// The provider must carry a wallet filler for [`ChainClient::send_transfer`]
/// to sign; see [`create_wallet_provider`](crate::provider::create_wallet_provider).
#[derive(Debug, Clone)]
pub struct AlloyChainClient<P> {
    provider: P,
}

impl<P> AlloyChainClient<P>
where
    P: Provider<Ethereum>,
{
    /// Wrap `provider`
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

/// Plain value-transfer request for a native transfer
fn native_transaction(from: Address, to: Address, value: U256) -> TransactionRequest {
    TransactionRequest::default()
        .with_from(from)
        .with_to(to)
        .with_value(value)
}

/// A node error response is a rejection; anything else means the node never answered.
fn classify_transport(
    error: TransportError,
    operation: &'static str,
    rejection: fn(String) -> ChainRejection,
) -> TransferError {
    match error.as_error_resp() {
        Some(payload) => rejection(payload.message.to_string()).into(),
        None => NetworkError::rpc_failed(operation, error).into(),
    }
}

fn classify_contract(
    error: alloy_contract::Error,
    operation: &'static str,
    rejection: fn(String) -> ChainRejection,
) -> TransferError {
    match error {
        alloy_contract::Error::TransportError(error) => {
            classify_transport(error, operation, rejection)
        }
        other => NetworkError::rpc_failed(operation, other).into(),
    }
}

fn estimation_reverted(reason: String) -> ChainRejection {
    ChainRejection::gas_estimation_reverted(reason)
}

fn broadcast_rejected(reason: String) -> ChainRejection {
    ChainRejection::broadcast_rejected(reason)
}

fn into_transfer_receipt(receipt: impl ReceiptResponse) -> TransferReceipt {
    TransferReceipt {
        tx_hash: receipt.transaction_hash(),
        success: receipt.status(),
    }
}

#[async_trait]
impl<P> ChainClient for AlloyChainClient<P>
where
    P: Provider<Ethereum> + 'static,
{
    async fn fee_per_gas(&self) -> Result<u128, NetworkError> {
        let estimation = self.provider.estimate_eip1559_fees().await.map_err(|e| {
            if e.is_transport_error() || e.is_error_resp() {
                NetworkError::rpc_failed("eth_feeHistory", e)
            } else {
                NetworkError::fee_data_unavailable(e.to_string())
            }
        })?;

        debug!(
            max_fee_per_gas = estimation.max_fee_per_gas,
            max_priority_fee_per_gas = estimation.max_priority_fee_per_gas,
            "Fetched EIP-1559 fee estimate"
        );
        Ok(estimation.max_fee_per_gas)
    }

    async fn native_balance(&self, holder: Address) -> Result<U256, NetworkError> {
        self.provider
            .get_balance(holder)
            .await
            .map_err(|e| NetworkError::rpc_failed("eth_getBalance", e))
    }

    async fn token_balance(&self, token: Address, holder: Address) -> Result<U256, NetworkError> {
        IERC20::new(token, &self.provider)
            .balanceOf(holder)
            .call()
            .await
            .map_err(|e| NetworkError::rpc_failed("balanceOf", e))
    }

    async fn estimate_gas(&self, request: &TransferRequest) -> Result<u64, TransferError> {
        match *request {
            TransferRequest::Native { from, to, value } => self
                .provider
                .estimate_gas(native_transaction(from, to, value))
                .await
                .map_err(|e| classify_transport(e, "eth_estimateGas", estimation_reverted)),
            TransferRequest::Token {
                token,
                from,
                to,
                amount,
            } => IERC20::new(token, &self.provider)
                .transfer(to, amount)
                .from(from)
                .estimate_gas()
                .await
                .map_err(|e| classify_contract(e, "eth_estimateGas", estimation_reverted)),
        }
    }

    async fn broadcast_transfer(&self, request: &TransferRequest) -> Result<TxHash, TransferError> {
        let pending = match *request {
            TransferRequest::Native { from, to, value } => self
                .provider
                .send_transaction(native_transaction(from, to, value))
                .await
                .map_err(|e| classify_transport(e, "eth_sendRawTransaction", broadcast_rejected))?,
            TransferRequest::Token {
                token,
                from,
                to,
                amount,
            } => IERC20::new(token, &self.provider)
                .transfer(to, amount)
                .from(from)
                .send()
                .await
                .map_err(|e| classify_contract(e, "eth_sendRawTransaction", broadcast_rejected))?,
        };

        let tx_hash = *pending.tx_hash();
        info!(%tx_hash, "Transaction broadcast");
        Ok(tx_hash)
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransferReceipt, TransferError> {
        let included = self
            .provider
            .get_transaction_receipt(tx_hash)
            .await
            .map_err(|e| NetworkError::receipt_unavailable(tx_hash, e))?;
        if let Some(receipt) = included {
            return Ok(into_transfer_receipt(receipt));
        }

        debug!(%tx_hash, "Waiting for receipt");
        let receipt = PendingTransactionBuilder::new(self.provider.root().clone(), tx_hash)
            .get_receipt()
            .await
            .map_err(|e| NetworkError::receipt_unavailable(tx_hash, e))?;
        Ok(into_transfer_receipt(receipt))
    }
}
