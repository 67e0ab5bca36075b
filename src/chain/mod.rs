// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain client seam
//!
//! Everything the wallet needs from a node goes through [`ChainClient`]:
//! fee data, balances, gas estimation and broadcast. [`AlloyChainClient`]
//! implements it over any alloy `Provider<Ethereum>`; tests substitute a mock.
//!
//! Errors are classified at this boundary. A JSON-RPC error response from the
//! node (revert, insufficient funds, nonce too low) becomes a
//! [`ChainRejection`](crate::errors::ChainRejection); anything that prevented
//! the node from answering becomes a [`NetworkError`].

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::errors::{NetworkError, TransferError};
use crate::transfer::TransferRequest;

mod erc20;
mod rpc;

pub use erc20::IERC20;
pub use rpc::AlloyChainClient;

/// Outcome of a broadcast transaction once its receipt is available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReceipt {
    /// Hash of the included transaction
    pub tx_hash: TxHash,
    /// Whether the receipt reports successful execution
    pub success: bool,
}

/// Read and write access to the selected chain
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Current EIP-1559 max fee per gas, in wei
    async fn fee_per_gas(&self) -> Result<u128, NetworkError>;

    /// Native balance of `holder`, in wei
    async fn native_balance(&self, holder: Address) -> Result<U256, NetworkError>;

    /// ERC-20 `balanceOf(holder)` on `token`, in the token's smallest unit
    async fn token_balance(&self, token: Address, holder: Address) -> Result<U256, NetworkError>;

    /// Gas units `request` would consume
    async fn estimate_gas(&self, request: &TransferRequest) -> Result<u64, TransferError>;

    /// Sign and broadcast `request`, returning its hash once the node accepted it
    async fn broadcast_transfer(&self, request: &TransferRequest) -> Result<TxHash, TransferError>;

    /// Wait for the receipt of the broadcast transaction `tx_hash`.
    ///
    /// Failures are [`NetworkError::ReceiptUnavailable`] carrying `tx_hash`.
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<TransferReceipt, TransferError>;

    /// Broadcast `request`, then wait for its receipt
    async fn send_transfer(
        &self,
        request: &TransferRequest,
    ) -> Result<TransferReceipt, TransferError> {
        let tx_hash = self.broadcast_transfer(request).await?;
        self.wait_for_receipt(tx_hash).await
    }
}
