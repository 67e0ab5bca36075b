//! Errors for requests the chain explicitly refused.

use alloy_primitives::TxHash;

/// The node or the chain rejected a transfer.
///
/// Unlike [`NetworkError`](super::NetworkError), retrying the same request
/// without changing it will normally fail the same way.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainRejection {
    /// Gas estimation reverted (invalid recipient, insufficient balance, ...).
    #[error("Gas estimation reverted: {reason}")]
    GasEstimationReverted {
        /// Message returned by the node
        reason: String,
    },

    /// The node refused to accept the signed transaction.
    #[error("Transaction rejected by node: {reason}")]
    BroadcastRejected {
        /// Message returned by the node
        reason: String,
    },

    /// The transaction was included but its receipt reports failure.
    #[error("Transaction {tx_hash} failed on chain")]
    TransactionReverted {
        /// Hash of the included transaction
        tx_hash: TxHash,
    },
}

impl ChainRejection {
    /// Create a `GasEstimationReverted` rejection.
    pub fn gas_estimation_reverted(reason: impl Into<String>) -> Self {
        ChainRejection::GasEstimationReverted {
            reason: reason.into(),
        }
    }

    /// Create a `BroadcastRejected` rejection.
    pub fn broadcast_rejected(reason: impl Into<String>) -> Self {
        ChainRejection::BroadcastRejected {
            reason: reason.into(),
        }
    }
}
