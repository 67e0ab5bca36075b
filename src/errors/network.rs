//! Shared network error types for chain RPC operations.

use alloy_primitives::TxHash;

/// Errors that occur when the chain RPC endpoint cannot answer.
///
/// This covers transport failures (unreachable endpoint, timeouts) and
/// missing fee data. A node that answers with an explicit rejection is a
/// [`ChainRejection`](super::ChainRejection) instead.
///
/// # Examples
///
/// ```rust
/// use slimwallet::NetworkError;
///
/// let error = NetworkError::fee_data_unavailable("baseFeePerGas missing");
/// assert_eq!(error.to_string(), "Fee data unavailable: baseFeePerGas missing");
/// ```
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// An RPC call failed before the node produced a result.
    #[error("RPC request failed during {operation}")]
    RpcFailed {
        /// Description of the operation that failed (e.g. "eth_getBalance")
        operation: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The transaction was broadcast but its receipt could not be obtained.
    ///
    /// The transfer may still be included; it must not be re-sent blindly.
    #[error("Receipt for broadcast transaction {tx_hash} unavailable")]
    ReceiptUnavailable {
        /// Hash of the broadcast transaction
        tx_hash: TxHash,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The node could not provide current fee-per-gas data.
    #[error("Fee data unavailable: {details}")]
    FeeDataUnavailable {
        /// Details about the failure
        details: String,
    },
}

impl NetworkError {
    /// Helper to create an `RpcFailed` error from any error type.
    pub fn rpc_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        NetworkError::RpcFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `ReceiptUnavailable` error for `tx_hash`.
    pub fn receipt_unavailable(
        tx_hash: TxHash,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        NetworkError::ReceiptUnavailable {
            tx_hash,
            source: Box::new(source),
        }
    }

    /// Hash of the broadcast transaction this error concerns, if any.
    pub fn tx_hash(&self) -> Option<TxHash> {
        match self {
            NetworkError::ReceiptUnavailable { tx_hash, .. } => Some(*tx_hash),
            _ => None,
        }
    }

    /// Helper to create a `FeeDataUnavailable` error.
    pub fn fee_data_unavailable(details: impl Into<String>) -> Self {
        NetworkError::FeeDataUnavailable {
            details: details.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_unavailable_keeps_hash() {
        let tx_hash = TxHash::repeat_byte(0x11);
        let error = NetworkError::receipt_unavailable(tx_hash, std::io::Error::other("reset"));

        assert_eq!(error.tx_hash(), Some(tx_hash));
        assert!(error.to_string().contains(&tx_hash.to_string()));
        assert_eq!(NetworkError::fee_data_unavailable("none").tx_hash(), None);
    }
}
