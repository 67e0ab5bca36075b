//! Errors returned by fee estimation and transfer submission.

use alloy_primitives::TxHash;

use super::{ChainRejection, NetworkError, PriceError, ValidationError};

/// Coarse classification of a [`TransferError`] for display.
///
/// Each class is a distinct user-visible state. Only `Unconfirmed` forbids a
/// retry: the transfer left the wallet and its outcome is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The draft cannot be turned into a request.
    Invalid,
    /// The chain refused the request.
    Rejected,
    /// The RPC endpoint failed.
    Network,
    /// The USD price could not be obtained.
    PriceUnavailable,
    /// The transfer may have been broadcast but no receipt was obtained.
    Unconfirmed,
}

impl FailureKind {
    /// Short label for the failure class.
    pub fn label(&self) -> &'static str {
        match self {
            FailureKind::Invalid => "invalid input",
            FailureKind::Rejected => "rejected by chain",
            FailureKind::Network => "network unavailable",
            FailureKind::PriceUnavailable => "price unavailable",
            FailureKind::Unconfirmed => "outcome unknown",
        }
    }

    /// Whether a transfer that failed this way may be submitted again.
    pub fn allows_resend(&self) -> bool {
        !matches!(self, FailureKind::Unconfirmed)
    }
}

/// Failure of a fee estimate or a transfer submission.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// The draft is invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The chain refused the request.
    #[error(transparent)]
    Rejected(#[from] ChainRejection),

    /// The RPC endpoint failed.
    #[error(transparent)]
    Network(#[from] NetworkError),

    /// The USD price lookup failed.
    #[error(transparent)]
    Price(#[from] PriceError),
}

impl TransferError {
    /// Classify this error for display.
    pub fn kind(&self) -> FailureKind {
        match self {
            TransferError::Validation(_) => FailureKind::Invalid,
            TransferError::Rejected(_) => FailureKind::Rejected,
            TransferError::Network(NetworkError::ReceiptUnavailable { .. }) => {
                FailureKind::Unconfirmed
            }
            TransferError::Network(_) => FailureKind::Network,
            TransferError::Price(_) => FailureKind::PriceUnavailable,
        }
    }

    /// Hash of an already broadcast transaction this error concerns.
    pub fn tx_hash(&self) -> Option<TxHash> {
        match self {
            TransferError::Network(e) => e.tx_hash(),
            _ => None,
        }
    }
}
