//! Errors for transfer input that cannot be submitted.

/// Invalid or incomplete transfer input.
///
/// The transfer form prevents these proactively (`can_preview` and
/// `can_submit` stay false), so callers normally only see them when they
/// bypass those checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The selected ticker matches no configured asset.
    #[error("No configured asset matches ticker '{ticker}'")]
    UnresolvedAsset {
        /// The typed ticker
        ticker: String,
    },

    /// The recipient field is empty.
    #[error("Recipient address is empty")]
    EmptyRecipient,

    /// The recipient is not an address.
    #[error("Invalid recipient address '{value}': {details}")]
    InvalidRecipient {
        /// The typed recipient
        value: String,
        /// Parser message
        details: String,
    },

    /// The amount field is empty.
    #[error("Amount is empty")]
    EmptyAmount,

    /// The amount is not a non-negative decimal within the asset's precision.
    #[error("Invalid amount '{value}': {details}")]
    InvalidAmount {
        /// The typed amount
        value: String,
        /// Why it was rejected
        details: String,
    },

    /// The form is in a state where the action is disabled.
    #[error("Cannot {action} while the form is {state}")]
    NotAllowed {
        /// Attempted action
        action: &'static str,
        /// Current form state name
        state: &'static str,
    },
}

impl ValidationError {
    /// Create an `InvalidAmount` error.
    pub fn invalid_amount(value: impl Into<String>, details: impl std::fmt::Display) -> Self {
        ValidationError::InvalidAmount {
            value: value.into(),
            details: details.to_string(),
        }
    }

    /// Create an `InvalidRecipient` error.
    pub fn invalid_recipient(value: impl Into<String>, details: impl std::fmt::Display) -> Self {
        ValidationError::InvalidRecipient {
            value: value.into(),
            details: details.to_string(),
        }
    }
}
