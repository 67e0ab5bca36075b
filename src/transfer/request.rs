// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain-ready transfer requests built from drafts

use std::str::FromStr;

use alloy_primitives::{Address, U256};

use crate::errors::ValidationError;
use crate::units::parse_display_amount;

use super::draft::{AssetSelection, TransferDraft};

/// A validated transfer, ready for gas estimation or broadcast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferRequest {
    /// Value transfer of the chain's native currency
    Native {
        /// Sender
        from: Address,
        /// Recipient
        to: Address,
        /// Amount in wei
        value: U256,
    },
    /// ERC-20 `transfer(to, amount)` call on `token`
    Token {
        /// Token contract
        token: Address,
        /// Sender
        from: Address,
        /// Recipient
        to: Address,
        /// Amount in the token's smallest unit
        amount: U256,
    },
}

impl TransferRequest {
    /// Build a request from `draft`, sent by `from`.
    ///
    /// The asset's address decides the variant: no address is a native
    /// transfer, an address is an ERC-20 call on that contract.
    ///
    /// # Errors
    ///
    /// Any [`ValidationError`] describing why the draft cannot be sent.
    pub fn from_draft(from: Address, draft: &TransferDraft) -> Result<Self, ValidationError> {
        let asset = match draft.asset() {
            AssetSelection::Resolved(asset) => asset,
            AssetSelection::Unresolved { ticker } => {
                return Err(ValidationError::UnresolvedAsset {
                    ticker: ticker.clone(),
                })
            }
        };
        let to = parse_recipient(draft.to())?;
        let amount = parse_display_amount(draft.amount(), asset.decimals)?;

        Ok(match asset.address {
            None => TransferRequest::Native {
                from,
                to,
                value: amount,
            },
            Some(token) => TransferRequest::Token {
                token,
                from,
                to,
                amount,
            },
        })
    }

    /// Sender of the transfer
    pub fn from(&self) -> Address {
        match self {
            TransferRequest::Native { from, .. } | TransferRequest::Token { from, .. } => *from,
        }
    }

    /// Recipient of the transferred value (not the token contract)
    pub fn recipient(&self) -> Address {
        match self {
            TransferRequest::Native { to, .. } | TransferRequest::Token { to, .. } => *to,
        }
    }

    /// Transferred amount in smallest units
    pub fn amount(&self) -> U256 {
        match self {
            TransferRequest::Native { value, .. } => *value,
            TransferRequest::Token { amount, .. } => *amount,
        }
    }
}

/// Parse a recipient exactly as typed.
pub fn parse_recipient(value: &str) -> Result<Address, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyRecipient);
    }
    Address::from_str(value).map_err(|e| ValidationError::invalid_recipient(value, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Asset;
    use alloy_primitives::address;

    fn asset(ticker: &str, decimals: u8, address: Option<Address>) -> Asset {
        Asset {
            id: ticker.to_lowercase(),
            chain_id: "ethereum".into(),
            ticker: ticker.into(),
            name: ticker.into(),
            decimals,
            address,
            coingecko_id: ticker.to_lowercase(),
            balance: None,
        }
    }

    const RECIPIENT: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

    #[test]
    fn test_native_request() {
        let mut draft = TransferDraft::new(AssetSelection::Resolved(asset("ETH", 18, None)));
        draft.set_to(RECIPIENT);
        draft.set_amount("0.5");

        let from = Address::repeat_byte(0x01);
        let request = TransferRequest::from_draft(from, &draft).unwrap();

        assert_eq!(
            request,
            TransferRequest::Native {
                from,
                to: address!("70997970c51812dc3a010c7d01b50e0d17dc79c8"),
                value: U256::from(500_000_000_000_000_000u64),
            }
        );
    }

    #[test]
    fn test_token_request_uses_token_decimals() {
        let usdc = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
        let mut draft = TransferDraft::new(AssetSelection::Resolved(asset("USDC", 6, Some(usdc))));
        draft.set_to(RECIPIENT);
        draft.set_amount("1,250.5");

        let request = TransferRequest::from_draft(Address::ZERO, &draft).unwrap();

        assert!(matches!(request, TransferRequest::Token { token, .. } if token == usdc));
        assert_eq!(request.amount(), U256::from(1_250_500_000u64));
        assert_eq!(request.recipient().to_string(), RECIPIENT);
    }

    #[test]
    fn test_unresolved_asset() {
        let mut draft = TransferDraft::new(AssetSelection::Unresolved {
            ticker: "DOGE".into(),
        });
        draft.set_to(RECIPIENT);
        draft.set_amount("1");

        assert_eq!(
            TransferRequest::from_draft(Address::ZERO, &draft),
            Err(ValidationError::UnresolvedAsset {
                ticker: "DOGE".into()
            })
        );
    }

    #[test]
    fn test_recipient_is_not_reformatted() {
        assert_eq!(parse_recipient(""), Err(ValidationError::EmptyRecipient));
        assert!(matches!(
            parse_recipient(" 0x70997970C51812dc3A010C7d01b50e0d17dc79C8"),
            Err(ValidationError::InvalidRecipient { .. })
        ));
        assert!(matches!(
            parse_recipient("0x1234"),
            Err(ValidationError::InvalidRecipient { .. })
        ));
    }
}
