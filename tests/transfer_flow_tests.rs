// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end transfer form flows against mock backends

mod helpers;

use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::U256;
use helpers::{session, MockChainClient, MockPriceFeed, SendBehavior, RECIPIENT, USDC, WALLET};
use slimwallet::{
    FailureKind, FeeEstimator, FeeStatus, FormState, TransferForm, TransferRequest,
    ValidationError,
};

fn estimator() -> FeeEstimator {
    FeeEstimator::new(Arc::new(
        MockPriceFeed::new().with_price("ethereum", "1800.00"),
    ))
}

#[tokio::test]
async fn test_native_transfer_succeeds() {
    let client = Arc::new(MockChainClient::new());
    let session = session(&client);
    let estimator = estimator();
    let mut form = TransferForm::for_session(&session);

    assert_eq!(form.state(), &FormState::Editing);
    form.set_recipient(RECIPIENT).unwrap();
    form.set_amount("0.5").unwrap();
    assert!(form.can_preview());

    let ticket = form.begin_preview().unwrap();
    assert_eq!(
        form.state(),
        &FormState::Previewing {
            fee: FeeStatus::Loading
        }
    );
    let estimate = estimator.estimate(&session, form.draft()).await;
    assert!(form.complete_preview(ticket, estimate));
    assert!(matches!(form.state(), FormState::ReadyToSend { .. }));
    assert!(form.can_submit());

    let pending = form.begin_send(session.address()).unwrap();
    assert_eq!(form.state(), &FormState::Sending);
    assert!(form.is_sending());
    assert!(!form.can_submit());
    assert!(matches!(
        form.begin_send(session.address()),
        Err(ValidationError::NotAllowed { .. })
    ));

    let result = session.client().send_transfer(&pending.request).await;
    assert!(form.complete_send(pending.ticket, result, session.chain()));

    let tx_hash = client.tx_hash();
    assert_eq!(
        form.state(),
        &FormState::Succeeded {
            tx_hash,
            explorer_url: format!("https://etherscan.io/tx/{tx_hash}"),
        }
    );
    assert!(!form.is_sending());
    assert_eq!(
        client.sent(),
        vec![TransferRequest::Native {
            from: WALLET,
            to: RECIPIENT.parse().unwrap(),
            value: U256::from(500_000_000_000_000_000u64),
        }]
    );
}

#[tokio::test]
async fn test_broadcast_failure_allows_retry() {
    let client = Arc::new(MockChainClient::new().with_send(SendBehavior::NetworkDown));
    let session = session(&client);
    let mut form = TransferForm::for_session(&session);
    form.set_recipient(RECIPIENT).unwrap();
    form.set_amount("0.5").unwrap();

    assert!(form.preview(&estimator(), &session).await.unwrap());
    assert!(form.send(&session).await.unwrap());

    match form.state() {
        FormState::Failed { kind, reason, .. } => {
            assert_eq!(*kind, FailureKind::Network);
            assert!(reason.contains("eth_sendRawTransaction"));
        }
        other => panic!("unexpected state {other:?}"),
    }
    assert!(!form.is_sending());
    assert!(form.can_submit());

    // Retrying re-enters Sending and records a second broadcast
    assert!(form.send(&session).await.unwrap());
    assert_eq!(client.sent().len(), 2);
}

#[tokio::test]
async fn test_rejected_broadcast_and_reverted_receipt() {
    let rejected = Arc::new(MockChainClient::new().with_send(SendBehavior::BroadcastRejected));
    let session_rejected = session(&rejected);
    let mut form = TransferForm::for_session(&session_rejected);
    form.set_recipient(RECIPIENT).unwrap();
    form.set_amount("0.5").unwrap();
    form.preview(&estimator(), &session_rejected).await.unwrap();
    form.send(&session_rejected).await.unwrap();
    assert!(matches!(
        form.state(),
        FormState::Failed { kind: FailureKind::Rejected, .. }
    ));

    let reverted = Arc::new(MockChainClient::new().with_send(SendBehavior::Reverted));
    let session_reverted = session(&reverted);
    let mut form = TransferForm::for_session(&session_reverted);
    form.set_recipient(RECIPIENT).unwrap();
    form.set_amount("0.5").unwrap();
    form.preview(&estimator(), &session_reverted).await.unwrap();
    form.send(&session_reverted).await.unwrap();
    match form.state() {
        FormState::Failed { kind, reason, .. } => {
            assert_eq!(*kind, FailureKind::Rejected);
            assert!(reason.contains(&reverted.tx_hash().to_string()));
        }
        other => panic!("unexpected state {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_ticker_keeps_submission_disabled() {
    let client = Arc::new(MockChainClient::new());
    let session = session(&client);
    let mut form = TransferForm::for_session(&session);
    form.set_recipient(RECIPIENT).unwrap();
    form.set_amount("10").unwrap();

    assert!(!form.select_asset("usdc").unwrap());
    assert!(!form.can_preview());
    assert!(!form.can_submit());
    assert!(matches!(
        form.preview(&estimator(), &session).await,
        Err(ValidationError::UnresolvedAsset { .. })
    ));
    assert!(client.estimated().is_empty());
}

#[tokio::test]
async fn test_token_transfer_with_grouped_amount() {
    let client = Arc::new(MockChainClient::new().with_gas_units(52_000));
    let session = session(&client);
    let mut form = TransferForm::for_session(&session);
    form.set_recipient(RECIPIENT).unwrap();
    form.set_amount(" 1,250.75 ").unwrap();
    assert!(form.select_asset("USDC").unwrap());

    form.preview(&estimator(), &session).await.unwrap();
    form.send(&session).await.unwrap();

    assert!(matches!(form.state(), FormState::Succeeded { .. }));
    assert_eq!(
        client.sent(),
        vec![TransferRequest::Token {
            token: USDC,
            from: WALLET,
            to: RECIPIENT.parse().unwrap(),
            amount: U256::from(1_250_750_000u64),
        }]
    );
}

#[tokio::test]
async fn test_failed_preview_shows_reason_until_closed() {
    let client = Arc::new(MockChainClient::new().with_gas_revert("execution reverted"));
    let session = session(&client);
    let mut form = TransferForm::for_session(&session);
    form.set_recipient(RECIPIENT).unwrap();
    form.set_amount("0.5").unwrap();

    assert!(form.preview(&estimator(), &session).await.unwrap());
    assert!(matches!(
        form.state(),
        FormState::Previewing {
            fee: FeeStatus::Failed {
                kind: FailureKind::Rejected,
                ..
            }
        }
    ));
    assert!(!form.can_submit());

    form.cancel().unwrap();
    form.set_amount("0.1").unwrap();
    assert!(form.can_preview());
}

#[tokio::test]
async fn test_late_estimate_after_close_is_ignored() {
    let client = Arc::new(MockChainClient::new());
    let session = session(&client);
    let estimator = estimator();
    let mut form = TransferForm::for_session(&session);
    form.set_recipient(RECIPIENT).unwrap();
    form.set_amount("0.5").unwrap();

    let ticket = form.begin_preview().unwrap();
    let draft = form.draft().clone();
    form.cancel().unwrap();

    let late = estimator.estimate(&session, &draft).await;
    assert!(late.is_ok());
    assert!(!form.complete_preview(ticket, late));
    assert_eq!(form.state(), &FormState::Editing);
}

#[tokio::test]
async fn test_dropped_submission_after_broadcast_is_not_resent() {
    let client = Arc::new(MockChainClient::new().with_send(SendBehavior::Hang));
    let session = session(&client);
    let mut form = TransferForm::for_session(&session);
    form.set_recipient(RECIPIENT).unwrap();
    form.set_amount("0.5").unwrap();
    form.preview(&estimator(), &session).await.unwrap();

    let timed_out = tokio::time::timeout(Duration::from_millis(20), form.send(&session)).await;
    assert!(timed_out.is_err());

    assert!(!form.is_sending());
    assert!(matches!(
        form.state(),
        FormState::Failed {
            kind: FailureKind::Unconfirmed,
            tx_hash: Some(_),
            ..
        }
    ));
    assert!(!form.can_submit());
    assert!(matches!(
        form.send(&session).await,
        Err(ValidationError::NotAllowed { .. })
    ));
    assert_eq!(client.sent().len(), 1);
}

#[tokio::test]
async fn test_lost_receipt_is_rechecked_without_resending() {
    let client = Arc::new(MockChainClient::new().with_send(SendBehavior::ReceiptLost));
    let session = session(&client);
    let mut form = TransferForm::for_session(&session);
    form.set_recipient(RECIPIENT).unwrap();
    form.set_amount("0.5").unwrap();
    form.preview(&estimator(), &session).await.unwrap();

    assert!(form.send(&session).await.unwrap());
    match form.state() {
        FormState::Failed { kind, tx_hash, .. } => {
            assert_eq!(*kind, FailureKind::Unconfirmed);
            assert_eq!(*tx_hash, Some(client.tx_hash()));
        }
        other => panic!("unexpected state {other:?}"),
    }
    assert!(!form.can_submit());
    assert!(form.can_recheck());

    // Still unavailable: the form stays unconfirmed
    assert!(form.recheck(&session).await.unwrap());
    assert!(form.can_recheck());

    client.restore_receipts();
    assert!(form.recheck(&session).await.unwrap());
    let tx_hash = client.tx_hash();
    assert_eq!(
        form.state(),
        &FormState::Succeeded {
            tx_hash,
            explorer_url: format!("https://etherscan.io/tx/{tx_hash}"),
        }
    );
    assert_eq!(client.sent().len(), 1);
}

#[tokio::test]
async fn test_unconfirmed_transfer_can_be_abandoned_explicitly() {
    let client = Arc::new(MockChainClient::new().with_send(SendBehavior::ReceiptLost));
    let session = session(&client);
    let mut form = TransferForm::for_session(&session);
    form.set_recipient(RECIPIENT).unwrap();
    form.set_amount("0.5").unwrap();
    form.preview(&estimator(), &session).await.unwrap();
    form.send(&session).await.unwrap();

    form.reset().unwrap();
    assert_eq!(form.state(), &FormState::Editing);
    assert!(!form.can_recheck());
    assert!(!form.can_preview());
}

#[tokio::test]
async fn test_decimal_comma_is_rejected_not_rescaled() {
    let client = Arc::new(MockChainClient::new());
    let session = session(&client);
    let mut form = TransferForm::for_session(&session);
    form.set_recipient(RECIPIENT).unwrap();

    for typed in ["0,5", "1,00", "1,2,3"] {
        form.set_amount(typed).unwrap();
        assert_eq!(form.draft().amount(), typed);

        assert!(form.preview(&estimator(), &session).await.unwrap());
        assert!(matches!(
            form.state(),
            FormState::Previewing {
                fee: FeeStatus::Failed {
                    kind: FailureKind::Invalid,
                    ..
                }
            }
        ));
        assert!(!form.can_submit());
        form.cancel().unwrap();
    }

    assert!(client.estimated().is_empty());
    assert!(client.sent().is_empty());
}
