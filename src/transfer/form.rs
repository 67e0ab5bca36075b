// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer form state machine
//!
//! ```text
//! Editing -> Previewing -> ReadyToSend -> Sending -> Succeeded
//!    ^           |               |           |
//!    +-- cancel -+---------------+           +----> Failed -> (retry) Sending
//! ```
//!
//! A failure before the transaction left the wallet can be retried. Once a
//! broadcast is known, a failed or interrupted receipt wait lands in
//! `Failed { kind: Unconfirmed }` with the hash kept: only [`TransferForm::recheck`]
//! (which waits for that same receipt) or `cancel`/`reset` leave it, so the
//! transfer is never signed twice by accident.
//!
//! Asynchronous work is split into a `begin_*` step that moves the form into
//! its waiting state and hands out a ticket, and a `complete_*` step that
//! applies the result only if the ticket is still current. Cancelling or
//! resetting the form invalidates outstanding tickets, so a late result never
//! reopens a closed preview.

use alloy_primitives::{Address, TxHash};
use tracing::{debug, info, warn, Instrument};

use crate::chain::TransferReceipt;
use crate::config::{Asset, Chain};
use crate::errors::{ChainRejection, FailureKind, TransferError, ValidationError};
use crate::fees::{FeeEstimate, FeeEstimator};
use crate::session::WalletSession;
use crate::spans;

use super::draft::{AssetSelection, TransferDraft};
use super::request::TransferRequest;

const INTERRUPTED: &str = "submission interrupted before a receipt was received";
const INTERRUPTED_BEFORE_BROADCAST: &str =
    "submission interrupted before the broadcast was confirmed by the node";

/// Progress of a fee preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeeStatus {
    /// The estimate is being fetched
    Loading,
    /// The estimate failed; the preview stays open showing the failure
    Failed {
        /// Failure class
        kind: FailureKind,
        /// Display message
        message: String,
    },
}

/// State of a [`TransferForm`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    /// Fields are editable
    Editing,
    /// A fee preview is open
    Previewing {
        /// Estimate progress
        fee: FeeStatus,
    },
    /// The fee is known and the transfer can be submitted
    ReadyToSend {
        /// The previewed fee
        estimate: FeeEstimate,
    },
    /// The transfer is being broadcast
    Sending,
    /// The transfer was included and succeeded
    Succeeded {
        /// Transaction hash
        tx_hash: TxHash,
        /// Explorer link for the transaction
        explorer_url: String,
    },
    /// Submission failed. It can be retried unless `kind` is
    /// [`FailureKind::Unconfirmed`].
    Failed {
        /// Failure class
        kind: FailureKind,
        /// Display message
        reason: String,
        /// Hash of the broadcast transaction, when one is known
        tx_hash: Option<TxHash>,
    },
}

impl FormState {
    /// Short state name for logs and messages
    pub fn name(&self) -> &'static str {
        match self {
            FormState::Editing => "editing",
            FormState::Previewing { .. } => "previewing",
            FormState::ReadyToSend { .. } => "ready to send",
            FormState::Sending => "sending",
            FormState::Succeeded { .. } => "succeeded",
            FormState::Failed { .. } => "failed",
        }
    }
}

/// Handle for an outstanding fee preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewTicket {
    generation: u64,
}

/// Handle for an outstanding submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendTicket {
    generation: u64,
}

/// A submission that has been started and must be completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingSend {
    /// Ticket to pass back to [`TransferForm::complete_send`]
    pub ticket: SendTicket,
    /// The request to broadcast
    pub request: TransferRequest,
}

/// A single transfer being edited, previewed and submitted
#[derive(Debug, Clone)]
pub struct TransferForm {
    draft: TransferDraft,
    native_asset: Asset,
    token_assets: Vec<Asset>,
    state: FormState,
    generation: u64,
    broadcast: Option<TxHash>,
}

impl TransferForm {
    /// A blank form transferring `native_asset` by default.
    pub fn new(native_asset: Asset, token_assets: Vec<Asset>) -> Self {
        Self {
            draft: TransferDraft::new(AssetSelection::Resolved(native_asset.clone())),
            native_asset,
            token_assets,
            state: FormState::Editing,
            generation: 0,
            broadcast: None,
        }
    }

    /// A blank form over the session's assets.
    pub fn for_session(session: &WalletSession) -> Self {
        Self::new(
            session.native_asset().clone(),
            session.token_assets().to_vec(),
        )
    }

    /// Current draft
    pub fn draft(&self) -> &TransferDraft {
        &self.draft
    }

    /// Current state
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Whether a submission is in flight
    pub fn is_sending(&self) -> bool {
        matches!(self.state, FormState::Sending)
    }

    /// Set the recipient. Only allowed while editing.
    pub fn set_recipient(&mut self, to: impl Into<String>) -> Result<(), ValidationError> {
        self.ensure_editing("edit the recipient")?;
        self.draft.set_to(to);
        Ok(())
    }

    /// Set the amount, normalizing grouping separators. Only allowed while editing.
    pub fn set_amount(&mut self, amount: &str) -> Result<(), ValidationError> {
        self.ensure_editing("edit the amount")?;
        self.draft.set_amount(amount);
        Ok(())
    }

    /// Select the asset by exact ticker among the native asset and tokens.
    ///
    /// Returns whether the ticker resolved. An unknown ticker is kept as an
    /// unresolved selection, which keeps preview and submission disabled.
    pub fn select_asset(&mut self, ticker: &str) -> Result<bool, ValidationError> {
        self.ensure_editing("select an asset")?;
        let selection = AssetSelection::resolve(
            ticker,
            std::iter::once(&self.native_asset).chain(self.token_assets.iter()),
        );
        let resolved = selection.asset().is_some();
        if !resolved {
            debug!(ticker, "Ticker matches no configured asset");
        }
        self.draft.set_asset(selection);
        Ok(resolved)
    }

    /// Whether a preview can be opened
    pub fn can_preview(&self) -> bool {
        matches!(self.state, FormState::Editing) && self.draft.is_complete()
    }

    /// Whether the transfer can be submitted (or retried)
    pub fn can_submit(&self) -> bool {
        match &self.state {
            FormState::ReadyToSend { .. } => true,
            FormState::Failed { kind, .. } => kind.allows_resend(),
            _ => false,
        }
    }

    /// Whether the receipt of an unconfirmed broadcast can be queried again
    pub fn can_recheck(&self) -> bool {
        matches!(
            self.state,
            FormState::Failed {
                kind: FailureKind::Unconfirmed,
                tx_hash: Some(_),
                ..
            }
        )
    }

    /// Open a fee preview.
    pub fn begin_preview(&mut self) -> Result<PreviewTicket, ValidationError> {
        self.ensure_editing("preview")?;
        if let AssetSelection::Unresolved { ticker } = self.draft.asset() {
            return Err(ValidationError::UnresolvedAsset {
                ticker: ticker.clone(),
            });
        }
        if self.draft.to().trim().is_empty() {
            return Err(ValidationError::EmptyRecipient);
        }
        if self.draft.amount().is_empty() {
            return Err(ValidationError::EmptyAmount);
        }

        let generation = self.advance();
        self.transition(FormState::Previewing {
            fee: FeeStatus::Loading,
        });
        Ok(PreviewTicket { generation })
    }

    /// Apply a fee estimate. Returns `false` (and changes nothing) if the
    /// preview was closed or superseded since `ticket` was issued.
    pub fn complete_preview(
        &mut self,
        ticket: PreviewTicket,
        result: Result<FeeEstimate, TransferError>,
    ) -> bool {
        if ticket.generation != self.generation
            || !matches!(self.state, FormState::Previewing { .. })
        {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                state = self.state.name(),
                "Discarding stale fee estimate"
            );
            return false;
        }

        let next = match result {
            Ok(estimate) => FormState::ReadyToSend { estimate },
            Err(e) => FormState::Previewing {
                fee: FeeStatus::Failed {
                    kind: e.kind(),
                    message: e.to_string(),
                },
            },
        };
        self.transition(next);
        true
    }

    /// Open a preview and wait for its estimate.
    ///
    /// Returns whether the estimate was applied.
    pub async fn preview(
        &mut self,
        estimator: &FeeEstimator,
        session: &WalletSession,
    ) -> Result<bool, ValidationError> {
        let ticket = self.begin_preview()?;
        let result = estimator.estimate(session, &self.draft).await;
        Ok(self.complete_preview(ticket, result))
    }

    /// Start submitting the transfer from `from`.
    pub fn begin_send(&mut self, from: Address) -> Result<PendingSend, ValidationError> {
        if !self.can_submit() {
            return Err(ValidationError::NotAllowed {
                action: "submit",
                state: self.state.name(),
            });
        }
        let request = TransferRequest::from_draft(from, &self.draft)?;

        let generation = self.advance();
        self.broadcast = None;
        self.transition(FormState::Sending);
        Ok(PendingSend {
            ticket: SendTicket { generation },
            request,
        })
    }

    /// Note that the node accepted the transaction `tx_hash` for `ticket`.
    ///
    /// From here on a failed or interrupted submission is unconfirmed rather
    /// than retryable. Returns `false` if `ticket` is stale.
    pub fn record_broadcast(&mut self, ticket: SendTicket, tx_hash: TxHash) -> bool {
        if ticket.generation != self.generation || !self.is_sending() {
            return false;
        }
        debug!(%tx_hash, "Broadcast recorded");
        self.broadcast = Some(tx_hash);
        true
    }

    /// Start waiting again for the receipt of an unconfirmed broadcast.
    pub fn begin_recheck(&mut self) -> Result<(SendTicket, TxHash), ValidationError> {
        let tx_hash = match self.state {
            FormState::Failed {
                kind: FailureKind::Unconfirmed,
                tx_hash: Some(tx_hash),
                ..
            } => tx_hash,
            _ => {
                return Err(ValidationError::NotAllowed {
                    action: "recheck the receipt",
                    state: self.state.name(),
                })
            }
        };

        let generation = self.advance();
        self.broadcast = Some(tx_hash);
        self.transition(FormState::Sending);
        Ok((SendTicket { generation }, tx_hash))
    }

    /// Apply a submission result. Returns `false` if `ticket` is stale.
    pub fn complete_send(
        &mut self,
        ticket: SendTicket,
        result: Result<TransferReceipt, TransferError>,
        chain: &Chain,
    ) -> bool {
        if ticket.generation != self.generation || !self.is_sending() {
            debug!(
                ticket = ticket.generation,
                current = self.generation,
                "Discarding stale submission result"
            );
            return false;
        }

        let next = match result {
            Ok(receipt) if receipt.success => {
                let explorer_url = chain.transaction_url(&receipt.tx_hash);
                info!(tx_hash = %receipt.tx_hash, %explorer_url, "Transfer succeeded");
                FormState::Succeeded {
                    tx_hash: receipt.tx_hash,
                    explorer_url,
                }
            }
            Ok(receipt) => {
                let rejection = ChainRejection::TransactionReverted {
                    tx_hash: receipt.tx_hash,
                };
                warn!(tx_hash = %receipt.tx_hash, "Transfer reverted on chain");
                FormState::Failed {
                    kind: FailureKind::Rejected,
                    reason: rejection.to_string(),
                    tx_hash: Some(receipt.tx_hash),
                }
            }
            Err(e) => {
                let tx_hash = e.tx_hash().or(self.broadcast);
                let kind = match tx_hash {
                    Some(_) => FailureKind::Unconfirmed,
                    None => e.kind(),
                };
                warn!(error = %e, kind = kind.label(), ?tx_hash, "Transfer failed");
                FormState::Failed {
                    kind,
                    reason: e.to_string(),
                    tx_hash,
                }
            }
        };
        self.transition(next);
        true
    }

    /// Submit the transfer and wait for its receipt.
    ///
    /// The form leaves `Sending` on every exit path: if this future is
    /// dropped before completion the form moves to `Failed`.
    pub async fn send(&mut self, session: &WalletSession) -> Result<bool, ValidationError> {
        let PendingSend { ticket, request } = self.begin_send(session.address())?;
        let span = spans::send_transfer(
            request.from(),
            request.recipient(),
            self.draft.asset().ticker(),
        );

        let mut guard = SendingGuard {
            form: Some(self),
            ticket,
        };
        let client = session.client();
        let result = async {
            let tx_hash = client.broadcast_transfer(&request).await?;
            guard.record_broadcast(tx_hash);
            client.wait_for_receipt(tx_hash).await
        }
        .instrument(span)
        .await;
        Ok(guard.finish(result, session.chain()))
    }

    /// Wait again for the receipt of an unconfirmed broadcast.
    ///
    /// Nothing is signed or broadcast. Like [`send`](Self::send), a dropped
    /// future leaves the form in `Failed { kind: Unconfirmed }`.
    pub async fn recheck(&mut self, session: &WalletSession) -> Result<bool, ValidationError> {
        let (ticket, tx_hash) = self.begin_recheck()?;
        info!(%tx_hash, "Rechecking receipt");

        let guard = SendingGuard {
            form: Some(self),
            ticket,
        };
        let result = session.client().wait_for_receipt(tx_hash).await;
        Ok(guard.finish(result, session.chain()))
    }

    /// Close any preview or failure and return to editing.
    pub fn cancel(&mut self) -> Result<(), ValidationError> {
        self.ensure_not_sending("cancel")?;
        self.advance();
        self.broadcast = None;
        self.transition(FormState::Editing);
        Ok(())
    }

    /// Clear recipient and amount and return to editing, keeping the asset.
    pub fn reset(&mut self) -> Result<(), ValidationError> {
        self.ensure_not_sending("reset")?;
        self.draft = TransferDraft::new(self.draft.asset().clone());
        self.advance();
        self.broadcast = None;
        self.transition(FormState::Editing);
        Ok(())
    }

    /// The outcome of an interrupted submission is unknown whether or not the
    /// broadcast was seen: the node may have accepted it before the drop.
    fn abandon_send(&mut self, ticket: SendTicket) {
        if ticket.generation == self.generation && self.is_sending() {
            let reason = match self.broadcast {
                Some(_) => INTERRUPTED,
                None => INTERRUPTED_BEFORE_BROADCAST,
            };
            warn!(tx_hash = ?self.broadcast, "{reason}");
            self.transition(FormState::Failed {
                kind: FailureKind::Unconfirmed,
                reason: reason.to_string(),
                tx_hash: self.broadcast,
            });
        }
    }

    fn ensure_editing(&self, action: &'static str) -> Result<(), ValidationError> {
        match self.state {
            FormState::Editing => Ok(()),
            _ => Err(ValidationError::NotAllowed {
                action,
                state: self.state.name(),
            }),
        }
    }

    fn ensure_not_sending(&self, action: &'static str) -> Result<(), ValidationError> {
        if self.is_sending() {
            return Err(ValidationError::NotAllowed {
                action,
                state: self.state.name(),
            });
        }
        Ok(())
    }

    fn advance(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn transition(&mut self, next: FormState) {
        debug!(from = self.state.name(), to = next.name(), "Transfer form transition");
        self.state = next;
    }
}

/// Releases `Sending` if the submission future is dropped early
struct SendingGuard<'a> {
    form: Option<&'a mut TransferForm>,
    ticket: SendTicket,
}

impl SendingGuard<'_> {
    fn record_broadcast(&mut self, tx_hash: TxHash) {
        if let Some(form) = self.form.as_deref_mut() {
            form.record_broadcast(self.ticket, tx_hash);
        }
    }

    fn finish(mut self, result: Result<TransferReceipt, TransferError>, chain: &Chain) -> bool {
        match self.form.take() {
            Some(form) => form.complete_send(self.ticket, result, chain),
            None => false,
        }
    }
}

impl Drop for SendingGuard<'_> {
    fn drop(&mut self) {
        if let Some(form) = self.form.take() {
            form.abandon_send(self.ticket);
        }
    }
}
