//! Transfer drafting, preview and submission
//!
//! - [`TransferDraft`] holds what the user typed
//! - [`TransferRequest`] is the validated, chain-ready form of a draft
//! - [`TransferForm`] drives a draft through preview and submission
//!
//! # Example
//!
//! ```rust,ignore
//! use slimwallet::{FeeEstimator, FormState, TransferForm};
//!
//! let mut form = TransferForm::for_session(&session);
//! form.set_recipient("0x70997970C51812dc3A010C7d01b50e0d17dc79C8")?;
//! form.set_amount("0.5")?;
//!
//! form.preview(&estimator, &session).await?;
//! if form.can_submit() {
//!     form.send(&session).await?;
//! }
//! if let FormState::Succeeded { explorer_url, .. } = form.state() {
//!     println!("Sent: {explorer_url}");
//! }
//! ```

mod draft;
mod form;
mod request;

pub use draft::{normalize_amount, AssetSelection, TransferDraft};
pub use form::{FeeStatus, FormState, PendingSend, PreviewTicket, SendTicket, TransferForm};
pub use request::{parse_recipient, TransferRequest};
