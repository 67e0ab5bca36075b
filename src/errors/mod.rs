//! Error types for the slimwallet library.
//!
//! This module provides strongly-typed errors for all public APIs in slimwallet.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`ConfigError`],
//!   [`NetworkError`], [`ChainRejection`], [`ValidationError`], [`PriceError`])
//! - **Operation errors** ([`TransferError`]) returned by fee estimation and
//!   submission, which wrap the module errors and classify them for display
//!
//! # Failure policy
//!
//! Nothing in this crate treats a failure as fatal. Balance and fee lookups
//! degrade to a visible "unavailable" state for the affected value, and a
//! failed submission moves the transfer form to its `Failed` state. The user
//! can retry from there unless the transaction was already broadcast, in which
//! case only its receipt is queried again.
//!
//! # Example
//!
//! ```rust,ignore
//! use slimwallet::{FailureKind, TransferError};
//!
//! match estimator.estimate(&session, form.draft()).await {
//!     Ok(estimate) => println!("{}", estimate.summary(session.native_asset())),
//!     Err(e) if e.kind() == FailureKind::PriceUnavailable => {
//!         eprintln!("USD price unavailable: {e}");
//!     }
//!     Err(e) => eprintln!("Fee estimate failed: {e}"),
//! }
//! ```

mod chain;
mod config;
mod network;
mod price;
mod transfer;
mod validation;

pub use chain::ChainRejection;
pub use config::ConfigError;
pub use network::NetworkError;
pub use price::PriceError;
pub use transfer::{FailureKind, TransferError};
pub use validation::ValidationError;
