//! Transfer fee estimation
//!
//! [`FeeEstimator`] turns a transfer draft into a [`FeeEstimate`] holding the
//! gas units, the fee per gas, and the resulting cost in wei and in USD. The
//! arithmetic lives in [`core`] and uses arbitrary-precision integers only.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use slimwallet::{CoinGeckoPriceFeed, FeeEstimator};
//!
//! let estimator = FeeEstimator::new(Arc::new(CoinGeckoPriceFeed::new(url, key)?));
//! let estimate = estimator.estimate(&session, form.draft()).await?;
//! println!("Fee: {}", estimate.summary(session.native_asset()));
//! ```

pub mod core;
mod estimator;

pub use self::core::{compute_fee, scale_price, FeeEstimate};
pub use estimator::FeeEstimator;
