//! USD spot prices for native assets
//!
//! The fee preview converts the native-currency cost of a transfer into USD
//! using a spot price. Prices come from any [`PriceFeed`] implementation;
//! [`CoinGeckoPriceFeed`] is the production one.
//!
//! # Architecture
//!
//! 1. The fee estimator asks the feed for the price of the chain's native asset,
//!    keyed by the asset's `coingecko_id`
//! 2. The feed returns the quote as an exact [`BigDecimal`]
//! 3. The estimator scales it to an integer (see [`scale_price`](crate::fees::scale_price))
//!
//! # Example: Implementing PriceFeed with fixed quotes
//!
//! ```rust
//! use async_trait::async_trait;
//! use bigdecimal::BigDecimal;
//! use slimwallet::{PriceError, PriceFeed};
//!
//! struct FixedPrice(BigDecimal);
//!
//! #[async_trait]
//! impl PriceFeed for FixedPrice {
//!     async fn usd_price(&self, _price_id: &str) -> Result<BigDecimal, PriceError> {
//!         Ok(self.0.clone())
//!     }
//! }
//! ```

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::errors::PriceError;

mod coingecko;

pub use coingecko::{parse_usd_quote, CoinGeckoPriceFeed};

/// Source of spot USD prices
///
/// The trait is object-safe so the fee estimator can hold an `Arc<dyn PriceFeed>`.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    /// Spot USD price of one whole unit of the asset identified by `price_id`
    async fn usd_price(&self, price_id: &str) -> Result<BigDecimal, PriceError>;
}
