// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! CoinGecko `simple/price` client

use std::str::FromStr;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, warn, Instrument};

use crate::config::constants::PRICE_REQUEST_TIMEOUT;
use crate::errors::{ConfigError, PriceError};
use crate::spans;

use super::PriceFeed;

/// Price feed backed by the CoinGecko REST API
///
/// Issues `GET {base}/simple/price?ids=<id>&vs_currencies=usd` with the API
/// key passed as `x_cg_pro_api_key`.
#[derive(Clone)]
pub struct CoinGeckoPriceFeed {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl std::fmt::Debug for CoinGeckoPriceFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoPriceFeed")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl CoinGeckoPriceFeed {
    /// Create a feed with its own HTTP client.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let client = reqwest::Client::builder()
            .timeout(PRICE_REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ConfigError::PriceClient {
                details: e.to_string(),
            })?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    /// Create a feed sharing an existing HTTP client.
    pub fn with_client(
        client: reqwest::Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Full URL of the `simple/price` endpoint
    pub fn endpoint(&self) -> String {
        format!("{}/simple/price", self.base_url.trim_end_matches('/'))
    }

    async fn fetch(&self, price_id: &str) -> Result<BigDecimal, PriceError> {
        let response = self
            .client
            .get(self.endpoint())
            .query(&[
                ("ids", price_id),
                ("vs_currencies", "usd"),
                ("x_cg_pro_api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(PriceError::unreachable_api)?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => return Err(PriceError::RateLimited),
            status if !status.is_success() => {
                return Err(PriceError::HttpStatus {
                    status: status.as_u16(),
                })
            }
            _ => {}
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| PriceError::malformed(e.to_string()))?;

        parse_usd_quote(&body, price_id)
    }
}

#[async_trait]
impl PriceFeed for CoinGeckoPriceFeed {
    async fn usd_price(&self, price_id: &str) -> Result<BigDecimal, PriceError> {
        let span = spans::fetch_usd_price(price_id);
        async {
            match self.fetch(price_id).await {
                Ok(price) => {
                    debug!(%price, "Fetched USD price");
                    Ok(price)
                }
                Err(e) => {
                    warn!(error = %e, "USD price lookup failed");
                    Err(e)
                }
            }
        }
        .instrument(span)
        .await
    }
}

/// Extract `body[price_id].usd` as an exact decimal.
///
/// # Examples
///
/// ```
/// use slimwallet::price::parse_usd_quote;
///
/// let body = serde_json::json!({ "ethereum": { "usd": 1800.25 } });
/// let price = parse_usd_quote(&body, "ethereum").unwrap();
/// assert_eq!(price.to_string(), "1800.25");
/// ```
pub fn parse_usd_quote(body: &Value, price_id: &str) -> Result<BigDecimal, PriceError> {
    let object = body
        .as_object()
        .ok_or_else(|| PriceError::malformed("response is not a JSON object"))?;

    let quote = object
        .get(price_id)
        .and_then(|entry| entry.get("usd"))
        .ok_or_else(|| PriceError::UnknownAsset {
            id: price_id.to_string(),
        })?;

    let raw = match quote {
        Value::Number(number) => number.to_string(),
        Value::String(text) => text.clone(),
        other => {
            return Err(PriceError::malformed(format!(
                "usd quote for '{price_id}' is not a number: {other}"
            )))
        }
    };

    let price = BigDecimal::from_str(&raw)
        .map_err(|e| PriceError::malformed(format!("invalid usd quote '{raw}': {e}")))?;

    if price < BigDecimal::from(0) {
        return Err(PriceError::NegativePrice { price: raw });
    }
    Ok(price)
}
