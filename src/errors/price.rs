//! Error types for USD price lookups.

/// Errors that can occur when fetching a spot USD price.
///
/// Every failure mode of the price API maps to a variant here so the fee
/// preview can report it instead of staying in a loading state.
///
/// # Examples
///
/// ```rust
/// use slimwallet::PriceError;
///
/// let error = PriceError::UnknownAsset { id: "ethereum".to_string() };
/// assert!(error.to_string().contains("ethereum"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    /// The price API could not be reached (DNS, TLS, timeout, ...).
    #[error("Price API unreachable")]
    Unreachable {
        /// The underlying HTTP client error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The price API answered HTTP 429.
    #[error("Price API rate limit exceeded")]
    RateLimited,

    /// The price API answered with another non-success status.
    #[error("Price API returned HTTP {status}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
    },

    /// The response carries no USD quote for the requested id.
    #[error("Price API has no USD quote for '{id}'")]
    UnknownAsset {
        /// The price id that was requested
        id: String,
    },

    /// The response body could not be interpreted.
    #[error("Malformed price response: {details}")]
    Malformed {
        /// Details about the parse failure
        details: String,
    },

    /// The quote is negative.
    #[error("Negative price {price} is not a valid quote")]
    NegativePrice {
        /// The quote as received
        price: String,
    },
}

impl PriceError {
    /// Helper to create an `Unreachable` error from any error type.
    pub fn unreachable_api(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        PriceError::Unreachable {
            source: Box::new(source),
        }
    }

    /// Helper to create a `Malformed` error.
    pub fn malformed(details: impl Into<String>) -> Self {
        PriceError::Malformed {
            details: details.into(),
        }
    }
}
