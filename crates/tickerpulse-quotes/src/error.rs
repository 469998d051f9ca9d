use thiserror::Error;

/// Errors returned by the quote client.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Network or TLS failure, or a non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with its throttling note instead of a quote.
    #[error("API rate limit reached: {0}")]
    RateLimited(String),

    /// The provider rejected the call itself (bad function, bad key).
    #[error("quote API error: {0}")]
    ApiError(String),

    /// The response carried no `Global Quote` object, or an empty one.
    #[error("No quote data available for {ticker}")]
    MissingQuote { ticker: String },

    /// A quote field was present but not a number.
    #[error("invalid {field} in quote for {ticker}: {value:?}")]
    InvalidField {
        ticker: String,
        field: &'static str,
        value: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

impl QuoteError {
    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, QuoteError::RateLimited(_))
    }
}
