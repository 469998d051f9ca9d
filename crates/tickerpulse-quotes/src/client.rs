//! HTTP client for the Alpha Vantage `GLOBAL_QUOTE` endpoint.
//!
//! Wraps `reqwest` with provider-specific error detection: the API answers
//! throttled or malformed calls with HTTP 200 and a marker field in the body,
//! so every response is inspected before the quote is extracted.

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::QuoteError;
use crate::types::{GlobalQuoteResponse, QuoteSnapshot};

const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
const DEFAULT_USER_AGENT: &str = "tickerpulse/0.1 (quote-banner)";

/// Something that can produce a quote for a single ticker.
///
/// The provider has no batch endpoint, so the price board issues one call per
/// ticker through this seam.
pub trait QuoteSource {
    fn fetch_quote(
        &self,
        ticker: &str,
    ) -> impl Future<Output = Result<QuoteSnapshot, QuoteError>> + Send;
}

/// Client for the Alpha Vantage quote API.
///
/// Use [`AlphaVantageClient::new`] for production or
/// [`AlphaVantageClient::with_base_url`] to point at a mock server in tests.
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl AlphaVantageClient {
    /// Creates a new client pointed at the production Alpha Vantage API.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, QuoteError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_USER_AGENT, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom user agent and base URL.
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`QuoteError::ApiError`] if `base_url`
    /// is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, QuoteError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        let base_url = Url::parse(base_url)
            .map_err(|e| QuoteError::ApiError(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Fetches the latest quote for `ticker`.
    ///
    /// # Errors
    ///
    /// - [`QuoteError::Http`] on network failure or non-2xx HTTP status.
    /// - [`QuoteError::Deserialize`] if the body is not JSON.
    /// - [`QuoteError::RateLimited`] if the provider returned its throttling note.
    /// - [`QuoteError::ApiError`] if the provider rejected the call.
    /// - [`QuoteError::MissingQuote`] / [`QuoteError::InvalidField`] if no
    ///   usable quote is present.
    pub async fn get_global_quote(&self, ticker: &str) -> Result<QuoteSnapshot, QuoteError> {
        let url = self.build_url("GLOBAL_QUOTE", ticker);
        let body = self.request_json(&url).await?;
        tracing::debug!(ticker, body = %body, "quote response");

        let response: GlobalQuoteResponse =
            serde_json::from_value(body).map_err(|e| QuoteError::Deserialize {
                context: format!("GLOBAL_QUOTE(symbol={ticker})"),
                source: e,
            })?;
        Self::check_api_error(&response)?;

        let quote = response
            .global_quote
            .ok_or_else(|| QuoteError::MissingQuote {
                ticker: ticker.to_owned(),
            })?;
        quote.to_snapshot(ticker)
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, function: &str, symbol: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("function", function)
            .append_pair("symbol", symbol)
            .append_pair("apikey", &self.api_key);
        url
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body
    /// as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, QuoteError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| QuoteError::Deserialize {
            context: url.path().to_owned(),
            source: e,
        })
    }

    /// Surfaces the provider's in-body failure markers as errors.
    fn check_api_error(response: &GlobalQuoteResponse) -> Result<(), QuoteError> {
        if let Some(note) = response.note.as_ref().or(response.information.as_ref()) {
            return Err(QuoteError::RateLimited(note.clone()));
        }
        if let Some(msg) = &response.error_message {
            return Err(QuoteError::ApiError(msg.clone()));
        }
        Ok(())
    }
}

impl QuoteSource for AlphaVantageClient {
    fn fetch_quote(
        &self,
        ticker: &str,
    ) -> impl Future<Output = Result<QuoteSnapshot, QuoteError>> + Send {
        self.get_global_quote(ticker)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
