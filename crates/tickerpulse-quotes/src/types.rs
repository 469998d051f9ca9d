//! Alpha Vantage `GLOBAL_QUOTE` response types.
//!
//! The provider reports every number as a string (`"10. change percent"` even
//! carries a trailing `%`), and signals throttling or bad calls through
//! top-level `Note` / `Information` / `Error Message` fields in an otherwise
//! successful 200 response.

use serde::{Deserialize, Serialize};

use crate::error::QuoteError;

/// Top-level body of a `function=GLOBAL_QUOTE` response.
#[derive(Debug, Default, Deserialize)]
pub struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote", default)]
    pub global_quote: Option<GlobalQuote>,

    /// Throttling marker: present instead of a quote when the key's request
    /// budget is spent.
    #[serde(rename = "Note", default)]
    pub note: Option<String>,

    /// Newer throttling/premium marker used in place of `Note`.
    #[serde(rename = "Information", default)]
    pub information: Option<String>,

    #[serde(rename = "Error Message", default)]
    pub error_message: Option<String>,
}

/// The `Global Quote` object. Unknown symbols come back as `{}`.
#[derive(Debug, Default, Deserialize)]
pub struct GlobalQuote {
    #[serde(rename = "01. symbol", default)]
    pub symbol: Option<String>,
    #[serde(rename = "05. price", default)]
    pub price: Option<String>,
    #[serde(rename = "08. previous close", default)]
    pub previous_close: Option<String>,
    #[serde(rename = "09. change", default)]
    pub change: Option<String>,
    #[serde(rename = "10. change percent", default)]
    pub change_percent: Option<String>,
}

/// A parsed quote for one ticker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QuoteSnapshot {
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

impl GlobalQuote {
    fn is_empty(&self) -> bool {
        self.symbol.is_none()
            && self.price.is_none()
            && self.change.is_none()
            && self.change_percent.is_none()
    }

    /// Convert the string fields into a [`QuoteSnapshot`].
    ///
    /// # Errors
    ///
    /// Returns [`QuoteError::MissingQuote`] for an empty object or a missing
    /// field, and [`QuoteError::InvalidField`] for a non-numeric one.
    pub fn to_snapshot(&self, ticker: &str) -> Result<QuoteSnapshot, QuoteError> {
        if self.is_empty() {
            return Err(QuoteError::MissingQuote {
                ticker: ticker.to_owned(),
            });
        }

        let price = parse_number(ticker, "price", self.price.as_deref())?;
        let change = parse_number(ticker, "change", self.change.as_deref())?;
        let change_percent = parse_number(
            ticker,
            "change percent",
            self.change_percent
                .as_deref()
                .map(|s| s.trim().trim_end_matches('%')),
        )?;

        Ok(QuoteSnapshot {
            price,
            change,
            change_percent,
        })
    }
}

fn parse_number(ticker: &str, field: &'static str, raw: Option<&str>) -> Result<f64, QuoteError> {
    let raw = raw.ok_or_else(|| QuoteError::MissingQuote {
        ticker: ticker.to_owned(),
    })?;
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(QuoteError::InvalidField {
            ticker: ticker.to_owned(),
            field,
            value: raw.to_owned(),
        }),
    }
}
