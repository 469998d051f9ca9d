//! Freshness-windowed quote cache and the refresh orchestrator.
//!
//! [`PriceBoard::refresh_prices`] serves fresh cache entries without network
//! access and fetches everything else concurrently, one request per ticker.
//! Each fetched result, success or failure, overwrites the ticker's cache
//! entry the moment its request completes. Overlapping refreshes are not
//! coordinated: whichever fetch finishes last owns the entry.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;

use crate::client::QuoteSource;
use crate::error::QuoteError;
use crate::types::QuoteSnapshot;

/// How long a cached quote is served before it is fetched again.
pub const DEFAULT_FRESHNESS: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Network failure, non-2xx status, or an unreadable body.
    Transport,
    /// The provider's throttling marker.
    RateLimited,
    /// No usable quote in an otherwise valid response.
    NoData,
}

impl From<&QuoteError> for FailureKind {
    fn from(err: &QuoteError) -> Self {
        match err {
            QuoteError::Http(_) | QuoteError::Deserialize { .. } => FailureKind::Transport,
            QuoteError::RateLimited(_) => FailureKind::RateLimited,
            QuoteError::ApiError(_)
            | QuoteError::MissingQuote { .. }
            | QuoteError::InvalidField { .. } => FailureKind::NoData,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuoteFailure {
    pub kind: FailureKind,
    pub message: String,
}

/// The last known price state for one ticker.
///
/// Failed fetches are stored too, with every price field absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub ticker: String,
    pub price: Option<f64>,
    pub change: Option<f64>,
    pub change_percent: Option<f64>,
    pub error: Option<QuoteFailure>,
    pub fetched_at: DateTime<Utc>,
}

impl PriceQuote {
    #[must_use]
    pub fn success(ticker: &str, snapshot: QuoteSnapshot, fetched_at: DateTime<Utc>) -> Self {
        Self {
            ticker: ticker.to_owned(),
            price: Some(snapshot.price),
            change: Some(snapshot.change),
            change_percent: Some(snapshot.change_percent),
            error: None,
            fetched_at,
        }
    }

    #[must_use]
    pub fn failure(ticker: &str, err: &QuoteError, fetched_at: DateTime<Utc>) -> Self {
        Self {
            ticker: ticker.to_owned(),
            price: None,
            change: None,
            change_percent: None,
            error: Some(QuoteFailure {
                kind: FailureKind::from(err),
                message: err.to_string(),
            }),
            fetched_at,
        }
    }

    #[must_use]
    pub fn is_rate_limited(&self) -> bool {
        self.error
            .as_ref()
            .is_some_and(|e| e.kind == FailureKind::RateLimited)
    }

    /// `true` while `now - fetched_at < freshness`. Errored quotes age the
    /// same way as successful ones.
    #[must_use]
    pub fn is_fresh(&self, now: DateTime<Utc>, freshness: Duration) -> bool {
        match now.signed_duration_since(self.fetched_at).to_std() {
            Ok(age) => age < freshness,
            // fetched_at ahead of `now`
            Err(_) => true,
        }
    }
}

/// Shared ticker → quote map. Entries are replaced wholesale and never evicted.
#[derive(Debug, Clone, Default)]
pub struct PriceCache {
    entries: Arc<Mutex<HashMap<String, PriceQuote>>>,
}

impl PriceCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, ticker: &str) -> Option<PriceQuote> {
        self.lock().get(ticker).cloned()
    }

    pub fn store(&self, quote: PriceQuote) {
        self.lock().insert(quote.ticker.clone(), quote);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, PriceQuote>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Refresh orchestrator over a [`QuoteSource`] and a [`PriceCache`].
pub struct PriceBoard<S> {
    source: S,
    cache: PriceCache,
    freshness: Duration,
}

impl<S: QuoteSource> PriceBoard<S> {
    #[must_use]
    pub fn new(source: S, freshness: Duration) -> Self {
        Self::with_cache(source, PriceCache::new(), freshness)
    }

    /// Builds a board over an existing cache, e.g. one shared with another board.
    #[must_use]
    pub fn with_cache(source: S, cache: PriceCache, freshness: Duration) -> Self {
        Self {
            source,
            cache,
            freshness,
        }
    }

    #[must_use]
    pub fn cache(&self) -> &PriceCache {
        &self.cache
    }

    /// Refresh quotes for `tickers` against the wall clock.
    ///
    /// See [`PriceBoard::refresh_prices_at`].
    pub async fn refresh_prices(&self, tickers: &[String]) -> Vec<PriceQuote> {
        self.refresh_prices_at(tickers, Utc::now()).await
    }

    /// Refresh quotes for `tickers` as of `now`.
    ///
    /// Duplicate tickers are collapsed. Fresh cache entries are returned first
    /// (in request order), followed by the freshly fetched quotes once every
    /// fetch of this call has completed. Never fails: fetch errors come back
    /// as error-tagged quotes stamped with `now`.
    pub async fn refresh_prices_at(&self, tickers: &[String], now: DateTime<Utc>) -> Vec<PriceQuote> {
        let mut seen = HashSet::new();
        let mut results = Vec::new();
        let mut to_fetch = Vec::new();

        for ticker in tickers {
            if !seen.insert(ticker.as_str()) {
                continue;
            }
            match self.cache.get(ticker) {
                Some(cached) if cached.is_fresh(now, self.freshness) => results.push(cached),
                _ => to_fetch.push(ticker.as_str()),
            }
        }

        tracing::debug!(
            cached = results.len(),
            fetching = to_fetch.len(),
            "refreshing stock prices"
        );

        let fetched = join_all(
            to_fetch
                .iter()
                .map(|ticker| self.fetch_and_store(ticker, now)),
        )
        .await;

        results.extend(fetched);
        results
    }

    async fn fetch_and_store(&self, ticker: &str, now: DateTime<Utc>) -> PriceQuote {
        let quote = match self.source.fetch_quote(ticker).await {
            Ok(snapshot) => PriceQuote::success(ticker, snapshot, now),
            Err(e) => {
                tracing::warn!(ticker, error = %e, "stock price fetch failed");
                PriceQuote::failure(ticker, &e, now)
            }
        };
        self.cache.store(quote.clone());
        quote
    }
}
