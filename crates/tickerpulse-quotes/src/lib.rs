//! Stock quote banner support for tickerpulse.
//!
//! Fetches `GLOBAL_QUOTE` snapshots from Alpha Vantage, keeps them in a
//! freshness-windowed in-memory cache, and turns the latest batch into the
//! ticker banner model. Fetch failures are folded into error-tagged quotes and
//! never escape [`PriceBoard::refresh_prices`].

pub mod banner;
pub mod cache;
pub mod client;
pub mod error;
pub mod types;

pub use banner::{Banner, BannerItem, Direction};
pub use cache::{
    FailureKind, PriceBoard, PriceCache, PriceQuote, QuoteFailure, DEFAULT_FRESHNESS,
};
pub use client::{AlphaVantageClient, QuoteSource};
pub use error::QuoteError;
pub use types::QuoteSnapshot;
