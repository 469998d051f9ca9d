//! Price banner command handlers.

use std::time::Duration;

use tickerpulse_core::{AppConfig, ConfigError};
use tickerpulse_quotes::{AlphaVantageClient, Banner, PriceBoard};

/// Build the quote client and cache from configuration.
///
/// # Errors
///
/// Returns an error if `ALPHAVANTAGE_API_KEY` is unset or the HTTP client
/// cannot be built.
pub(crate) fn build_board(config: &AppConfig) -> anyhow::Result<PriceBoard<AlphaVantageClient>> {
    let api_key = config
        .quote_api_key
        .as_deref()
        .ok_or_else(|| ConfigError::MissingEnvVar("ALPHAVANTAGE_API_KEY".to_string()))?;
    let client = AlphaVantageClient::with_base_url(
        api_key,
        config.quote_timeout_secs,
        &config.quote_user_agent,
        &config.quote_base_url,
    )?;
    Ok(PriceBoard::new(
        client,
        Duration::from_secs(config.quote_freshness_secs),
    ))
}

/// Refresh prices for `tickers` and turn the batch into a banner.
///
/// No request is made when nothing is selected.
pub(crate) async fn refresh_banner(
    board: &PriceBoard<AlphaVantageClient>,
    tickers: &[String],
) -> Banner {
    if tickers.is_empty() {
        return Banner::Prompt;
    }
    let quotes = board.refresh_prices(tickers).await;
    let failed = quotes.iter().filter(|q| q.error.is_some()).count();
    tracing::info!(
        requested = tickers.len(),
        returned = quotes.len(),
        failed,
        "price refresh complete"
    );
    Banner::for_selection(tickers, &quotes)
}

/// Refresh and print the banner for an explicit ticker list.
///
/// # Errors
///
/// Returns an error if the price board cannot be built.
pub(crate) async fn run_prices(config: &AppConfig, tickers: &[String]) -> anyhow::Result<()> {
    let board = build_board(config)?;
    let banner = refresh_banner(&board, tickers).await;
    println!("{banner}");
    Ok(())
}
