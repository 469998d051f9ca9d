//! Dashboard command handlers: axis, registry and view output.

use tickerpulse_core::{AppConfig, Datasets};
use tickerpulse_dashboard::{DashboardSession, Interaction};
use tickerpulse_quotes::Banner;

use crate::{prices, ViewArgs};

/// Print every axis date with its index, then the range selector label.
///
/// # Errors
///
/// Returns an error if the datasets were already loaded into the session.
pub(crate) fn run_dates(datasets: Datasets) -> anyhow::Result<()> {
    let mut session = DashboardSession::new();
    let update = session.load(datasets)?;
    let Some(axis) = session.axis() else {
        return Ok(());
    };

    println!("{:<7}DATE", "INDEX");
    for (i, date) in axis.dates().iter().enumerate() {
        println!("{i:<7}{date}");
    }
    println!();
    println!("range: {}", update.view.range_label);
    Ok(())
}

/// Print the ticker registry with chart colors.
///
/// # Errors
///
/// Returns an error if the datasets were already loaded into the session.
pub(crate) fn run_tickers(datasets: Datasets) -> anyhow::Result<()> {
    let mut session = DashboardSession::new();
    session.load(datasets)?;
    let Some(registry) = session.registry() else {
        return Ok(());
    };

    if registry.tickers().is_empty() {
        println!("no tickers found in the datasets");
        return Ok(());
    }

    println!("{:<10}COLOR", "TICKER");
    for ticker in registry.tickers() {
        println!("{:<10}{}", ticker, registry.color(ticker).unwrap_or("-"));
    }
    Ok(())
}

/// Translate the command-line selection into session interactions, in the
/// order a user would apply them.
pub(crate) fn interactions(args: &ViewArgs, max_index: Option<usize>) -> Vec<Interaction> {
    let mut steps = Vec::new();

    if args.from.is_some() || args.to.is_some() {
        let last = max_index.unwrap_or(0);
        steps.push(Interaction::SetDateRange(
            args.from.unwrap_or(0),
            args.to.unwrap_or(last),
        ));
    }
    if !args.tickers.is_empty() {
        steps.push(Interaction::SetTickers(args.tickers.clone()));
    }
    if let Some(n) = args.top_mentions {
        steps.push(Interaction::TopMentions(n));
    }
    if let Some(n) = args.top_sentiment {
        steps.push(Interaction::TopSentiment(n));
    }
    if let Some(pin) = &args.pin {
        steps.push(Interaction::TogglePin(pin.clone()));
    }
    steps
}

/// Compute the view for the requested selection and print it as JSON, with
/// the price refresh running alongside.
///
/// # Errors
///
/// Returns an error if an interaction is rejected, the view cannot be
/// serialized, or prices are requested without an API key.
pub(crate) async fn run_view(
    config: &AppConfig,
    datasets: Datasets,
    args: &ViewArgs,
) -> anyhow::Result<()> {
    let mut session = DashboardSession::new();
    let mut update = session.load(datasets)?;

    let max_index = session.axis().and_then(|a| a.max_index());
    for step in interactions(args, max_index) {
        update = session.dispatch(step)?;
    }

    let board = if args.no_prices || update.price_request.is_empty() {
        None
    } else {
        Some(prices::build_board(config)?)
    };

    let render = async { serde_json::to_string_pretty(&update.view) };
    let refresh = async {
        match &board {
            Some(board) => Some(prices::refresh_banner(board, &update.price_request).await),
            None if args.no_prices => None,
            None => Some(Banner::Prompt),
        }
    };
    let (json, banner) = tokio::join!(render, refresh);

    println!("{}", json?);
    if let Some(banner) = banner {
        println!();
        println!("{banner}");
    }
    Ok(())
}
