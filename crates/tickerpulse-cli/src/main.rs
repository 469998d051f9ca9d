mod dashboard;
mod prices;

use clap::{Parser, Subcommand};
use tickerpulse_core::{AppConfig, Datasets};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tickerpulse")]
#[command(about = "Stock sentiment dashboard over pre-computed JSON datasets")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the date axis and the range selector state
    Dates,
    /// Print every ticker with its chart color
    Tickers,
    /// Compute the dashboard view for a selection and print it as JSON
    View(ViewArgs),
    /// Refresh and print the price banner for the given tickers
    Prices {
        /// Ticker symbol (repeatable)
        #[arg(long = "ticker", required = true)]
        tickers: Vec<String>,
    },
}

#[derive(Debug, Default, clap::Args)]
struct ViewArgs {
    /// First date index of the range (defaults to the first date)
    #[arg(long)]
    from: Option<usize>,

    /// Last date index of the range (defaults to the last date)
    #[arg(long)]
    to: Option<usize>,

    /// Restrict to a ticker (repeatable)
    #[arg(long = "ticker")]
    tickers: Vec<String>,

    /// Emphasize one ticker in the time-series charts
    #[arg(long)]
    pin: Option<String>,

    /// Select the N most mentioned tickers
    #[arg(long, conflicts_with_all = ["tickers", "top_sentiment"])]
    top_mentions: Option<usize>,

    /// Select the N tickers with the highest mean sentiment
    #[arg(long, conflicts_with = "tickers")]
    top_sentiment: Option<usize>,

    /// Skip the price refresh
    #[arg(long)]
    no_prices: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = tickerpulse_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let Some(command) = cli.command else {
        println!("tickerpulse ready; run `tickerpulse --help` for commands");
        return Ok(());
    };

    match command {
        Commands::Dates => dashboard::run_dates(load_datasets(&config)?),
        Commands::Tickers => dashboard::run_tickers(load_datasets(&config)?),
        Commands::View(args) => {
            let datasets = load_datasets(&config)?;
            dashboard::run_view(&config, datasets, &args).await
        }
        Commands::Prices { tickers } => prices::run_prices(&config, &tickers).await,
    }
}

fn load_datasets(config: &AppConfig) -> anyhow::Result<Datasets> {
    tickerpulse_core::load_datasets(&config.data_dir).map_err(|e| {
        tracing::error!(error = %e, dir = %config.data_dir.display(), "failed to load datasets");
        e.into()
    })
}

#[cfg(test)]
mod tests;
