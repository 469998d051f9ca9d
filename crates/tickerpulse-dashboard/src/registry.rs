use std::collections::{BTreeSet, HashMap};

use serde::Serialize;
use tickerpulse_core::{MentionRecord, SentimentRecord};

/// Qualitative chart palette; tickers beyond its length wrap around.
pub const PALETTE: [&str; 20] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52", "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b",
    "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// Every ticker of the sentiment and mention datasets, sorted, each with a
/// stable color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TickerRegistry {
    tickers: Vec<String>,
    #[serde(skip)]
    colors: HashMap<String, &'static str>,
}

impl TickerRegistry {
    #[must_use]
    pub fn build(sentiment: &[SentimentRecord], mentions: &[MentionRecord]) -> Self {
        let unique: BTreeSet<&str> = sentiment
            .iter()
            .map(|r| r.ticker.as_str())
            .chain(mentions.iter().map(|r| r.ticker.as_str()))
            .collect();

        let tickers: Vec<String> = unique.into_iter().map(str::to_owned).collect();
        let colors = tickers
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), PALETTE[i % PALETTE.len()]))
            .collect();

        Self { tickers, colors }
    }

    #[must_use]
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    #[must_use]
    pub fn color(&self, ticker: &str) -> Option<&'static str> {
        self.colors.get(ticker).copied()
    }

    #[must_use]
    pub fn contains(&self, ticker: &str) -> bool {
        self.colors.contains_key(ticker)
    }
}
