//! Engagement-by-ticker bar chart: mentions and sentiment combined per ticker.

use std::collections::HashMap;

use serde::Serialize;
use tickerpulse_core::{MentionRecord, SentimentRecord};

use crate::axis::DateWindow;
use crate::filter::{filter_records, TickerSelection};
use crate::registry::TickerRegistry;

pub const ENGAGEMENT_TITLE: &str = "Engagement by Ticker";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngagementRow {
    pub ticker: String,
    pub mention_count: u64,
    pub avg_overall_score: Option<f64>,
    pub color: Option<&'static str>,
}

impl EngagementRow {
    /// Hover text for the bar: `"Score: 0.42"` or `"Score: N/A"`.
    #[must_use]
    pub fn score_label(&self) -> String {
        match self.avg_overall_score {
            Some(score) => format!("Score: {score:.2}"),
            None => "Score: N/A".to_owned(),
        }
    }
}

/// Per-ticker engagement over the mention and sentiment datasets.
///
/// Both datasets are filtered independently; the ticker set is the union of
/// both (mention tickers first, each in first-occurrence order). Rows are
/// sorted by total mentions, descending, keeping union order on ties.
#[must_use]
pub fn engagement_rows(
    mentions: &[MentionRecord],
    sentiment: &[SentimentRecord],
    window: Option<&DateWindow>,
    selection: &TickerSelection,
    registry: &TickerRegistry,
) -> Vec<EngagementRow> {
    let mentions = filter_records(mentions, window, selection);
    let sentiment = filter_records(sentiment, window, selection);

    let contributions = mentions
        .iter()
        .map(|m| (m.ticker.as_str(), m.mention_count, None))
        .chain(
            sentiment
                .iter()
                .map(|s| (s.ticker.as_str(), 0, s.avg_overall_score)),
        );

    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, (u64, f64, u32)> = HashMap::new();

    for (ticker, count, score) in contributions {
        let entry = totals.entry(ticker).or_insert_with(|| {
            order.push(ticker);
            (0, 0.0, 0)
        });
        entry.0 += count;
        if let Some(score) = score {
            entry.1 += score;
            entry.2 += 1;
        }
    }

    let mut rows: Vec<EngagementRow> = order
        .iter()
        .map(|&ticker| {
            let (mention_count, score_sum, score_count) = totals[ticker];
            EngagementRow {
                ticker: ticker.to_owned(),
                mention_count,
                avg_overall_score: (score_count > 0).then(|| score_sum / f64::from(score_count)),
                color: registry.color(ticker),
            }
        })
        .collect();

    // sort_by is stable
    rows.sort_by(|a, b| b.mention_count.cmp(&a.mention_count));
    rows
}

/// `"Engagement by Ticker (1/5 - 1/9)"`; no suffix without a window.
#[must_use]
pub fn engagement_title(window: Option<&DateWindow>) -> String {
    match window {
        Some(w) => format!("{ENGAGEMENT_TITLE} {}", w.short_label()),
        None => ENGAGEMENT_TITLE.to_owned(),
    }
}
