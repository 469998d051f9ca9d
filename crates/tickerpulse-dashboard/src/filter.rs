//! Date-range and ticker filtering, with optional per-ticker aggregation.
//!
//! Works over any [`TickerRecord`], so the same rules apply to the sentiment,
//! mention and legacy engagement datasets.

use std::collections::HashMap;

use serde::Serialize;
use tickerpulse_core::TickerRecord;

use crate::axis::DateWindow;

/// Insertion-ordered set of selected tickers. Empty means "all tickers".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TickerSelection {
    tickers: Vec<String>,
}

impl TickerSelection {
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn of<I, S>(tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::default();
        for t in tickers {
            let t = t.into();
            if !selection.tickers.contains(&t) {
                selection.tickers.push(t);
            }
        }
        selection
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    #[must_use]
    pub fn tickers(&self) -> &[String] {
        &self.tickers
    }

    /// Whether a record for `ticker` passes the selection.
    #[must_use]
    pub fn admits(&self, ticker: &str) -> bool {
        self.tickers.is_empty() || self.tickers.iter().any(|t| t == ticker)
    }
}

/// Per-ticker reduction of a filtered record set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickerAggregate {
    pub ticker: String,
    pub mention_count: u64,
    pub avg_overall_score: Option<f64>,
}

/// Result of [`filter`]: either the surviving rows or their per-ticker groups.
#[derive(Debug, Clone, PartialEq)]
pub enum Filtered<'a, R> {
    Records(Vec<&'a R>),
    Aggregated(Vec<TickerAggregate>),
}

/// Whether a record dated `date` passes `window`.
///
/// Dateless records always pass; dated records never pass when there is no
/// window (an empty axis).
#[must_use]
pub fn date_admits(window: Option<&DateWindow>, date: Option<&str>) -> bool {
    match (date, window) {
        (None, _) => true,
        (Some(d), Some(w)) => w.contains(d),
        (Some(_), None) => false,
    }
}

/// Records passing both the date and the ticker test, in input order.
#[must_use]
pub fn filter_records<'a, R: TickerRecord>(
    records: &'a [R],
    window: Option<&DateWindow>,
    selection: &TickerSelection,
) -> Vec<&'a R> {
    records
        .iter()
        .filter(|r| date_admits(window, r.date()) && selection.admits(r.ticker()))
        .collect()
}

/// Group `records` by ticker in first-occurrence order.
///
/// Mention counts are summed with missing counts as zero; scores are averaged
/// over the records that have one, `None` when none do.
#[must_use]
pub fn aggregate_by_ticker<R: TickerRecord>(records: &[&R]) -> Vec<TickerAggregate> {
    struct Acc {
        mentions: u64,
        score_sum: f64,
        score_count: u32,
    }

    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Acc> = HashMap::new();

    for record in records {
        let ticker = record.ticker();
        let acc = groups.entry(ticker).or_insert_with(|| {
            order.push(ticker);
            Acc {
                mentions: 0,
                score_sum: 0.0,
                score_count: 0,
            }
        });
        acc.mentions += record.mention_count().unwrap_or(0);
        if let Some(score) = record.score() {
            acc.score_sum += score;
            acc.score_count += 1;
        }
    }

    order
        .into_iter()
        .map(|ticker| {
            let acc = &groups[ticker];
            TickerAggregate {
                ticker: ticker.to_owned(),
                mention_count: acc.mentions,
                avg_overall_score: (acc.score_count > 0)
                    .then(|| acc.score_sum / f64::from(acc.score_count)),
            }
        })
        .collect()
}

/// Filter `records` by `window` and `selection`, optionally aggregating the
/// survivors per ticker. Pure: identical inputs give identical output.
#[must_use]
pub fn filter<'a, R: TickerRecord>(
    records: &'a [R],
    window: Option<&DateWindow>,
    selection: &TickerSelection,
    aggregate: bool,
) -> Filtered<'a, R> {
    let kept = filter_records(records, window, selection);
    if aggregate {
        Filtered::Aggregated(aggregate_by_ticker(&kept))
    } else {
        Filtered::Records(kept)
    }
}
