//! Time-series chart data for the sentiment and mention charts.
//!
//! Every series is aligned 1:1 with the dates of the selected range. A day
//! without sentiment is unknown (`None`); a day without mentions is zero.

use std::collections::HashMap;

use serde::Serialize;
use tickerpulse_core::{MentionRecord, SentimentRecord, TickerRecord};

use crate::registry::TickerRegistry;

pub const SENTIMENT_TITLE: &str = "Sentiment Over Time by Ticker";
pub const MENTIONS_TITLE: &str = "Mentions Over Time by Ticker";

/// Line/marker weight hint for the renderer. Only the pinned ticker is emphasized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Emphasis {
    pub line_width: u8,
    pub marker_size: u8,
}

impl Emphasis {
    pub const NORMAL: Emphasis = Emphasis {
        line_width: 1,
        marker_size: 6,
    };
    pub const PINNED: Emphasis = Emphasis {
        line_width: 4,
        marker_size: 10,
    };

    #[must_use]
    pub fn for_ticker(ticker: &str, pinned: Option<&str>) -> Self {
        if pinned == Some(ticker) {
            Self::PINNED
        } else {
            Self::NORMAL
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries<T> {
    pub ticker: String,
    pub color: Option<&'static str>,
    pub emphasis: Emphasis,
    pub dates: Vec<String>,
    pub values: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFigure<T> {
    pub title: String,
    pub x_title: &'static str,
    pub y_title: &'static str,
    pub series: Vec<ChartSeries<T>>,
}

/// Build one aligned series per ticker, in first-occurrence order of `records`.
///
/// When a ticker has several records on one date the last one wins; `missing`
/// fills dates without a record. Dateless records are skipped.
fn build_series<R, T>(
    records: &[&R],
    value: impl Fn(&R) -> T,
    missing: T,
    dates: &[String],
    registry: &TickerRegistry,
    pinned: Option<&str>,
) -> Vec<ChartSeries<T>>
where
    R: TickerRecord,
    T: Clone,
{
    let mut order: Vec<&str> = Vec::new();
    let mut by_ticker: HashMap<&str, HashMap<&str, T>> = HashMap::new();

    for &record in records {
        let Some(date) = record.date() else {
            continue;
        };
        let ticker = record.ticker();
        by_ticker
            .entry(ticker)
            .or_insert_with(|| {
                order.push(ticker);
                HashMap::new()
            })
            .insert(date, value(record));
    }

    order
        .into_iter()
        .map(|ticker| {
            let points = &by_ticker[ticker];
            ChartSeries {
                ticker: ticker.to_owned(),
                color: registry.color(ticker),
                emphasis: Emphasis::for_ticker(ticker, pinned),
                dates: dates.to_vec(),
                values: dates
                    .iter()
                    .map(|d| points.get(d.as_str()).cloned().unwrap_or_else(|| missing.clone()))
                    .collect(),
            }
        })
        .collect()
}

/// Sentiment chart over the filtered records and the dates of the selected range.
#[must_use]
pub fn sentiment_chart(
    records: &[&SentimentRecord],
    dates: &[String],
    registry: &TickerRegistry,
    pinned: Option<&str>,
) -> ChartFigure<Option<f64>> {
    ChartFigure {
        title: SENTIMENT_TITLE.to_owned(),
        x_title: "Date",
        y_title: "Average Sentiment Score",
        series: build_series(
            records,
            |r: &SentimentRecord| r.avg_overall_score,
            None,
            dates,
            registry,
            pinned,
        ),
    }
}

/// Mentions chart over the filtered records and the dates of the selected range.
#[must_use]
pub fn mentions_chart(
    records: &[&MentionRecord],
    dates: &[String],
    registry: &TickerRegistry,
    pinned: Option<&str>,
) -> ChartFigure<u64> {
    ChartFigure {
        title: MENTIONS_TITLE.to_owned(),
        x_title: "Date",
        y_title: "Number of Mentions",
        series: build_series(
            records,
            |r: &MentionRecord| r.mention_count,
            0,
            dates,
            registry,
            pinned,
        ),
    }
}
