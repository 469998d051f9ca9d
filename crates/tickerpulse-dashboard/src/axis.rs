//! The dashboard's date axis and the range selector built on it.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tickerpulse_core::SentimentRecord;

/// Inclusive pair of indices into a [`DateAxis`], always `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: usize,
    pub end: usize,
}

impl DateRange {
    #[must_use]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }
}

/// Resolved inclusive `[start, end]` date bounds of a [`DateRange`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateWindow {
    pub start: String,
    pub end: String,
}

impl DateWindow {
    /// Inclusive on both ends. ISO dates compare correctly as strings.
    #[must_use]
    pub fn contains(&self, date: &str) -> bool {
        self.start.as_str() <= date && date <= self.end.as_str()
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }

    /// `"(1/5 - 1/9)"`, as used in the engagement chart title.
    #[must_use]
    pub fn short_label(&self) -> String {
        format!("({} - {})", format_short(&self.start), format_short(&self.end))
    }
}

/// How the date-range selector should be presented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RangeControl {
    /// Fewer than two dates: no range can be chosen.
    Disabled { only_date: Option<String> },
    Enabled { max_index: usize },
}

impl RangeControl {
    #[must_use]
    pub fn label(&self, axis: &DateAxis) -> String {
        match self {
            RangeControl::Disabled {
                only_date: Some(date),
            } => format!("{date} (only one date available)"),
            RangeControl::Disabled { only_date: None } => "no dates available".to_owned(),
            RangeControl::Enabled { max_index } => {
                let first = axis.dates.first().map_or("", String::as_str);
                let last = axis.dates.get(*max_index).map_or("", String::as_str);
                format!("{first} - {last}")
            }
        }
    }
}

/// Sorted, de-duplicated dates of the sentiment dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateAxis {
    dates: Vec<String>,
}

impl DateAxis {
    #[must_use]
    pub fn from_sentiment(records: &[SentimentRecord]) -> Self {
        let dates: BTreeSet<&str> = records.iter().map(|r| r.date.as_str()).collect();
        Self {
            dates: dates.into_iter().map(str::to_owned).collect(),
        }
    }

    #[must_use]
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.dates.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn max_index(&self) -> Option<usize> {
        self.dates.len().checked_sub(1)
    }

    /// The range covering every date; `[0, 0]` for an empty axis.
    #[must_use]
    pub fn full_range(&self) -> DateRange {
        DateRange::new(0, self.max_index().unwrap_or(0))
    }

    #[must_use]
    pub fn range_control(&self) -> RangeControl {
        match self.dates.len() {
            0 | 1 => RangeControl::Disabled {
                only_date: self.dates.first().cloned(),
            },
            n => RangeControl::Enabled { max_index: n - 1 },
        }
    }

    /// Date bounds of `range`, with indices clamped to the last date.
    /// `None` for an empty axis.
    #[must_use]
    pub fn window(&self, range: DateRange) -> Option<DateWindow> {
        let max = self.max_index()?;
        Some(DateWindow {
            start: self.dates[range.start.min(max)].clone(),
            end: self.dates[range.end.min(max)].clone(),
        })
    }

    /// Every axis date inside `range`, in order.
    #[must_use]
    pub fn dates_in(&self, range: DateRange) -> &[String] {
        match self.max_index() {
            Some(max) => &self.dates[range.start.min(max)..=range.end.min(max)],
            None => &[],
        }
    }
}

/// Format an ISO date as `M/D` without zero padding; anything unparseable is
/// returned unchanged.
#[must_use]
pub fn format_short(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{}/{}", d.month(), d.day()),
        Err(_) => date.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentiment(date: &str, ticker: &str) -> SentimentRecord {
        SentimentRecord {
            date: date.to_owned(),
            ticker: ticker.to_owned(),
            avg_overall_score: Some(0.1),
        }
    }

    fn axis_of(dates: &[&str]) -> DateAxis {
        let records: Vec<SentimentRecord> = dates.iter().map(|d| sentiment(d, "AAA")).collect();
        DateAxis::from_sentiment(&records)
    }

    #[test]
    fn dates_are_sorted_and_unique() {
        let axis = axis_of(&["2024-01-03", "2024-01-01", "2024-01-03", "2024-01-02"]);
        assert_eq!(axis.dates(), ["2024-01-01", "2024-01-02", "2024-01-03"]);
        assert!(axis.dates().windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn range_new_orders_indices() {
        assert_eq!(DateRange::new(4, 1), DateRange { start: 1, end: 4 });
    }

    #[test]
    fn window_is_inclusive_on_both_ends() {
        let axis = axis_of(&["2024-01-01", "2024-01-02", "2024-01-03"]);
        let window = axis.window(DateRange::new(0, 1)).unwrap();
        assert!(window.contains("2024-01-01"));
        assert!(window.contains("2024-01-02"));
        assert!(!window.contains("2024-01-03"));
    }

    #[test]
    fn window_clamps_to_last_index() {
        let axis = axis_of(&["2024-01-01", "2024-01-02"]);
        let window = axis.window(DateRange::new(1, 9)).unwrap();
        assert_eq!(window.end, "2024-01-02");
        assert_eq!(axis.dates_in(DateRange::new(0, 9)).len(), 2);
    }

    #[test]
    fn empty_axis_has_no_window() {
        let axis = DateAxis::default();
        assert!(axis.window(axis.full_range()).is_none());
        assert!(axis.dates_in(axis.full_range()).is_empty());
    }

    #[test]
    fn single_date_disables_range_control() {
        let axis = axis_of(&["2024-02-10", "2024-02-10"]);
        let control = axis.range_control();
        assert_eq!(
            control,
            RangeControl::Disabled {
                only_date: Some("2024-02-10".to_owned())
            }
        );
        assert_eq!(control.label(&axis), "2024-02-10 (only one date available)");
    }

    #[test]
    fn enabled_range_control_labels_full_range() {
        let axis = axis_of(&["2024-01-01", "2024-01-05"]);
        let control = axis.range_control();
        assert_eq!(control, RangeControl::Enabled { max_index: 1 });
        assert_eq!(control.label(&axis), "2024-01-01 - 2024-01-05");
    }

    #[test]
    fn format_short_drops_year_and_padding() {
        assert_eq!(format_short("2024-01-05"), "1/5");
        assert_eq!(format_short("2024-12-31"), "12/31");
        assert_eq!(format_short("yesterday"), "yesterday");
    }

    #[test]
    fn short_label_wraps_in_parentheses() {
        let window = DateWindow {
            start: "2024-01-05".to_owned(),
            end: "2024-01-09".to_owned(),
        };
        assert_eq!(window.short_label(), "(1/5 - 1/9)");
        assert_eq!(window.label(), "2024-01-05 - 2024-01-09");
    }
}
