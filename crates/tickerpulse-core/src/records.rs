//! Row types of the three exported dashboard datasets.
//!
//! Dates are kept as the zero-padded `YYYY-MM-DD` strings the export writes,
//! so lexicographic comparison is chronological comparison.

use serde::{Deserialize, Serialize};

/// Common read-only view over every dataset row, used by the range/ticker
/// filter and the per-ticker aggregation.
pub trait TickerRecord {
    /// Calendar date of the row, or `None` for dateless legacy rows.
    fn date(&self) -> Option<&str>;

    fn ticker(&self) -> &str;

    /// Mentions carried by the row; `None` when the row has no count.
    fn mention_count(&self) -> Option<u64>;

    /// Average sentiment score carried by the row, if any.
    fn score(&self) -> Option<f64>;
}

/// Daily average sentiment for one ticker (`sentiment_over_time.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    pub date: String,
    pub ticker: String,
    #[serde(default)]
    pub avg_overall_score: Option<f64>,
}

/// Daily mention count for one ticker (`mentions_over_time.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentionRecord {
    pub date: String,
    pub ticker: String,
    pub mention_count: u64,
}

/// Latest-day engagement snapshot (`engagement_by_ticker.json`).
///
/// Older exports omit `date`; such rows are never excluded by a date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub ticker: String,
    #[serde(default)]
    pub mention_count: Option<u64>,
    #[serde(default)]
    pub avg_overall_score: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_comments: Option<u64>,
}

impl TickerRecord for SentimentRecord {
    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }

    fn ticker(&self) -> &str {
        &self.ticker
    }

    fn mention_count(&self) -> Option<u64> {
        None
    }

    fn score(&self) -> Option<f64> {
        self.avg_overall_score
    }
}

impl TickerRecord for MentionRecord {
    fn date(&self) -> Option<&str> {
        Some(&self.date)
    }

    fn ticker(&self) -> &str {
        &self.ticker
    }

    fn mention_count(&self) -> Option<u64> {
        Some(self.mention_count)
    }

    fn score(&self) -> Option<f64> {
        None
    }
}

impl TickerRecord for EngagementRecord {
    fn date(&self) -> Option<&str> {
        self.date.as_deref()
    }

    fn ticker(&self) -> &str {
        &self.ticker
    }

    fn mention_count(&self) -> Option<u64> {
        self.mention_count
    }

    fn score(&self) -> Option<f64> {
        self.avg_overall_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_null_score_deserializes_to_none() {
        let rec: SentimentRecord = serde_json::from_str(
            r#"{"date":"2024-01-02","ticker":"AAA","avg_overall_score":null}"#,
        )
        .unwrap();
        assert_eq!(rec.avg_overall_score, None);
        assert_eq!(rec.date(), Some("2024-01-02"));
    }

    #[test]
    fn sentiment_missing_score_deserializes_to_none() {
        let rec: SentimentRecord =
            serde_json::from_str(r#"{"date":"2024-01-02","ticker":"AAA"}"#).unwrap();
        assert!(rec.score().is_none());
        assert!(rec.mention_count().is_none());
    }

    #[test]
    fn legacy_engagement_row_has_no_date() {
        let rec: EngagementRecord = serde_json::from_str(
            r#"{"ticker":"GME","avg_overall_score":0.12,"total_comments":340,"mention_count":17}"#,
        )
        .unwrap();
        assert!(rec.date().is_none());
        assert_eq!(rec.mention_count(), Some(17));
        assert_eq!(rec.total_comments, Some(340));
    }

    #[test]
    fn mention_record_rejects_negative_count() {
        let result = serde_json::from_str::<MentionRecord>(
            r#"{"date":"2024-01-02","ticker":"AAA","mention_count":-3}"#,
        );
        assert!(result.is_err());
    }
}
