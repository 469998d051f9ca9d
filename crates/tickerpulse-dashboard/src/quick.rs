//! "Top N" quick selections over the whole datasets.

use std::cmp::Ordering;
use std::collections::HashMap;

use tickerpulse_core::{MentionRecord, SentimentRecord};

/// The `n` most mentioned tickers across every date, most mentioned first.
/// Ties keep first-occurrence order.
#[must_use]
pub fn top_by_mentions(mentions: &[MentionRecord], n: usize) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for m in mentions {
        *totals.entry(m.ticker.as_str()).or_insert_with(|| {
            order.push(m.ticker.as_str());
            0
        }) += m.mention_count;
    }

    order.sort_by(|a, b| totals[b].cmp(&totals[a]));
    order.into_iter().take(n).map(str::to_owned).collect()
}

/// The `n` tickers with the highest mean sentiment score across every date.
///
/// Null scores are ignored; a ticker with no score at all ranks after every
/// scored ticker. Ties keep first-occurrence order.
#[must_use]
pub fn top_by_sentiment(sentiment: &[SentimentRecord], n: usize) -> Vec<String> {
    let mut order: Vec<&str> = Vec::new();
    let mut sums: HashMap<&str, (f64, u32)> = HashMap::new();
    for s in sentiment {
        let entry = sums.entry(s.ticker.as_str()).or_insert_with(|| {
            order.push(s.ticker.as_str());
            (0.0, 0)
        });
        if let Some(score) = s.avg_overall_score {
            entry.0 += score;
            entry.1 += 1;
        }
    }

    let mean = |ticker: &str| {
        let (sum, count) = sums[ticker];
        (count > 0).then(|| sum / f64::from(count))
    };

    order.sort_by(|a, b| match (mean(*a), mean(*b)) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    order.into_iter().take(n).map(str::to_owned).collect()
}
