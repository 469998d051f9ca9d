use std::path::Path;

use serde::de::DeserializeOwned;

use crate::records::{EngagementRecord, MentionRecord, SentimentRecord};
use crate::LoadError;

pub const SENTIMENT_FILE: &str = "sentiment_over_time.json";
pub const MENTIONS_FILE: &str = "mentions_over_time.json";
pub const ENGAGEMENT_FILE: &str = "engagement_by_ticker.json";

/// The three immutable datasets the dashboard is computed from.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    pub sentiment: Vec<SentimentRecord>,
    pub mentions: Vec<MentionRecord>,
    pub engagement: Vec<EngagementRecord>,
}

impl Datasets {
    #[must_use]
    pub fn from_parts(
        sentiment: Vec<SentimentRecord>,
        mentions: Vec<MentionRecord>,
        engagement: Vec<EngagementRecord>,
    ) -> Self {
        Self {
            sentiment,
            mentions,
            engagement,
        }
    }
}

/// Load all three dataset documents from `dir`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if a file cannot be read and
/// [`LoadError::Parse`] if it is not a JSON array of the expected rows.
/// The first failing file aborts the load.
pub fn load_datasets(dir: &Path) -> Result<Datasets, LoadError> {
    let sentiment: Vec<SentimentRecord> = read_json_array(&dir.join(SENTIMENT_FILE))?;
    let mentions: Vec<MentionRecord> = read_json_array(&dir.join(MENTIONS_FILE))?;
    let engagement: Vec<EngagementRecord> = read_json_array(&dir.join(ENGAGEMENT_FILE))?;

    tracing::info!(
        dir = %dir.display(),
        sentiment = sentiment.len(),
        mentions = mentions.len(),
        engagement = engagement.len(),
        "loaded dashboard datasets"
    );

    Ok(Datasets {
        sentiment,
        mentions,
        engagement,
    })
}

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| LoadError::Parse {
        path: path.display().to_string(),
        source: e,
    })
}
