//! Shared types for tickerpulse: dashboard records, the record store loader,
//! and environment-driven application configuration.

pub mod app_config;
pub mod config;
pub mod dataset;
pub mod error;
pub mod records;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use dataset::{
    load_datasets, Datasets, ENGAGEMENT_FILE, MENTIONS_FILE, SENTIMENT_FILE,
};
pub use error::{ConfigError, LoadError};
pub use records::{EngagementRecord, MentionRecord, SentimentRecord, TickerRecord};
