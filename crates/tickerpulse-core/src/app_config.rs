use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub data_dir: PathBuf,
    pub log_level: String,
    pub quote_api_key: Option<String>,
    pub quote_base_url: String,
    pub quote_timeout_secs: u64,
    pub quote_freshness_secs: u64,
    pub quote_user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("data_dir", &self.data_dir)
            .field("log_level", &self.log_level)
            .field(
                "quote_api_key",
                &self.quote_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("quote_base_url", &self.quote_base_url)
            .field("quote_timeout_secs", &self.quote_timeout_secs)
            .field("quote_freshness_secs", &self.quote_freshness_secs)
            .field("quote_user_agent", &self.quote_user_agent)
            .finish()
    }
}
