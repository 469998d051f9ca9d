use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default location of the exported dashboard JSON documents.
pub const DEFAULT_DATA_DIR: &str = "./docs/data";

/// Default Alpha Vantage query endpoint.
pub const DEFAULT_QUOTE_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("TICKERPULSE_ENV", "development"))?;

    let data_dir = PathBuf::from(or_default("TICKERPULSE_DATA_DIR", DEFAULT_DATA_DIR));
    let log_level = or_default("TICKERPULSE_LOG_LEVEL", "info");

    // An empty key is treated the same as an unset one.
    let quote_api_key = lookup("ALPHAVANTAGE_API_KEY")
        .ok()
        .filter(|k| !k.trim().is_empty());
    let quote_base_url = or_default("TICKERPULSE_QUOTE_BASE_URL", DEFAULT_QUOTE_BASE_URL);
    let quote_timeout_secs = parse_u64("TICKERPULSE_QUOTE_TIMEOUT_SECS", "30")?;
    let quote_freshness_secs = parse_u64("TICKERPULSE_QUOTE_FRESHNESS_SECS", "300")?;
    let quote_user_agent = or_default(
        "TICKERPULSE_QUOTE_USER_AGENT",
        "tickerpulse/0.1 (quote-banner)",
    );

    if quote_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TICKERPULSE_QUOTE_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        data_dir,
        log_level,
        quote_api_key,
        quote_base_url,
        quote_timeout_secs,
        quote_freshness_secs,
        quote_user_agent,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TICKERPULSE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
