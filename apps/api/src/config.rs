use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Text generation is disabled (fallback answers only) when unset.
    pub anthropic_api_key: Option<String>,
    /// Upper bound for a whole text-generation call, retries included.
    pub llm_timeout: Duration,
    /// Pins the mock-data generator so listings are reproducible.
    pub mock_data_seed: Option<u64>,
    pub usd_to_inr_rate: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            llm_timeout: Duration::from_secs(
                optional_env("LLM_TIMEOUT_SECS")
                    .map(|v| v.parse::<u64>())
                    .transpose()
                    .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?
                    .unwrap_or(8),
            ),
            mock_data_seed: optional_env("MOCK_DATA_SEED")
                .map(|v| v.parse::<u64>())
                .transpose()
                .context("MOCK_DATA_SEED must be an unsigned integer")?,
            usd_to_inr_rate: optional_env("USD_TO_INR_RATE")
                .map(|v| v.parse::<f64>())
                .transpose()
                .context("USD_TO_INR_RATE must be a number")?
                .unwrap_or(83.0),
        })
    }
}

/// Reads an env var, treating empty values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
