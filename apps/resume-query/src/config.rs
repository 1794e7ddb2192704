use std::time::Duration;

use anyhow::{Context, Result};

/// Year substituted for "present" / "current" / "now" when no override is set.
pub const DEFAULT_REFERENCE_YEAR: i32 = 2024;
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Process configuration loaded once from the environment and handed to constructors.
/// Nothing here is read again after startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Year used to close open-ended date ranges such as `2020-present`.
    pub reference_year: i32,
    /// Deadline applied to every call into an optional intelligence service.
    pub service_timeout: Duration,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference_year: DEFAULT_REFERENCE_YEAR,
            service_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let reference_year = optional_env("REFERENCE_YEAR")
            .map(|v| {
                v.parse::<i32>()
                    .context("REFERENCE_YEAR must be a four-digit year")
            })
            .transpose()?
            .unwrap_or(DEFAULT_REFERENCE_YEAR);

        let timeout_secs = optional_env("INTELLIGENCE_TIMEOUT_SECS")
            .map(|v| {
                v.parse::<u64>()
                    .context("INTELLIGENCE_TIMEOUT_SECS must be a whole number of seconds")
            })
            .transpose()?
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Config {
            reference_year,
            service_timeout: Duration::from_secs(timeout_secs),
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
