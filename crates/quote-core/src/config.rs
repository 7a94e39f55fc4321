//! Session Configuration
//!
//! Storage key, autosave quiet period and log level.

use std::time::Duration;

use serde::Deserialize;

/// Key of the durable entry holding the saved quotes
pub const DEFAULT_STORAGE_KEY: &str = "quote-pad.items";

/// Quiet period after the last edit before an autosave is written
pub const DEFAULT_QUIET_PERIOD_MS: u64 = 3000;

/// Settings for a quote session
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Durable entry holding the JSON array of quotes
    pub storage_key: String,
    /// Debounce window in milliseconds
    pub quiet_period_ms: u64,
    /// Maximum log level ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            quiet_period_ms: DEFAULT_QUIET_PERIOD_MS,
            log_level: "info".to_string(),
        }
    }
}

impl SessionConfig {
    /// Parse an optional JSON override; missing or malformed input yields defaults
    pub fn from_json_or_default(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring malformed session config: {}", e);
                Self::default()
            }
        }
    }

    pub fn quiet_period(&self) -> Duration {
        Duration::from_millis(self.quiet_period_ms)
    }

    /// Configured log level, `Info` when unrecognized
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
