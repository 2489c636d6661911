// src/config.rs

//! Crawler configuration.

use std::env;

use crate::error::{AppError, Result};

/// Default frontier table name.
pub const DEFAULT_TABLE_NAME: &str = "crawler-urls";

/// Default traversal depth limit.
pub const DEFAULT_MAX_DEPTH: u32 = 4;

/// Default per-request timeout in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// Default cap on buffered response bodies (10 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Crawling behavior settings.
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Frontier table receiving fan-out entries
    pub table_name: String,

    /// Entries at this depth or beyond are not fetched
    pub max_depth: u32,

    /// Connection/response timeout per fetch, in seconds
    pub fetch_timeout_secs: u64,

    /// Maximum buffered response body size in bytes
    pub max_body_bytes: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            table_name: DEFAULT_TABLE_NAME.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl CrawlerConfig {
    /// Build configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(table) = env::var("FRONTIER_TABLE") {
            config.table_name = table;
        }
        if let Some(depth) = env_parse("MAX_DEPTH") {
            config.max_depth = depth;
        }
        if let Some(secs) = env_parse("FETCH_TIMEOUT_SECS") {
            config.fetch_timeout_secs = secs;
        }
        if let Some(bytes) = env_parse("MAX_BODY_BYTES") {
            config.max_body_bytes = bytes;
        }

        config
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.table_name.trim().is_empty() {
            return Err(AppError::config("table_name is empty"));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(AppError::config("fetch_timeout_secs must be > 0"));
        }
        if self.max_body_bytes == 0 {
            return Err(AppError::config("max_body_bytes must be > 0"));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(CrawlerConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_table_name() {
        let mut config = CrawlerConfig::default();
        config.table_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = CrawlerConfig::default();
        config.fetch_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_zero_max_depth() {
        // A zero limit is legal: every entry stops at the guard.
        let mut config = CrawlerConfig::default();
        config.max_depth = 0;
        assert!(config.validate().is_ok());
    }
}
