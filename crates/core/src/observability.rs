//! Structured logging for Savora services
//!
//! Thin wrapper around `tracing-subscriber` so every service and test
//! harness initializes logging the same way. Log level and format come
//! from `LogConfig`, which defaults to the `RUST_LOG` environment filter.

use crate::config::{env_string, ConfigLoader};
use crate::error::SavoraError;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Logging initialization errors
#[derive(Debug, Error)]
pub enum ObservabilityError {
    #[error("Failed to set global tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Output format for structured logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable output for local development
    Pretty,
    /// JSON lines for log aggregation
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "savora_palate=debug"
    pub level: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl ConfigLoader for LogConfig {
    fn from_env() -> Result<Self, SavoraError> {
        let level = env_string("LOG_LEVEL", "info");
        let format = match env_string("LOG_FORMAT", "pretty").as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        };
        Ok(Self { level, format })
    }

    fn validate(&self) -> Result<(), SavoraError> {
        if self.level.is_empty() {
            return Err(SavoraError::configuration("Log level must not be empty"));
        }
        Ok(())
    }
}

/// Initialize the global tracing subscriber
///
/// Honors `RUST_LOG` when set, falling back to the configured level.
/// Calling this twice returns an error from the underlying subscriber;
/// tests should prefer `try_init_logging`.
pub fn init_logging(config: &LogConfig) -> Result<(), ObservabilityError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.try_init(),
    };

    result.map_err(|e| ObservabilityError::SubscriberInit(e.to_string()))?;
    tracing::debug!(level = %config.level, "logging initialized");
    Ok(())
}

/// Initialize logging, ignoring an already-set subscriber
///
/// Intended for tests where multiple suites race to initialize.
pub fn try_init_logging(config: &LogConfig) {
    let _ = init_logging(config);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_config_default() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_config_rejects_empty_level() {
        let config = LogConfig {
            level: String::new(),
            format: LogFormat::Json,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_try_init_logging_is_idempotent() {
        let config = LogConfig::default();
        try_init_logging(&config);
        try_init_logging(&config);
    }
}
