//! Shared configuration loader module for Savora services
//!
//! Provides a unified configuration loading system with environment variable
//! parsing, validation, and support for .env files. All configuration uses
//! the `SAVORA_` prefix for environment variables.
//!
//! # Features
//!
//! - Environment variable parsing with typed values
//! - .env file support via dotenvy
//! - Configuration validation with clear error messages
//! - Default values for optional fields
//! - Configuration override hierarchy: defaults < .env < environment
//!
//! # Example
//!
//! ```no_run
//! use savora_core::config::{load_dotenv, ConfigLoader};
//!
//! # #[derive(Default)]
//! # struct MyConfig;
//! # impl ConfigLoader for MyConfig {
//! #     fn from_env() -> savora_core::Result<Self> { Ok(MyConfig) }
//! #     fn validate(&self) -> savora_core::Result<()> { Ok(()) }
//! # }
//! # fn example() -> savora_core::Result<()> {
//! load_dotenv();
//!
//! let config = MyConfig::from_env()?;
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

use crate::error::SavoraError;

/// Environment variable prefix for all Savora configuration
pub const ENV_PREFIX: &str = "SAVORA_";

/// Configuration loader trait
///
/// Provides standardized methods for loading and validating configuration
/// from environment variables.
pub trait ConfigLoader: Sized {
    /// Load configuration from environment variables
    ///
    /// Reads environment variables with the `SAVORA_` prefix and constructs
    /// a configuration instance with defaults for missing optional values.
    ///
    /// # Errors
    ///
    /// Returns a `Configuration` error if an environment variable value
    /// cannot be parsed.
    fn from_env() -> Result<Self, SavoraError>;

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any validation check fails.
    fn validate(&self) -> Result<(), SavoraError>;
}

/// Load a .env file if one is present
///
/// Missing .env files are not an error; explicit environment variables
/// always take precedence over .env entries.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Read an optional `SAVORA_`-prefixed f32 environment variable
///
/// Returns `default` when the variable is unset.
pub fn env_f32(name: &str, default: f32) -> Result<f32, SavoraError> {
    match std::env::var(format!("{}{}", ENV_PREFIX, name)) {
        Ok(raw) => raw.parse::<f32>().map_err(|_| {
            SavoraError::configuration(format!(
                "{}{} must be a number, got '{}'",
                ENV_PREFIX, name, raw
            ))
        }),
        Err(_) => Ok(default),
    }
}

/// Read an optional `SAVORA_`-prefixed usize environment variable
///
/// Returns `default` when the variable is unset.
pub fn env_usize(name: &str, default: usize) -> Result<usize, SavoraError> {
    match std::env::var(format!("{}{}", ENV_PREFIX, name)) {
        Ok(raw) => raw.parse::<usize>().map_err(|_| {
            SavoraError::configuration(format!(
                "{}{} must be a non-negative integer, got '{}'",
                ENV_PREFIX, name, raw
            ))
        }),
        Err(_) => Ok(default),
    }
}

/// Read an optional `SAVORA_`-prefixed string environment variable
pub fn env_string(name: &str, default: &str) -> String {
    std::env::var(format!("{}{}", ENV_PREFIX, name)).unwrap_or_else(|_| default.to_string())
}
