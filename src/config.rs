//! Configuration management for the address book CLI.
//!
//! This module handles loading configuration from environment variables,
//! with an optional `.env` file picked up first.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default prompt shown before each command.
const DEFAULT_PROMPT: &str = "Enter a command: ";

/// Configuration for the address book CLI.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before reading each command
    pub prompt: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ADDRESS_BOOK_PROMPT`: prompt text (default: "Enter a command: ")
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let prompt = env::var("ADDRESS_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        if prompt.is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_PROMPT".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config { prompt, log_level })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.prompt, "Enter a command: ");
        assert_eq!(config.log_level, "error");
    }
}
