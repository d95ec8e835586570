//! Configuration management for the assistant bot.
//!
//! This module handles loading and validating configuration from environment
//! variables. Everything has a default, so the bot starts with no
//! environment at all.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the assistant bot.
#[derive(Debug, Clone)]
pub struct Config {
    /// Size of the upcoming-birthday window in days (default: 7)
    pub birthday_window_days: u64,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `BIRTHDAY_WINDOW_DAYS`: upcoming-birthday window in days
    ///   (default: 7, must be 1..=366)
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let birthday_window_days = Self::parse_env_u64("BIRTHDAY_WINDOW_DAYS", 7)?;

        // A window outside one year would make the next-occurrence
        // projection ambiguous
        if !(1..=366).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: "Must be between 1 and 366".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            birthday_window_days,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            birthday_window_days: 7,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("BIRTHDAY_WINDOW_DAYS");
        env::remove_var("LOG_LEVEL");
    }

    #[test]
    #[serial]
    fn test_defaults_with_empty_environment() {
        clear_env();
        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 7);
        assert_eq!(config.log_level, "error");
    }

    #[test]
    #[serial]
    fn test_window_override() {
        clear_env();
        env::set_var("BIRTHDAY_WINDOW_DAYS", "14");
        let config = Config::from_env().unwrap();
        assert_eq!(config.birthday_window_days, 14);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_window_out_of_range_rejected() {
        clear_env();
        for bad in ["0", "367", "-3", "soon"] {
            env::set_var("BIRTHDAY_WINDOW_DAYS", bad);
            assert!(Config::from_env().is_err(), "accepted {:?}", bad);
        }
        clear_env();
    }

    #[test]
    #[serial]
    fn test_log_level_override() {
        clear_env();
        env::set_var("LOG_LEVEL", "debug");
        let config = Config::from_env().unwrap();
        assert_eq!(config.log_level, "debug");
        clear_env();
    }
}
