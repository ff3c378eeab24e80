//! Configuration management for DrinkCraft
//!
//! Layers an optional `drinkcraft.toml` and `DRINKCRAFT_*` environment
//! variables over built-in defaults.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::drink::DrinkType;

/// Complete application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Default log filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Drink type the builder starts with
    #[serde(default)]
    pub default_drink: DrinkType,

    #[serde(default)]
    pub rate_limit: RateLimitConfig,

    #[serde(default)]
    pub input: InputConfig,
}

/// Attempt limiter settings, shared by every auth action
#[derive(Debug, Deserialize, Clone)]
pub struct RateLimitConfig {
    /// Attempts allowed inside one window
    /// Environment: DRINKCRAFT_RATE_LIMIT__MAX_ATTEMPTS
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,

    /// Length of the trailing window in seconds
    /// Environment: DRINKCRAFT_RATE_LIMIT__WINDOW_SECS
    #[serde(default = "default_window_secs")]
    pub window_secs: u64,
}

/// Length bounds applied to free-text fields
#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    #[serde(default = "default_display_name_max_length")]
    pub display_name_max_length: usize,

    #[serde(default = "default_drink_name_max_length")]
    pub drink_name_max_length: usize,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_attempts() -> usize {
    5
}

fn default_window_secs() -> u64 {
    15 * 60
}

fn default_display_name_max_length() -> usize {
    50
}

fn default_drink_name_max_length() -> usize {
    60
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_drink: DrinkType::default(),
            rate_limit: RateLimitConfig::default(),
            input: InputConfig::default(),
        }
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            window_secs: default_window_secs(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            display_name_max_length: default_display_name_max_length(),
            drink_name_max_length: default_drink_name_max_length(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `drinkcraft.toml` (if present) with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("drinkcraft")
    }

    /// Load configuration from the given file stem; a missing file falls back to defaults
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix("DRINKCRAFT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.rate_limit.max_attempts == 0 {
            return Err(config::ConfigError::Message(
                "rate_limit.max_attempts must be greater than 0".into(),
            ));
        }

        if self.rate_limit.window_secs == 0 {
            return Err(config::ConfigError::Message(
                "rate_limit.window_secs must be greater than 0".into(),
            ));
        }

        if self.input.display_name_max_length == 0 {
            return Err(config::ConfigError::Message(
                "input.display_name_max_length must be greater than 0".into(),
            ));
        }

        if self.input.drink_name_max_length == 0 {
            return Err(config::ConfigError::Message(
                "input.drink_name_max_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

impl RateLimitConfig {
    /// Get the window as a Duration
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_secs)
    }
}
