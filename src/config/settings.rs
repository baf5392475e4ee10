//! Skill settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main skill configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub storage: StorageConfig,
    pub logging: LoggingConfig,
}

/// Session store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Which store backs the sessions: "redis" or "memory"
    pub backend: String,
    pub redis: RedisConfig,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedisConfig {
    pub url: String,
    pub prefix: String,
    pub ttl_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("SCOREBUDDY").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::ScoreBuddyError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                backend: "redis".to_string(),
                redis: RedisConfig {
                    url: "redis://localhost:6379".to_string(),
                    prefix: "scorebuddy:".to_string(),
                    ttl_seconds: 86400,
                },
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/scorebuddy".to_string(),
            },
        }
    }
}
