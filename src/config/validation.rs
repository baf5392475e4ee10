//! Configuration validation module
//!
//! This module provides validation functions for skill configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{Result, ScoreBuddyError};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_storage_config(&settings.storage)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate session store configuration
fn validate_storage_config(config: &super::StorageConfig) -> Result<()> {
    let valid_backends = ["redis", "memory"];
    if !valid_backends.contains(&config.backend.as_str()) {
        return Err(ScoreBuddyError::Config(format!(
            "Invalid storage backend: {}. Valid backends: {:?}",
            config.backend, valid_backends
        )));
    }

    if config.backend == "redis" {
        if config.redis.url.is_empty() {
            return Err(ScoreBuddyError::Config(
                "Redis URL is required".to_string(),
            ));
        }

        if config.redis.ttl_seconds == 0 {
            return Err(ScoreBuddyError::Config(
                "Session TTL must be greater than 0".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ScoreBuddyError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(ScoreBuddyError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_rejects_unknown_backend() {
        let mut settings = Settings::default();
        settings.storage.backend = "postgres".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_blank_redis_url() {
        let mut settings = Settings::default();
        settings.storage.redis.url = String::new();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_memory_backend_ignores_redis_url() {
        let mut settings = Settings::default();
        settings.storage.backend = "memory".to_string();
        settings.storage.redis.url = String::new();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_rejects_invalid_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
