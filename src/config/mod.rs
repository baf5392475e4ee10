//! Configuration management module
//!
//! This module handles loading and validation of skill configuration
//! from TOML files and environment variables.

pub mod settings;
pub mod validation;

pub use settings::{LoggingConfig, RedisConfig, Settings, StorageConfig};
