//! Error handling for ScoreBuddy
//!
//! This module defines the main error types used throughout the skill
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the ScoreBuddy skill
#[derive(Error, Debug)]
pub enum ScoreBuddyError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown intent: {0}")]
    UnknownIntent(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for ScoreBuddy operations
pub type Result<T> = std::result::Result<T, ScoreBuddyError>;

impl ScoreBuddyError {
    /// Check if the error is recoverable
    ///
    /// The invocation driver keeps serving requests after a recoverable
    /// failure and shuts down otherwise.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ScoreBuddyError::Redis(_) => true,
            ScoreBuddyError::Serialization(_) => false,
            ScoreBuddyError::Io(_) => true,
            ScoreBuddyError::Config(_) => false,
            ScoreBuddyError::UnknownIntent(_) => true,
            ScoreBuddyError::InvalidInput(_) => true,
        }
    }
}
