//! ScoreBuddy Voice Skill
//!
//! Intent and event handling for a voice-assistant skill that keeps a small
//! per-session game of players and scores and walks the user through their
//! morning routine. The platform transport and request verification are
//! handled upstream; this library reacts to already-parsed requests and
//! returns spoken responses.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod models;
pub mod skill;
pub mod speech;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{Result, ScoreBuddyError};

// Re-export main components for easy access
pub use models::{Game, RequestEnvelope, SkillResponse};
pub use skill::{Intent, Skill, SkillContext};
pub use storage::{GameStore, InMemoryGameStore, RedisGameStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
