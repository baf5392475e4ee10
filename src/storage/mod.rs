//! Session store module
//!
//! Persistence contract for the Game aggregate, plus the Redis-backed and
//! in-memory adapters. A handler performs exactly one load and one save per
//! invocation; the store owns nothing in between.

pub mod memory;
pub mod redis;

use async_trait::async_trait;

use crate::models::Game;
use crate::utils::errors::Result;

/// Per-session persistence contract for the Game aggregate.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Load the game for a session, or a fresh empty game when the session
    /// has nothing stored yet.
    async fn load_game(&self, session_id: &str) -> Result<Game>;

    /// Persist the game for a session.
    async fn save_game(&self, session_id: &str, game: &Game) -> Result<()>;
}

pub use self::memory::InMemoryGameStore;
pub use self::redis::RedisGameStore;
