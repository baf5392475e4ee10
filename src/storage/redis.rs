//! Redis-backed session store
//!
//! Persists each Game as JSON under a prefixed session key with the
//! configured TTL, so idle sessions age out on their own.

use async_trait::async_trait;
use redis::AsyncCommands;
use tracing::{debug, error};

use super::GameStore;
use crate::config::RedisConfig;
use crate::models::Game;
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct RedisGameStore {
    connection_manager: redis::aio::ConnectionManager,
    config: RedisConfig,
}

impl RedisGameStore {
    /// Create a new store instance connected to the configured Redis.
    pub async fn new(config: RedisConfig) -> Result<Self> {
        let client = redis::Client::open(config.url.as_str())?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            config,
        })
    }

    fn game_key(&self, session_id: &str) -> String {
        format!("{}game:{}", self.config.prefix, session_id)
    }
}

#[async_trait]
impl GameStore for RedisGameStore {
    async fn load_game(&self, session_id: &str) -> Result<Game> {
        let key = self.game_key(session_id);
        let mut conn = self.connection_manager.clone();

        let serialized: Option<String> = match conn.get(&key).await {
            Ok(data) => data,
            Err(e) => {
                error!(session_id = %session_id, error = %e, "Failed to get game from Redis");
                return Err(e.into());
            }
        };

        match serialized {
            Some(data) => {
                let game: Game = match serde_json::from_str(&data) {
                    Ok(game) => game,
                    Err(e) => {
                        error!(session_id = %session_id, error = %e, "Failed to deserialize game");
                        return Err(e.into());
                    }
                };
                debug!(session_id = %session_id, players = game.players.len(), "Game loaded from Redis");
                Ok(game)
            }
            None => {
                debug!(session_id = %session_id, "No game stored, starting empty");
                Ok(Game::new())
            }
        }
    }

    async fn save_game(&self, session_id: &str, game: &Game) -> Result<()> {
        let key = self.game_key(session_id);
        let serialized = serde_json::to_string(game)?;
        let mut conn = self.connection_manager.clone();

        match conn
            .set_ex::<_, _, ()>(&key, serialized, self.config.ttl_seconds)
            .await
        {
            Ok(_) => {
                debug!(session_id = %session_id, key = %key, ttl_seconds = self.config.ttl_seconds,
                       "Game saved to Redis");
                Ok(())
            }
            Err(e) => {
                error!(session_id = %session_id, error = %e, "Failed to save game to Redis");
                Err(e.into())
            }
        }
    }
}

impl std::fmt::Debug for RedisGameStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisGameStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
