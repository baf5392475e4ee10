//! In-memory session store
//!
//! Keeps games in a mutexed map. Used by the test suite and by local runs
//! configured with the "memory" backend.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::GameStore;
use crate::models::Game;
use crate::utils::errors::Result;

#[derive(Debug, Default)]
pub struct InMemoryGameStore {
    games: Mutex<HashMap<String, Game>>,
}

impl InMemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for InMemoryGameStore {
    async fn load_game(&self, session_id: &str) -> Result<Game> {
        let games = self.games.lock().await;
        Ok(games.get(session_id).cloned().unwrap_or_default())
    }

    async fn save_game(&self, session_id: &str, game: &Game) -> Result<()> {
        let mut games = self.games.lock().await;
        games.insert(session_id.to_string(), game.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults_to_empty_game() {
        let store = InMemoryGameStore::new();
        let game = tokio_test::block_on(store.load_game("missing")).unwrap();
        assert!(game.players.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = InMemoryGameStore::new();
        let mut game = Game::new();
        game.add_player("alice");
        game.apply_delta("alice", 4);

        tokio_test::block_on(store.save_game("s1", &game)).unwrap();
        let loaded = tokio_test::block_on(store.load_game("s1")).unwrap();

        assert_eq!(loaded.players, vec!["alice"]);
        assert_eq!(loaded.score_of("alice"), Some(4));
    }

    #[test]
    fn test_sessions_are_independent() {
        let store = InMemoryGameStore::new();
        let mut game = Game::new();
        game.add_player("bob");

        tokio_test::block_on(store.save_game("s1", &game)).unwrap();
        let other = tokio_test::block_on(store.load_game("s2")).unwrap();

        assert!(other.players.is_empty());
    }
}
