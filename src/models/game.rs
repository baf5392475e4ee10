//! Game aggregate
//!
//! The per-session collection of players and their scores. `players` and
//! `scores` are kept in lockstep by every mutation: each roster entry has
//! exactly one score entry and vice versa.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    /// Ordered player names; duplicates are rejected by the handlers.
    pub players: Vec<String>,
    /// Current score per player.
    pub scores: HashMap<String, i64>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            players: Vec::new(),
            scores: HashMap::new(),
            updated_at: Utc::now(),
        }
    }

    /// True when there are no players or every score is zero.
    pub fn is_empty_score(&self) -> bool {
        self.players
            .iter()
            .all(|p| self.scores.get(p).copied().unwrap_or(0) == 0)
    }

    pub fn has_player(&self, name: &str) -> bool {
        self.scores.contains_key(name)
    }

    pub fn score_of(&self, name: &str) -> Option<i64> {
        self.scores.get(name).copied()
    }

    /// Append a player with a zero score. Returns false when the name is
    /// already in the game, leaving the state unchanged.
    pub fn add_player(&mut self, name: &str) -> bool {
        if self.has_player(name) {
            return false;
        }
        self.players.push(name.to_string());
        self.scores.insert(name.to_string(), 0);
        self.updated_at = Utc::now();
        true
    }

    /// Reset every player's score to zero, keeping the roster.
    pub fn reset_scores(&mut self) {
        for player in &self.players {
            self.scores.insert(player.clone(), 0);
        }
        self.updated_at = Utc::now();
    }

    /// Add a delta (possibly negative, no floor) to an existing player's
    /// score and return the new total. Unknown players leave the game
    /// untouched.
    pub fn apply_delta(&mut self, name: &str, delta: i64) -> Option<i64> {
        let score = self.scores.get_mut(name)?;
        *score += delta;
        self.updated_at = Utc::now();
        Some(*score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_is_empty() {
        let game = Game::new();
        assert!(game.players.is_empty());
        assert!(game.scores.is_empty());
        assert!(game.is_empty_score());
    }

    #[test]
    fn test_add_player_keeps_lockstep() {
        let mut game = Game::new();
        assert!(game.add_player("alice"));
        assert!(game.add_player("bob"));
        assert_eq!(game.players.len(), game.scores.len());
        assert_eq!(game.score_of("alice"), Some(0));
    }

    #[test]
    fn test_duplicate_player_rejected() {
        let mut game = Game::new();
        assert!(game.add_player("alice"));
        assert!(!game.add_player("alice"));
        assert_eq!(game.players, vec!["alice"]);
        assert_eq!(game.scores.len(), 1);
    }

    #[test]
    fn test_apply_delta_allows_negative_totals() {
        let mut game = Game::new();
        game.add_player("alice");
        assert_eq!(game.apply_delta("alice", 3), Some(3));
        assert_eq!(game.apply_delta("alice", -5), Some(-2));
        assert_eq!(game.apply_delta("ghost", 1), None);
    }

    #[test]
    fn test_reset_scores_keeps_roster() {
        let mut game = Game::new();
        game.add_player("alice");
        game.add_player("bob");
        game.apply_delta("alice", 3);
        game.apply_delta("bob", 5);
        assert!(!game.is_empty_score());

        game.reset_scores();
        assert_eq!(game.players, vec!["alice", "bob"]);
        assert_eq!(game.score_of("alice"), Some(0));
        assert_eq!(game.score_of("bob"), Some(0));
        assert!(game.is_empty_score());
    }
}
