//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use ScoreBuddy::models::request::{IntentPayload, RequestBody, RequestEnvelope, SessionInfo, Slot};
use ScoreBuddy::models::Game;
use ScoreBuddy::skill::Skill;
use ScoreBuddy::storage::{GameStore, InMemoryGameStore};

pub const SESSION_ID: &str = "amzn1.echo-api.session.test";

/// A skill wired to an in-memory store the test can inspect directly.
pub struct TestSkill {
    pub skill: Skill,
    pub store: Arc<InMemoryGameStore>,
}

pub fn test_skill() -> TestSkill {
    let store = Arc::new(InMemoryGameStore::new());
    let skill = Skill::new(store.clone());
    TestSkill { skill, store }
}

impl TestSkill {
    /// Load the stored game for the test session, bypassing the handlers.
    pub async fn stored_game(&self) -> Game {
        self.store.load_game(SESSION_ID).await.unwrap()
    }

    /// Seed the store with a game built from (player, score) pairs.
    pub async fn seed_game(&self, entries: &[(&str, i64)]) {
        let mut game = Game::new();
        for (player, score) in entries {
            game.add_player(player);
            game.apply_delta(player, *score);
        }
        self.store.save_game(SESSION_ID, &game).await.unwrap();
    }
}

pub fn launch_envelope() -> RequestEnvelope {
    envelope(RequestBody::Launch)
}

pub fn session_started_envelope() -> RequestEnvelope {
    envelope(RequestBody::SessionStarted)
}

pub fn session_ended_envelope() -> RequestEnvelope {
    envelope(RequestBody::SessionEnded)
}

pub fn intent_envelope(name: &str, slots: &[(&str, &str)]) -> RequestEnvelope {
    envelope(RequestBody::Intent {
        intent: IntentPayload {
            name: name.to_string(),
            slots: slots
                .iter()
                .map(|(slot_name, value)| {
                    (
                        slot_name.to_string(),
                        Slot {
                            name: slot_name.to_string(),
                            value: Some(value.to_string()),
                        },
                    )
                })
                .collect::<HashMap<_, _>>(),
        },
    })
}

fn envelope(request: RequestBody) -> RequestEnvelope {
    RequestEnvelope {
        session: SessionInfo {
            session_id: SESSION_ID.to_string(),
            is_new: false,
        },
        request,
    }
}
