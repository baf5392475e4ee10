//! Request dispatch
//!
//! Routes an inbound envelope to the matching event or intent handler.
//! Lifecycle notifications produce no response; launch and intent requests
//! produce exactly one.

use std::sync::Arc;

use tracing::{debug, info};

use super::context::SkillContext;
use super::intent::Intent;
use crate::handlers::{events, intents};
use crate::models::request::{RequestBody, RequestEnvelope};
use crate::models::response::SkillResponse;
use crate::storage::GameStore;
use crate::utils::errors::Result;

pub struct Skill {
    store: Arc<dyn GameStore>,
}

impl Skill {
    pub fn new(store: Arc<dyn GameStore>) -> Self {
        Self { store }
    }

    /// Handle one request envelope. The caller owns one `SkillContext` per
    /// session and passes it into every invocation for that session.
    pub async fn handle(
        &self,
        envelope: &RequestEnvelope,
        ctx: &mut SkillContext,
    ) -> Result<Option<SkillResponse>> {
        let session = &envelope.session;
        let store = self.store.as_ref();

        // The platform marks the first request of a session instead of
        // sending a separate notification for one-shot commands.
        if session.is_new || matches!(envelope.request, RequestBody::SessionStarted) {
            events::on_session_started(ctx);
        }

        match &envelope.request {
            RequestBody::SessionStarted => {
                debug!(session_id = %session.session_id, "Session started");
                Ok(None)
            }
            RequestBody::SessionEnded => {
                debug!(session_id = %session.session_id, "Session ended");
                Ok(None)
            }
            RequestBody::Launch => {
                info!(session_id = %session.session_id, "Launch request");
                events::on_launch(store, session).await.map(Some)
            }
            RequestBody::Intent { intent } => {
                let intent = Intent::from_request(intent)?;
                info!(session_id = %session.session_id, intent = ?intent, "Intent request");

                let response = match intent {
                    Intent::NewGame => intents::game::handle_new_game(store, session, ctx).await?,
                    Intent::AddPlayer { player_name } => {
                        intents::player::handle_add_player(
                            store,
                            session,
                            ctx,
                            player_name.as_deref(),
                        )
                        .await?
                    }
                    Intent::AddScore { player_name, score } => {
                        intents::score::handle_add_score(
                            store,
                            session,
                            player_name.as_deref(),
                            score.as_deref(),
                        )
                        .await?
                    }
                    Intent::TellScores => {
                        intents::score::handle_tell_scores(store, session).await?
                    }
                    Intent::ResetPlayers => {
                        intents::game::handle_reset_players(store, session).await?
                    }
                    Intent::Help => intents::builtins::handle_help(ctx),
                    Intent::Cancel | Intent::Stop => intents::builtins::handle_stop(ctx),
                };

                Ok(Some(response))
            }
        }
    }
}

impl std::fmt::Debug for Skill {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Skill").finish_non_exhaustive()
    }
}
