//! Lifecycle event handlers
//!
//! React to session-start notifications and launch requests. Session start
//! only adjusts the phrasing context; launch greets the user with a
//! reprompt picked from the state of their game.

use tracing::debug;

use crate::models::request::SessionInfo;
use crate::models::response::SkillResponse;
use crate::skill::SkillContext;
use crate::speech;
use crate::storage::GameStore;
use crate::utils::errors::Result;

/// A fresh session may come from a one-shot command, so keep the responses
/// short until the user asks for help.
pub fn on_session_started(ctx: &mut SkillContext) {
    ctx.need_more_help = false;
}

/// Greet the user. The reprompt depends on where their game stands: full
/// help before any points exist, next-step help once scoring has started.
pub async fn on_launch(store: &dyn GameStore, session: &SessionInfo) -> Result<SkillResponse> {
    let game = store.load_game(&session.session_id).await?;

    debug!(session_id = %session.session_id, players = game.players.len(),
           empty_score = game.is_empty_score(), "Selecting launch greeting");

    let response = if game.players.is_empty() {
        SkillResponse::ask(speech::GREETING)
    } else if game.is_empty_score() {
        SkillResponse::ask_with_reprompt(speech::GREETING, speech::COMPLETE_HELP)
    } else {
        SkillResponse::ask_with_reprompt(speech::GREETING, speech::NEXT_HELP)
    };

    Ok(response)
}
