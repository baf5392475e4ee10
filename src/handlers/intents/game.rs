//! Game lifecycle intents: start a new round, reset the roster.

use tracing::info;

use crate::models::request::SessionInfo;
use crate::models::response::SkillResponse;
use crate::models::Game;
use crate::skill::SkillContext;
use crate::speech;
use crate::storage::GameStore;
use crate::utils::errors::Result;

/// Zero every player's score and start over with the existing roster.
pub async fn handle_new_game(
    store: &dyn GameStore,
    session: &SessionInfo,
    ctx: &SkillContext,
) -> Result<SkillResponse> {
    let mut game = store.load_game(&session.session_id).await?;

    if game.players.is_empty() {
        return Ok(SkillResponse::ask(speech::NEW_GAME_ONBOARDING));
    }

    game.reset_scores();
    store.save_game(&session.session_id, &game).await?;
    info!(session_id = %session.session_id, players = game.players.len(),
          "Scores reset for new game");

    let mut speech_output = format!(
        "New game started with {} existing player{}.",
        game.players.len(),
        if game.players.len() > 1 { "s" } else { "" }
    );

    if ctx.need_more_help {
        speech_output.push(' ');
        speech_output.push_str(speech::MENU_PROMPT);
        Ok(SkillResponse::ask_with_reprompt(
            speech_output,
            speech::MENU_PROMPT,
        ))
    } else {
        Ok(SkillResponse::tell(speech_output))
    }
}

/// Discard the current game entirely and persist a fresh empty one.
pub async fn handle_reset_players(
    store: &dyn GameStore,
    session: &SessionInfo,
) -> Result<SkillResponse> {
    let game = Game::new();
    store.save_game(&session.session_id, &game).await?;
    info!(session_id = %session.session_id, "All players reset");

    Ok(SkillResponse::tell(speech::RESET_FAREWELL))
}
