//! Player roster intent: add a player to the current game.

use tracing::info;

use crate::models::request::SessionInfo;
use crate::models::response::SkillResponse;
use crate::skill::SkillContext;
use crate::speech;
use crate::storage::GameStore;
use crate::utils::errors::Result;

/// Add a player, then close or continue the conversation depending on
/// whether the intent came from a one-shot command.
pub async fn handle_add_player(
    store: &dyn GameStore,
    session: &SessionInfo,
    ctx: &SkillContext,
    raw_name: Option<&str>,
) -> Result<SkillResponse> {
    let Some(name) = raw_name.and_then(speech::normalize_player_name) else {
        return Ok(SkillResponse::ask_with_reprompt(
            "OK. Who do you want to add?",
            "Who do you want to add?",
        ));
    };

    let mut game = store.load_game(&session.session_id).await?;

    if game.has_player(&name) {
        let speech_output = format!("{} has already joined the game.", name);
        return Ok(if ctx.need_more_help {
            SkillResponse::ask_with_reprompt(format!("{} What else?", speech_output), "What else?")
        } else {
            SkillResponse::tell(speech_output)
        });
    }

    let mut speech_output = format!("{} has joined your game. ", name);
    game.add_player(&name);

    // Outside help mode the reprompt stays None and the confirmation is a
    // plain tell.
    let mut reprompt: Option<&str> = None;
    if ctx.need_more_help {
        if game.players.len() == 1 {
            speech_output
                .push_str("You can say, I am done adding players. Now who's your next player?");
        } else {
            speech_output.push_str("Who is your next player?");
        }
        reprompt = Some(speech::NEXT_HELP);
    }

    store.save_game(&session.session_id, &game).await?;
    info!(session_id = %session.session_id, player = %name,
          players = game.players.len(), "Player added");

    Ok(match reprompt {
        Some(reprompt) => SkillResponse::ask_with_reprompt(speech_output, reprompt),
        None => SkillResponse::tell(speech_output),
    })
}
