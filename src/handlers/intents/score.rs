//! Scoring intents: award points and read the morning scoreboard.

use tracing::{info, warn};

use crate::models::request::SessionInfo;
use crate::models::response::SkillResponse;
use crate::speech;
use crate::storage::GameStore;
use crate::utils::errors::{Result, ScoreBuddyError};

/// Give a player points, asking again when either slot is missing or the
/// player is unknown.
pub async fn handle_add_score(
    store: &dyn GameStore,
    session: &SessionInfo,
    raw_name: Option<&str>,
    raw_score: Option<&str>,
) -> Result<SkillResponse> {
    let Some(name) = raw_name.and_then(speech::normalize_player_name) else {
        return Ok(SkillResponse::ask_with_reprompt(
            "Sorry, I did not hear the player name, please say that again.",
            "Please say the name again.",
        ));
    };

    let score_value = match raw_score.and_then(|v| v.trim().parse::<i64>().ok()) {
        Some(value) => value,
        None => {
            warn!(session_id = %session.session_id, score = ?raw_score, "Invalid score value");
            return Ok(SkillResponse::ask_with_reprompt(
                "Sorry, I did not hear the points, please say that again.",
                "Please say the points again.",
            ));
        }
    };

    let mut game = store.load_game(&session.session_id).await?;

    if game.players.is_empty() {
        return Ok(SkillResponse::ask(speech::NO_PLAYERS_FALLBACK));
    }

    let Some(target) = game
        .players
        .iter()
        .find(|player| player.as_str() == name)
        .cloned()
    else {
        return Ok(SkillResponse::ask_with_reprompt(
            format!("Sorry, {} has not joined the game. What else?", name),
            format!("{} has not joined the game. What else?", name),
        ));
    };

    // The target came from the roster, so the delta always applies; a miss
    // here means the roster and scores fell out of lockstep.
    let new_score = game
        .apply_delta(&target, score_value)
        .ok_or_else(|| ScoreBuddyError::InvalidInput(format!("no score entry for {}", target)))?;

    store.save_game(&session.session_id, &game).await?;
    info!(session_id = %session.session_id, player = %target, delta = score_value,
          total = new_score, "Score updated");

    let mut speech_output = format!("{} for {}. ", score_value, target);
    if game.players.len() == 1 || game.players.len() > 3 {
        speech_output.push_str(&format!("{} has {} in total.", target, new_score));
    } else {
        // With two or three players read the whole board back.
        speech_output.push_str("That's ");
        for (index, player) in game.players.iter().enumerate() {
            if index == game.players.len() - 1 {
                speech_output.push_str("And ");
            }
            let score = game.score_of(player).unwrap_or(0);
            speech_output.push_str(&format!("{}, {}, ", player, score));
        }
    }

    Ok(SkillResponse::tell(speech_output))
}

/// Read the scoreboard as a morning routine: each exact score value maps to
/// a fixed phrase, and every reading bumps the routine counter by one.
///
/// Exactly one response leaves this handler; when several branches want to
/// speak, the first one requested wins. The state pass still runs to
/// completion before the save either way.
pub async fn handle_tell_scores(
    store: &dyn GameStore,
    session: &SessionInfo,
) -> Result<SkillResponse> {
    let mut game = store.load_game(&session.session_id).await?;

    let mut pending: Option<SkillResponse> = None;

    if game.players.is_empty() {
        // Deliberate seeding: an empty game still gets a routine counter so
        // the next readings walk through the morning phrases.
        game.add_player(speech::SYNTHETIC_PLAYER);
        game.apply_delta(speech::SYNTHETIC_PLAYER, 1);
        info!(session_id = %session.session_id, "Seeded routine counter for empty game");
        pending = Some(SkillResponse::tell(speech::EMPTY_GAME_KICKOFF));
    }

    let scoreboard: Vec<(String, i64)> = game
        .players
        .iter()
        .map(|player| (player.clone(), game.score_of(player).unwrap_or(0)))
        .collect();

    let mut speech_output = String::new();
    for (_player, score) in &scoreboard {
        if *score == 2 {
            // The audio clip replaces this entry's phrase; later entries
            // still accumulate.
            if pending.is_none() {
                pending = Some(SkillResponse::ask_ssml(speech::morning_audio_ssml()));
            }
            continue;
        }
        if let Some(phrase) = speech::routine_phrase(*score) {
            speech_output.push_str(phrase);
        }
    }

    // Reading the board advances the routine. Only the synthetic counter
    // moves; a board without one has nothing to advance.
    game.apply_delta(speech::SYNTHETIC_PLAYER, 1);

    store.save_game(&session.session_id, &game).await?;

    Ok(pending.unwrap_or_else(|| SkillResponse::tell_with_card(speech_output, "", "")))
}
