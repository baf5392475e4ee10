//! Speech text tables and slot-text normalization
//!
//! Fixed phrases the handlers compose their responses from, plus the
//! normalization applied to recognized player names before they key into
//! the game.

/// Full help text, offered on AMAZON.HelpIntent and as the launch reprompt
/// for a game that has players but no points yet.
pub const COMPLETE_HELP: &str = "Here's some things you can say: add John, \
    give John three points, tell me the score, new game, reset all players, \
    and exit.";

/// Follow-up help used as the reprompt once a game is underway.
pub const NEXT_HELP: &str = "You can give a point to a player, add another \
    player, get the current score, or say help. What would you like?";

/// Menu appended to confirmations while the user is in help mode.
pub const MENU_PROMPT: &str = "You can give a player points, add another \
    player, reset all players or exit. What would you like?";

/// Launch greeting, shared by every game state.
pub const GREETING: &str = "Good Morning";

/// New-game prompt when there is nobody to play with yet.
pub const NEW_GAME_ONBOARDING: &str = "New day today, let's get going. Who \
    is your first player?";

/// Fallback when points are given before anyone joined.
pub const NO_PLAYERS_FALLBACK: &str = "There are no players in your game \
    yet. Who do you want to add?";

/// Closing line after the roster is wiped.
pub const RESET_FAREWELL: &str = "Have a great day today";

/// Spoken when the scoreboard is read with nobody in the game.
pub const EMPTY_GAME_KICKOFF: &str = "No excuses! Start your seven minute \
    workout.";

/// Deflection for cancel/stop while in help mode.
pub const STOP_DEFLECTION: &str = "Okay, tell me your next task when you \
    are ready.";

/// Name of the synthetic player tracking the morning routine.
pub const SYNTHETIC_PLAYER: &str = "user";

/// Audio clip played when a player sits at exactly two points.
pub const MORNING_AUDIO_URL: &str =
    "https://s3-us-west-2.amazonaws.com/audio-sample-123/blah-con.mp3";

/// SSML wrapper for the morning audio clip.
pub fn morning_audio_ssml() -> String {
    format!("<speak><audio src='{}'/></speak>", MORNING_AUDIO_URL)
}

/// Routine phrase keyed by the exact score value. Score two plays the audio
/// clip instead and is handled by the caller; every other value is silent.
pub fn routine_phrase(score: i64) -> Option<&'static str> {
    match score {
        1 => Some("Refresh! It's time for a shower, and don't stay in there forever."),
        3 => Some("Make sure to have breakfast, that's the most important meal of the day."),
        4 => Some("It's eight o'clock, you must leave now to reach work on time."),
        _ => None,
    }
}

/// Reduce a recognized player-name utterance to the name the game keys on:
/// surrounding whitespace dropped, first token only.
pub fn normalize_player_name(raw: &str) -> Option<String> {
    raw.split_whitespace().next().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_takes_first_token() {
        assert_eq!(normalize_player_name("john smith"), Some("john".to_string()));
        assert_eq!(normalize_player_name("  mary  "), Some("mary".to_string()));
    }

    #[test]
    fn test_normalize_rejects_blank_input() {
        assert_eq!(normalize_player_name(""), None);
        assert_eq!(normalize_player_name("   "), None);
    }

    #[test]
    fn test_routine_phrases_cover_exact_values_only() {
        assert!(routine_phrase(1).is_some());
        assert!(routine_phrase(2).is_none());
        assert!(routine_phrase(3).is_some());
        assert!(routine_phrase(4).is_some());
        assert!(routine_phrase(0).is_none());
        assert!(routine_phrase(5).is_none());
        assert!(routine_phrase(-1).is_none());
    }

    #[test]
    fn test_morning_audio_is_speak_wrapped() {
        let ssml = morning_audio_ssml();
        assert!(ssml.starts_with("<speak>"));
        assert!(ssml.ends_with("</speak>"));
        assert!(ssml.contains(MORNING_AUDIO_URL));
    }
}
