//! Intent decoding
//!
//! Maps the platform's intent names onto a closed enum so dispatch is an
//! exhaustive match instead of a string-keyed handler table, and unhandled
//! names fail loudly at the boundary.

use crate::models::request::IntentPayload;
use crate::utils::errors::{Result, ScoreBuddyError};

/// Slot carrying the recognized player name.
pub const PLAYER_NAME_SLOT: &str = "PlayerName";

/// Slot carrying the number of points as spoken.
pub const SCORE_NUMBER_SLOT: &str = "ScoreNumber";

/// Every intent this skill understands. Slot values are carried raw;
/// normalization and parsing happen in the handlers so they can re-prompt
/// on bad input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    NewGame,
    AddPlayer {
        player_name: Option<String>,
    },
    AddScore {
        player_name: Option<String>,
        score: Option<String>,
    },
    TellScores,
    ResetPlayers,
    Help,
    Cancel,
    Stop,
}

impl Intent {
    /// Decode a platform intent payload. Unknown intent names are an error:
    /// the interaction model and this enum must stay in step.
    pub fn from_request(payload: &IntentPayload) -> Result<Self> {
        let intent = match payload.name.as_str() {
            "NewGameIntent" => Intent::NewGame,
            "AddPlayerIntent" => Intent::AddPlayer {
                player_name: payload.slot_value(PLAYER_NAME_SLOT).map(str::to_string),
            },
            "AddScoreIntent" => Intent::AddScore {
                player_name: payload.slot_value(PLAYER_NAME_SLOT).map(str::to_string),
                score: payload.slot_value(SCORE_NUMBER_SLOT).map(str::to_string),
            },
            "TellScoresIntent" => Intent::TellScores,
            "ResetPlayersIntent" => Intent::ResetPlayers,
            "AMAZON.HelpIntent" => Intent::Help,
            "AMAZON.CancelIntent" => Intent::Cancel,
            "AMAZON.StopIntent" => Intent::Stop,
            other => return Err(ScoreBuddyError::UnknownIntent(other.to_string())),
        };

        Ok(intent)
    }
}
