//! Built-in platform intents: help, cancel, stop.
//!
//! None of these touch the game or the store.

use crate::models::response::SkillResponse;
use crate::skill::SkillContext;
use crate::speech;

/// Full help text, as a question when the user is mid-conversation.
pub fn handle_help(ctx: &SkillContext) -> SkillResponse {
    if ctx.need_more_help {
        SkillResponse::ask_with_reprompt(
            format!("{} So, how can I help?", speech::COMPLETE_HELP),
            "How can I help?",
        )
    } else {
        SkillResponse::tell(speech::COMPLETE_HELP)
    }
}

/// Cancel and stop share one behavior: a short deflection in help mode,
/// otherwise a silent close.
pub fn handle_stop(ctx: &SkillContext) -> SkillResponse {
    if ctx.need_more_help {
        SkillResponse::tell(speech::STOP_DEFLECTION)
    } else {
        SkillResponse::tell("")
    }
}
