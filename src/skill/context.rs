//! Request-scoped skill context
//!
//! The help-mode flag is owned by the caller and passed explicitly into
//! each handler, one context per session, so concurrent sessions cannot
//! observe each other's phrasing mode.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillContext {
    /// When set, handlers keep the session open and append menu prompts.
    /// Cleared whenever a new session starts, since one-shot commands
    /// should get short answers.
    pub need_more_help: bool,
}

impl SkillContext {
    pub fn new(need_more_help: bool) -> Self {
        Self { need_more_help }
    }
}
