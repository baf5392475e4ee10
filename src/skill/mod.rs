//! Skill dispatch and request-scoped context
//!
//! The glue between the platform envelope and the handlers: decoding intent
//! names into a closed enum, carrying the per-session phrasing context, and
//! routing each request to exactly one handler.

pub mod context;
pub mod dispatch;
pub mod intent;

pub use context::SkillContext;
pub use dispatch::Skill;
pub use intent::Intent;
