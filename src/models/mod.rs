//! Data models module
//!
//! This module contains all data structures used throughout the skill:
//! the Game aggregate, the inbound request envelope, and response values.

pub mod game;
pub mod request;
pub mod response;

// Re-export commonly used models
pub use game::Game;
pub use request::{IntentPayload, RequestBody, RequestEnvelope, SessionInfo, Slot};
pub use response::{ResponseEnvelope, SimpleCard, SkillResponse, SpeechOutput};
