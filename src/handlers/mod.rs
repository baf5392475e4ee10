//! Skill handlers module
//!
//! This module contains all request handlers organized by type:
//! - Event handlers for session lifecycle notifications
//! - Intent handlers for named user actions

pub mod events;
pub mod intents;
