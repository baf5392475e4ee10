//! Intent handlers, one module per intent family.
//!
//! Every handler loads the game once, mutates it in memory, saves it once,
//! and returns exactly one response. Validation failures are re-prompts,
//! not errors: they leave the game untouched and skip the save.

pub mod builtins;
pub mod game;
pub mod player;
pub mod score;
