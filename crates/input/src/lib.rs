//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. The game is
//! turn-based, so there is no held-key auto-repeat handling; one keypress is
//! one action.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
