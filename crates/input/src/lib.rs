//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`]. Keys that map to
//! nothing are returned as `None` and the game loop simply waits for the next
//! one.

pub mod map;

pub use term_2048_types as types;

pub use map::{map_key, should_quit};
