//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is flushed to the terminal in place.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout ([`BoardView`]) pure and separate from escape-sequence output
//! - Redraw at a fixed anchor so frames never scroll

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use term_2048_core as core;
pub use term_2048_types as types;

pub use board_view::{tile_label, BoardView};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{
    encode_enter_into, encode_exit_into, encode_frame_into, encode_game_over_into,
    TerminalRenderer, GAME_OVER_NOTICE,
};
