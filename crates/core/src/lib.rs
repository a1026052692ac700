//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule can be exercised on a hand-seeded grid
//! - **Portable**: Can run in any environment (terminal, headless, benchmarks)
//!
//! # Module Structure
//!
//! - [`grid`]: N×N tile storage plus the running score
//! - [`merge`]: the slide-and-merge rule for a single line
//! - [`dispatch`]: index-based line descriptors and the per-direction move driver
//! - [`spawn`]: uniform placement of new tiles on empty cells
//! - [`rng`]: small seeded LCG
//! - [`game`]: the turn state machine tying it all together
//!
//! # Game Rules
//!
//! - A move slides every tile towards one edge; equal neighbours merge once
//! - Every merge adds the merged value to the score
//! - After **every** recognised move a `2` is spawned on a random empty cell,
//!   even when the move changed nothing
//! - The game ends when a spawn finds no empty cell
//!
//! # Example
//!
//! ```
//! use term_2048_core::{Game, TurnOutcome};
//! use term_2048_types::{Direction, GameAction};
//!
//! let mut game = Game::new(4, 12345).unwrap();
//! assert_eq!(game.grid().empty_count(), 15);
//!
//! let outcome = game.handle(GameAction::Move(Direction::Left));
//! assert_eq!(outcome, TurnOutcome::Redraw);
//!
//! assert_eq!(game.handle(GameAction::Quit), TurnOutcome::Quit);
//! assert!(game.is_terminated());
//! ```

pub mod dispatch;
pub mod error;
pub mod game;
pub mod grid;
pub mod merge;
pub mod rng;
pub mod spawn;

pub use term_2048_types as types;

// Re-export commonly used types for convenience
pub use dispatch::{Line, MoveDispatcher};
pub use error::GridError;
pub use game::{Game, Phase, TurnOutcome};
pub use grid::Grid;
pub use merge::merge_line;
pub use rng::SimpleRng;
pub use spawn::{SpawnOutcome, Spawner};
