//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The grid is square. Its side length is chosen once at startup and stays
//! fixed for the whole session:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_GRID_SIZE` | 2 | Smallest playable side length |
//! | `DEFAULT_GRID_SIZE` | 4 | Classic 4x4 board |
//! | `MAX_GRID_SIZE` | 16 | Largest side length the renderer lays out |
//!
//! # Tiles
//!
//! A cell holds `0` (empty) or a power of two. New tiles always enter the
//! board as [`SPAWN_VALUE`].
//!
//! # Examples
//!
//! ```
//! use term_2048_types::{Direction, GameAction, DEFAULT_GRID_SIZE};
//!
//! // Parse a direction (case-insensitive)
//! let dir = Direction::from_str("Left").unwrap();
//! assert_eq!(dir, Direction::Left);
//! assert_eq!(dir.opposite(), Direction::Right);
//!
//! // Parse game action
//! let action = GameAction::from_str("up").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

/// Smallest supported grid side length.
pub const MIN_GRID_SIZE: usize = 2;

/// Largest grid side length the terminal view lays out.
pub const MAX_GRID_SIZE: usize = 16;

/// Grid side length used when none is configured.
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Value of every newly spawned tile.
pub const SPAWN_VALUE: u32 = 2;

/// Terminal columns per grid cell, including its left separator.
pub const CELL_WIDTH: usize = 6;

/// Direction tiles slide towards.
///
/// The direction names the edge of the grid that tiles collapse onto:
/// `Up` collapses every column onto row 0, `Right` collapses every row onto
/// the last column, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters:
    /// "up" | "u", "down" | "d", "left" | "l", "right" | "r"
    ///
    /// # Examples
    ///
    /// ```
    /// use term_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("r"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True for directions that slide along columns.
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Game actions produced by the input layer.
///
/// Anything the player types that does not map to one of these is dropped
/// before it reaches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every line towards the given edge, then spawn a tile
    Move(Direction),
    /// End the session immediately
    Quit,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use term_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("down"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("Quit"), Some(GameAction::Quit));
    /// assert_eq!(GameAction::from_str("undo"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "quit" | "q" => Some(GameAction::Quit),
            other => Direction::from_str(other).map(GameAction::Move),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(dir) => dir.as_str(),
            GameAction::Quit => "quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_bounds_are_consistent() {
        assert!(MIN_GRID_SIZE >= 2);
        assert!(MIN_GRID_SIZE <= DEFAULT_GRID_SIZE);
        assert!(DEFAULT_GRID_SIZE <= MAX_GRID_SIZE);
        assert!(SPAWN_VALUE.is_power_of_two());
    }

    #[test]
    fn direction_round_trips_through_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn vertical_directions() {
        assert!(Direction::Up.is_vertical());
        assert!(Direction::Down.is_vertical());
        assert!(!Direction::Left.is_vertical());
        assert!(!Direction::Right.is_vertical());
    }

    #[test]
    fn action_parsing() {
        assert_eq!(GameAction::from_str("q"), Some(GameAction::Quit));
        assert_eq!(
            GameAction::from_str("LEFT"),
            Some(GameAction::Move(Direction::Left))
        );
        assert_eq!(GameAction::Move(Direction::Up).as_str(), "up");
        assert_eq!(GameAction::from_str(""), None);
    }
}
