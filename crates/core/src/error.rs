//! Error types for grid construction and mutation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid size must be at least {min}, got {size}")]
    InvalidSize { size: usize, min: usize },

    #[error("failed to allocate a {size}x{size} grid")]
    Allocation { size: usize },

    #[error("cell ({row}, {col}) is outside a {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },

    #[error("tile value {0} is not zero or a power of two >= 2")]
    InvalidTile(u32),

    #[error("expected {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
