//! Grid module - owns the tiles and the score
//!
//! The grid is a square of `size × size` cells stored as a flat, row-major
//! vector (`row * size + col`). A cell holds `0` when empty, otherwise a power
//! of two ≥ 2. That invariant is upheld by construction: spawns insert `2` and
//! merges double an existing tile. The public setters re-check it so a seeded
//! grid can never start out broken.

use crate::error::GridError;
use crate::types::MIN_GRID_SIZE;

/// Returns true for values a cell may legally hold.
#[inline(always)]
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}

/// The game grid plus the running score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Flat array of cells, row-major order (row * size + col)
    cells: Vec<u32>,
    score: u64,
}

impl Grid {
    /// Create an empty `size × size` grid with a zero score.
    pub fn new(size: usize) -> Result<Self, GridError> {
        if size < MIN_GRID_SIZE {
            return Err(GridError::InvalidSize {
                size,
                min: MIN_GRID_SIZE,
            });
        }
        let len = size
            .checked_mul(size)
            .ok_or(GridError::Allocation { size })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| GridError::Allocation { size })?;
        cells.resize(len, 0);

        Ok(Self {
            size,
            cells,
            score: 0,
        })
    }

    /// Build a grid from row-major cell values.
    ///
    /// The score starts at zero.
    pub fn from_cells(size: usize, cells: &[u32]) -> Result<Self, GridError> {
        let mut grid = Self::new(size)?;
        if cells.len() != grid.len() {
            return Err(GridError::LengthMismatch {
                expected: grid.len(),
                actual: cells.len(),
            });
        }
        if let Some(&bad) = cells.iter().find(|&&v| !is_valid_tile(v)) {
            return Err(GridError::InvalidTile(bad));
        }
        grid.cells.copy_from_slice(cells);
        Ok(grid)
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size²`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell holds a tile.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == 0)
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row * self.size + col)
    }

    /// Get cell at (row, col).
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: u32) -> Result<(), GridError> {
        let idx = self.index(row, col).ok_or(GridError::OutOfBounds {
            row,
            col,
            size: self.size,
        })?;
        if !is_valid_tile(value) {
            return Err(GridError::InvalidTile(value));
        }
        self.cells[idx] = value;
        Ok(())
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> Option<&[u32]> {
        if row >= self.size {
            return None;
        }
        let start = row * self.size;
        Some(&self.cells[start..start + self.size])
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u32] {
        &mut self.cells
    }

    pub(crate) fn add_score(&mut self, gained: u64) {
        self.score = self.score.saturating_add(gained);
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Largest tile on the grid (0 when empty).
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }
}
