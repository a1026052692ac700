//! Move dispatch - turns a direction into `size` independent line merges
//!
//! Each row or column is described by a [`Line`]: a start index into the flat
//! grid storage, a signed step and a length. Position 0 of a line is always
//! the edge tiles slide towards:
//!
//! | Direction | Line `k` | Start | Step |
//! |-----------|----------|-------|------|
//! | Up | column `k` | `k` | `+size` |
//! | Down | column `k` | `(size-1)*size + k` | `-size` |
//! | Left | row `k` | `k*size` | `+1` |
//! | Right | row `k` | `k*size + size-1` | `-1` |
//!
//! Lines never share cells, so they can be processed in any order.

use tracing::debug;

use crate::grid::Grid;
use crate::merge::merge_line;
use crate::types::Direction;

/// Index-based descriptor of one row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: usize,
    pub step: isize,
    pub len: usize,
}

impl Line {
    /// Line `k` of a move in `direction` on a `size × size` grid.
    pub fn for_direction(size: usize, direction: Direction, k: usize) -> Self {
        debug_assert!(k < size);
        let (start, step) = match direction {
            Direction::Up => (k, size as isize),
            Direction::Down => ((size - 1) * size + k, -(size as isize)),
            Direction::Left => (k * size, 1),
            Direction::Right => (k * size + size - 1, -1),
        };
        Self {
            start,
            step,
            len: size,
        }
    }

    /// Flat index of line position `i`.
    #[inline(always)]
    pub fn index(&self, i: usize) -> usize {
        (self.start as isize + self.step * i as isize) as usize
    }

    /// Flat indices in travel order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).map(move |i| self.index(i))
    }
}

/// All `size` lines of a move in `direction`.
pub fn lines(size: usize, direction: Direction) -> impl Iterator<Item = Line> {
    (0..size).map(move |k| Line::for_direction(size, direction, k))
}

/// Applies moves to a grid using a scratch line sized once up front.
#[derive(Debug, Clone)]
pub struct MoveDispatcher {
    scratch: Vec<u32>,
}

impl MoveDispatcher {
    pub fn new(size: usize) -> Self {
        Self {
            scratch: vec![0; size],
        }
    }

    /// Slide the whole grid towards `direction`.
    ///
    /// Returns the score gained by this move; the grid's score is updated too.
    /// No change detection happens here: a move that alters nothing returns 0
    /// and the caller still spawns.
    pub fn apply(&mut self, grid: &mut Grid, direction: Direction) -> u64 {
        let size = grid.size();
        if self.scratch.len() != size {
            self.scratch.resize(size, 0);
        }

        let mut gained = 0u64;
        let cells = grid.cells_mut();
        for line in lines(size, direction) {
            for (slot, idx) in self.scratch.iter_mut().zip(line.indices()) {
                *slot = cells[idx];
            }
            gained += merge_line(&mut self.scratch);
            for (idx, &value) in line.indices().zip(self.scratch.iter()) {
                cells[idx] = value;
            }
        }

        grid.add_score(gained);
        debug!(
            direction = direction.as_str(),
            gained,
            score = grid.score(),
            "move applied"
        );
        gained
    }
}
