//! Spawner - places a new tile on a uniformly chosen empty cell

use tracing::debug;

use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::types::SPAWN_VALUE;

/// Result of a spawn attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnOutcome {
    Spawned { row: usize, col: usize },
    /// No empty cell existed; the grid was left untouched.
    BoardFull,
}

#[derive(Debug, Clone)]
pub struct Spawner {
    rng: SimpleRng,
}

impl Spawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Place one [`SPAWN_VALUE`] tile.
    ///
    /// Picks `n` uniformly in `[0, empty_count)` and fills the `n`-th empty
    /// cell in row-major order.
    pub fn spawn_one(&mut self, grid: &mut Grid) -> SpawnOutcome {
        let empty = grid.empty_count();
        if empty == 0 {
            debug!("spawn skipped, board full");
            return SpawnOutcome::BoardFull;
        }

        let pick = self.rng.next_range(empty as u32) as usize;
        let size = grid.size();
        let Some(idx) = grid
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v == 0)
            .map(|(i, _)| i)
            .nth(pick)
        else {
            return SpawnOutcome::BoardFull;
        };

        grid.cells_mut()[idx] = SPAWN_VALUE;
        let (row, col) = (idx / size, idx % size);
        debug!(row, col, empty, "tile spawned");
        SpawnOutcome::Spawned { row, col }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_fills_exactly_one_empty_cell() {
        let mut grid = Grid::from_cells(2, &[4, 0, 0, 8]).unwrap();
        let before = grid.clone();
        let mut spawner = Spawner::new(3);

        let SpawnOutcome::Spawned { row, col } = spawner.spawn_one(&mut grid) else {
            panic!("expected a spawn");
        };
        assert_eq!(before.get(row, col), Some(0));
        assert_eq!(grid.get(row, col), Some(SPAWN_VALUE));
        assert_eq!(grid.empty_count(), before.empty_count() - 1);
        assert_eq!(grid.get(0, 0), Some(4));
        assert_eq!(grid.get(1, 1), Some(8));
    }

    #[test]
    fn test_spawn_on_full_board() {
        let mut grid = Grid::from_cells(2, &[2, 4, 8, 16]).unwrap();
        let before = grid.clone();
        let mut spawner = Spawner::new(1);

        assert_eq!(spawner.spawn_one(&mut grid), SpawnOutcome::BoardFull);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_single_empty_cell_is_always_chosen() {
        for seed in 0..20 {
            let mut grid = Grid::from_cells(2, &[2, 4, 0, 16]).unwrap();
            let mut spawner = Spawner::new(seed);
            assert_eq!(
                spawner.spawn_one(&mut grid),
                SpawnOutcome::Spawned { row: 1, col: 0 }
            );
        }
    }

    #[test]
    fn test_same_seed_same_positions() {
        let mut a = Grid::new(4).unwrap();
        let mut b = Grid::new(4).unwrap();
        let mut sa = Spawner::new(42);
        let mut sb = Spawner::new(42);
        for _ in 0..16 {
            assert_eq!(sa.spawn_one(&mut a), sb.spawn_one(&mut b));
        }
        assert!(a.is_full());
        assert_eq!(sa.spawn_one(&mut a), SpawnOutcome::BoardFull);
    }
}
