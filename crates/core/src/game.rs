//! Game module - the turn state machine
//!
//! A turn is one recognised [`GameAction`]:
//!
//! - `Move(dir)`: dispatch the move, then spawn. A failed spawn ends the game
//!   ([`TurnOutcome::GameOver`]); otherwise the caller should redraw.
//! - `Quit`: end the game straight away, no spawn and no redraw.
//!
//! Once [`Phase::Terminated`] is reached every further action is ignored.

use tracing::info;

use crate::dispatch::MoveDispatcher;
use crate::error::GridError;
use crate::grid::Grid;
use crate::spawn::{SpawnOutcome, Spawner};
use crate::types::GameAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Terminated,
}

/// What the driver loop should do after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The grid changed (or may have); draw a new frame.
    Redraw,
    /// No room was left for the post-move spawn. Show the end notice.
    GameOver,
    /// The player quit.
    Quit,
    /// Nothing happened (the game had already ended).
    Ignored,
}

/// Complete session state: the grid and the machinery that mutates it.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    dispatcher: MoveDispatcher,
    spawner: Spawner,
    phase: Phase,
    moves: u32,
}

impl Game {
    /// Allocate a `size × size` grid and place the opening tile.
    pub fn new(size: usize, seed: u32) -> Result<Self, GridError> {
        let grid = Grid::new(size)?;
        let mut game = Self::from_grid(grid, seed);
        game.spawner.spawn_one(&mut game.grid);
        info!(size, seed, "game started");
        Ok(game)
    }

    /// Resume from an existing grid without spawning.
    pub fn from_grid(grid: Grid, seed: u32) -> Self {
        Self {
            dispatcher: MoveDispatcher::new(grid.size()),
            spawner: Spawner::new(seed),
            grid,
            phase: Phase::Running,
            moves: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u64 {
        self.grid.score()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_terminated(&self) -> bool {
        self.phase == Phase::Terminated
    }

    /// Number of moves dispatched so far.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Run one turn.
    pub fn handle(&mut self, action: GameAction) -> TurnOutcome {
        if self.phase == Phase::Terminated {
            return TurnOutcome::Ignored;
        }

        match action {
            GameAction::Quit => {
                self.phase = Phase::Terminated;
                info!(score = self.grid.score(), moves = self.moves, "player quit");
                TurnOutcome::Quit
            }
            GameAction::Move(direction) => {
                self.dispatcher.apply(&mut self.grid, direction);
                self.moves += 1;

                match self.spawner.spawn_one(&mut self.grid) {
                    SpawnOutcome::Spawned { .. } => TurnOutcome::Redraw,
                    SpawnOutcome::BoardFull => {
                        self.phase = Phase::Terminated;
                        info!(
                            score = self.grid.score(),
                            moves = self.moves,
                            max_tile = self.grid.max_tile(),
                            "game over"
                        );
                        TurnOutcome::GameOver
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn test_new_game_has_one_tile() {
        let game = Game::new(4, 1).unwrap();
        assert_eq!(game.grid().empty_count(), 15);
        assert_eq!(game.grid().max_tile(), 2);
        assert_eq!(game.score(), 0);
        assert_eq!(game.phase(), Phase::Running);
    }

    #[test]
    fn test_new_game_rejects_bad_size() {
        assert!(Game::new(1, 1).is_err());
    }

    #[test]
    fn test_move_spawns_even_when_nothing_moves() {
        let mut grid = Grid::new(4).unwrap();
        grid.set(0, 0, 2).unwrap();
        let mut game = Game::from_grid(grid, 5);

        // Left changes nothing for a tile already in the corner.
        assert_eq!(game.handle(GameAction::Move(Direction::Left)), TurnOutcome::Redraw);
        assert_eq!(game.grid().get(0, 0), Some(2));
        assert_eq!(game.grid().empty_count(), 14);
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn test_quit_terminates_without_spawning() {
        let mut game = Game::new(4, 9).unwrap();
        let before = game.grid().clone();
        assert_eq!(game.handle(GameAction::Quit), TurnOutcome::Quit);
        assert!(game.is_terminated());
        assert_eq!(game.grid(), &before);
    }

    #[test]
    fn test_terminated_is_absorbing() {
        let mut game = Game::new(4, 9).unwrap();
        game.handle(GameAction::Quit);
        let before = game.grid().clone();
        assert_eq!(
            game.handle(GameAction::Move(Direction::Up)),
            TurnOutcome::Ignored
        );
        assert_eq!(game.handle(GameAction::Quit), TurnOutcome::Ignored);
        assert_eq!(game.grid(), &before);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_full_board_ends_game() {
        let grid = Grid::from_cells(2, &[2, 4, 8, 16]).unwrap();
        let mut game = Game::from_grid(grid, 1);
        assert_eq!(
            game.handle(GameAction::Move(Direction::Left)),
            TurnOutcome::GameOver
        );
        assert!(game.is_terminated());
        assert_eq!(game.grid().cells(), &[2, 4, 8, 16]);
    }

    #[test]
    fn test_merge_frees_room_for_spawn() {
        let grid = Grid::from_cells(2, &[2, 2, 4, 8]).unwrap();
        let mut game = Game::from_grid(grid, 1);
        assert_eq!(
            game.handle(GameAction::Move(Direction::Left)),
            TurnOutcome::Redraw
        );
        assert_eq!(game.score(), 4);
        assert_eq!(game.grid().cells(), &[4, 2, 4, 8]);
    }
}
