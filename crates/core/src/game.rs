//! Game session module - ties grid, move engine, RNG and score together
//!
//! The session exclusively owns its grid; the move engine borrows it for
//! the duration of one call. After every accepted move the session places a
//! new tile and re-evaluates terminal death, probing all four directions on
//! cloned grids so the live board is never mutated speculatively.

use rand::Rng;

use crate::grid::Grid;
use crate::moves::{is_terminal, shift};
use crate::rng::GameRng;
use crate::types::{Direction, GameAction, GRID_COLS, GRID_ROWS};

/// A complete single-player session.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    rng: GameRng,
    score: u64,
    game_over: bool,
}

impl GameState {
    /// Create a session with one seeded random tile already placed.
    ///
    /// Degenerate boards can be born dead (a 1x1 grid is full and immovable
    /// after the first tile), so terminal death is evaluated immediately.
    ///
    /// # Panics
    ///
    /// Panics unless both dimensions are at least 1.
    pub fn new(rows: usize, cols: usize, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut grid = Grid::new(rows, cols);
        grid.place_random_tile(&mut rng);
        let game_over = is_terminal(&grid);

        Self {
            grid,
            rng,
            score: 0,
            game_over,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cumulative score: the sum of every merge result so far. Never
    /// decreases.
    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// The seed this session was created with.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Slide and merge toward `direction`.
    ///
    /// On a changed board the move's score is banked, one new tile spawns,
    /// and terminal death is re-evaluated. A finished session rejects every
    /// shift. Returns whether the grid changed.
    pub fn shift(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let outcome = shift(&mut self.grid, direction);
        if outcome.changed {
            self.score += outcome.score_gained;
            // A changed move always frees a cell, so placement cannot see a
            // full grid.
            self.grid.place_random_tile(&mut self.rng);
            self.game_over = is_terminal(&self.grid);
        }

        outcome.changed
    }

    /// Apply a session-level action.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Shift(direction) => self.shift(direction),
            GameAction::Restart => {
                let seed = self.rng.random();
                *self = Self::new(self.grid.rows(), self.grid.cols(), seed);
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GRID_ROWS, GRID_COLS, 1)
    }
}
