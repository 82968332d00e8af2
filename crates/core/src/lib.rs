//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole of the 2048 rules with **zero
//! dependencies** on UI or I/O:
//!
//! - [`grid`]: the R x C tile matrix with deep-copy cloning and random tile
//!   placement
//! - [`moves`]: the slide-and-merge move engine and terminal-death probe
//! - [`game`]: the session tying grid, RNG and score together
//! - [`rng`]: the seeded random source injected into tile placement
//!
//! # Game Rules
//!
//! - Every move slides all tiles toward one edge; equal adjacent tiles merge
//!   into their sum, at most once per tile per move
//! - The score gains the value of every merge-created tile
//! - A new tile (2 at 95%, 4 at 5%) spawns after every move that changed
//!   the board
//! - The game ends when no direction changes the board
//!
//! # Determinism
//!
//! Same seed, same actions, same game: all randomness flows through the
//! session's [`GameRng`], so replays and tests are exact.
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(4, 4, 12345);
//! assert_eq!(game.grid().empty_cells().len(), 15);
//!
//! game.apply_action(GameAction::Shift(Direction::Left));
//! assert!(!game.game_over());
//! ```

pub mod game;
pub mod grid;
pub mod moves;
pub mod rng;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game::GameState;
pub use grid::Grid;
pub use moves::{is_terminal, shift};
pub use rng::GameRng;
