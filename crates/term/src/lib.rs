//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view draws the board into a
//! plain framebuffer of styled cells, and the renderer flushes that to the
//! terminal. No widget/layout framework; the game is turn-based, so every
//! frame is a full repaint.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep drawing pure until the final flush

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
