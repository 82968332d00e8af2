//! GameView: maps a core `GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Tile;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal view of the 2048 board.
pub struct GameView {
    /// Tile cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Six digits plus one column of separation covers every value a
        // realistic game reaches (131072 on a 4x4 board).
        Self { cell_w: 7 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        assert!(cell_w >= 2, "tile cells need at least one digit column");
        Self { cell_w }
    }

    /// Render the session into an existing framebuffer, using the
    /// framebuffer's own dimensions as the viewport.
    pub fn render_into(&self, game: &GameState, fb: &mut FrameBuffer) {
        let rows = game.grid().rows() as u16;
        let cols = game.grid().cols() as u16;

        let board_px_w = cols * self.cell_w;
        let frame_w = board_px_w + 2;
        let frame_h = rows + 2;
        // Frame plus the score and help lines below it.
        let total_h = frame_h + 2;

        let start_x = fb.width().saturating_sub(frame_w) / 2;
        let start_y = fb.height().saturating_sub(total_h) / 2;

        let border = CellStyle::colored(Rgb::new(200, 200, 200));
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..rows {
            for col in 0..cols {
                let value = game.grid().get(row as usize, col as usize);
                let text = tile_text(value, (self.cell_w - 1) as usize);
                let style = if value == 0 {
                    CellStyle {
                        dim: true,
                        ..CellStyle::colored(Rgb::new(100, 100, 100))
                    }
                } else {
                    CellStyle {
                        bold: true,
                        ..CellStyle::colored(tile_color(value))
                    }
                };
                fb.put_str(
                    start_x + 1 + col * self.cell_w,
                    start_y + 1 + row,
                    &text,
                    style,
                );
            }
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        fb.put_str(
            start_x + 1,
            start_y + frame_h,
            &format!("SCORE {}", game.score()),
            label,
        );

        let help = CellStyle {
            dim: true,
            ..CellStyle::default()
        };
        fb.put_str(
            start_x + 1,
            start_y + frame_h + 1,
            "arrows/hjkl move   r restart   q quit",
            help,
        );

        if game.game_over() {
            let banner = "YOU ARE DEAD!!!";
            let banner_style = CellStyle {
                bold: true,
                ..CellStyle::colored(Rgb::new(220, 80, 80))
            };
            let banner_w = banner.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(banner_w) / 2);
            let y = start_y + frame_h / 2;
            fb.put_str(x, y, banner, banner_style);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, &mut fb);
        fb
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// One tile as right-aligned text, `width` columns plus a separator space.
fn tile_text(value: Tile, width: usize) -> String {
    if value == 0 {
        format!("{:>width$} ", "·")
    } else {
        format!("{value:>width$} ")
    }
}

/// Per-value tile color.
fn tile_color(value: Tile) -> Rgb {
    match value {
        2 => Rgb::new(80, 220, 220),
        4 => Rgb::new(200, 120, 220),
        8 => Rgb::new(220, 80, 80),
        16 => Rgb::new(100, 220, 120),
        32 | 64 => Rgb::new(240, 220, 80),
        128 => Rgb::new(0, 160, 160),
        256 => Rgb::new(80, 220, 220),
        512 => Rgb::new(160, 60, 160),
        1024 => Rgb::new(200, 120, 220),
        // Everything beyond the original palette burns red.
        _ => Rgb::new(220, 80, 80),
    }
}
