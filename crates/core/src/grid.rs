//! Grid module - the R x C tile matrix
//!
//! Cells hold a [`Tile`] value, `0` meaning empty. Storage is a flat
//! row-major `Vec` indexed `row * cols + col`. Dimensions are fixed at
//! construction; `Clone` produces a fully independent deep copy.
//!
//! Coordinates are a caller contract: out-of-range access panics rather than
//! being silently tolerated, so bugs in the driving loop surface immediately.

use rand::Rng;

use crate::types::{Tile, SPAWN_TWO_PERCENT};

/// An R x C matrix of tile values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Flat cell storage, row-major order (row * cols + col).
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// Panics unless both dimensions are at least 1.
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(
            rows >= 1 && cols >= 1,
            "grid dimensions must be at least 1x1, got {rows}x{cols}"
        );
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Calculate the flat index for (row, col), enforcing bounds.
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) is outside the {}x{} grid",
            self.rows,
            self.cols
        );
        row * self.cols + col
    }

    /// Get the tile value at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.cells[self.index(row, col)]
    }

    /// Overwrite the cell at (row, col).
    ///
    /// The grid does not validate that `value` is a power of two; that
    /// invariant belongs to the move engine and tile placement.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range.
    pub fn set(&mut self, row: usize, col: usize, value: Tile) {
        let idx = self.index(row, col);
        self.cells[idx] = value;
    }

    /// Coordinates of every empty cell, in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.get(row, col) == 0 {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    /// Place a new tile into a uniformly chosen empty cell.
    ///
    /// The new tile is `2` with 95% probability, `4` otherwise.
    ///
    /// # Panics
    ///
    /// Panics if no cell is empty. Callers guarantee one exists: placement
    /// only ever follows a move that changed the grid, and a changed move
    /// always frees at least one cell.
    pub fn place_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let empty = self.empty_cells();
        assert!(
            !empty.is_empty(),
            "place_random_tile called on a full grid"
        );

        let (row, col) = empty[rng.random_range(0..empty.len())];
        let value = if rng.random_range(0..100u8) < SPAWN_TWO_PERCENT {
            2
        } else {
            4
        };
        self.set(row, col, value);
    }

    /// Sum of all tile values on the grid.
    ///
    /// Sliding and merging conserve this sum, which makes it a useful
    /// invariant check.
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().sum()
    }

    /// Flat view of the cells (row-major).
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }
}
