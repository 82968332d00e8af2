//! Grid tests - construction, access, cloning, tile placement

use rand::rngs::StdRng;
use rand::SeedableRng;

use tui_2048::core::Grid;
use tui_2048::types::{GRID_COLS, GRID_ROWS};

#[test]
fn test_new_grid_is_empty() {
    let grid = Grid::new(GRID_ROWS, GRID_COLS);
    assert_eq!(grid.rows(), GRID_ROWS);
    assert_eq!(grid.cols(), GRID_COLS);

    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            assert_eq!(grid.get(row, col), 0, "cell ({row}, {col}) should be empty");
        }
    }
    assert_eq!(grid.empty_cells().len(), GRID_ROWS * GRID_COLS);
}

#[test]
fn test_non_square_grids_are_supported() {
    let mut grid = Grid::new(2, 5);
    grid.set(1, 4, 8);
    assert_eq!(grid.get(1, 4), 8);
    assert_eq!(grid.empty_cells().len(), 9);
}

#[test]
fn test_set_and_get() {
    let mut grid = Grid::new(4, 4);

    grid.set(2, 3, 16);
    assert_eq!(grid.get(2, 3), 16);

    // Overwrite
    grid.set(2, 3, 32);
    assert_eq!(grid.get(2, 3), 32);

    // Clear
    grid.set(2, 3, 0);
    assert_eq!(grid.get(2, 3), 0);
}

#[test]
#[should_panic(expected = "outside")]
fn test_get_out_of_range_is_a_contract_violation() {
    let grid = Grid::new(4, 4);
    let _ = grid.get(0, 4);
}

#[test]
#[should_panic(expected = "outside")]
fn test_set_out_of_range_is_a_contract_violation() {
    let mut grid = Grid::new(4, 4);
    grid.set(4, 0, 2);
}

#[test]
#[should_panic(expected = "at least 1x1")]
fn test_empty_dimensions_are_rejected() {
    let _ = Grid::new(4, 0);
}

#[test]
fn test_clone_is_a_deep_copy() {
    let mut original = Grid::new(4, 4);
    original.set(0, 0, 2);
    original.set(3, 3, 2048);

    let copied = original.clone();
    assert_eq!(copied.get(0, 0), 2);
    assert_eq!(copied.get(3, 3), 2048);

    // Mutating either side never leaks into the other.
    original.set(0, 0, 4);
    assert_eq!(copied.get(0, 0), 2);

    let mut copied = copied;
    copied.set(3, 3, 0);
    assert_eq!(original.get(3, 3), 2048);
}

#[test]
fn test_empty_cells_are_row_major() {
    let mut grid = Grid::new(2, 2);
    grid.set(0, 1, 2);
    assert_eq!(grid.empty_cells(), vec![(0, 0), (1, 0), (1, 1)]);
}

#[test]
fn test_place_random_tile_fills_the_single_empty_cell() {
    // With exactly one empty cell, placement has no choice to make.
    for seed in 0..20 {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, 2);
        grid.set(0, 1, 4);
        grid.set(1, 1, 8);

        let mut rng = StdRng::seed_from_u64(seed);
        grid.place_random_tile(&mut rng);

        let placed = grid.get(1, 0);
        assert!(placed == 2 || placed == 4, "unexpected tile {placed}");
    }
}

#[test]
fn test_place_random_tile_only_spawns_twos_and_fours() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid = Grid::new(4, 4);

    for _ in 0..16 {
        let empty_before = grid.empty_cells().len();
        grid.place_random_tile(&mut rng);
        assert_eq!(grid.empty_cells().len(), empty_before - 1);
    }

    for &value in grid.cells() {
        assert!(value == 2 || value == 4, "unexpected tile {value}");
    }
}

#[test]
#[should_panic(expected = "full grid")]
fn test_place_random_tile_on_full_grid_is_a_contract_violation() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid = Grid::new(2, 2);
    for row in 0..2 {
        for col in 0..2 {
            grid.set(row, col, 2);
        }
    }
    grid.place_random_tile(&mut rng);
}

#[test]
fn test_spawn_odds_favor_twos() {
    // 95/5 split: over 2000 seeded placements the number of fours lands
    // comfortably inside a wide band around 100.
    let mut rng = StdRng::seed_from_u64(2048);
    let mut fours = 0;

    for _ in 0..2000 {
        let mut grid = Grid::new(1, 1);
        grid.place_random_tile(&mut rng);
        if grid.get(0, 0) == 4 {
            fours += 1;
        }
    }

    assert!((30..=200).contains(&fours), "got {fours} fours out of 2000");
}
