//! Move engine - the slide-and-merge transformation
//!
//! A move treats the grid as a set of independent one-dimensional lanes:
//! rows for horizontal moves, columns for vertical ones. Lanes are
//! orientation-normalized so that slot 0 is always the edge tiles slide
//! toward; a single scan then serves all four directions, and results are
//! written back through the same coordinate mapping.

use crate::grid::Grid;
use crate::types::{Direction, MoveOutcome, Tile};

/// Slide and merge all tiles toward `direction`, in place.
///
/// Returns whether anything moved and the total value of tiles created by
/// merges. Never fails: every direction applied to every grid is either a
/// no-op or a valid transformation.
pub fn shift(grid: &mut Grid, direction: Direction) -> MoveOutcome {
    let (lane_count, lane_len) = match direction {
        Direction::Left | Direction::Right => (grid.rows(), grid.cols()),
        Direction::Up | Direction::Down => (grid.cols(), grid.rows()),
    };

    let mut outcome = MoveOutcome::default();
    // Scratch buffer reused across lanes.
    let mut lane: Vec<Tile> = vec![0; lane_len];

    for lane_idx in 0..lane_count {
        for slot in 0..lane_len {
            let (row, col) = lane_cell(direction, lane_idx, slot, grid.rows(), grid.cols());
            lane[slot] = grid.get(row, col);
        }

        let lane_outcome = slide_lane(&mut lane);
        outcome.score_gained += lane_outcome.score_gained;

        if lane_outcome.changed {
            outcome.changed = true;
            for slot in 0..lane_len {
                let (row, col) = lane_cell(direction, lane_idx, slot, grid.rows(), grid.cols());
                grid.set(row, col, lane[slot]);
            }
        }
    }

    outcome
}

/// True if no direction's move would change the grid.
///
/// Probes every direction on a cloned grid, so the live grid is never
/// touched by the speculative moves.
pub fn is_terminal(grid: &Grid) -> bool {
    Direction::ALL.iter().all(|&direction| {
        let mut probe = grid.clone();
        !shift(&mut probe, direction).changed
    })
}

/// Map an abstract (lane, slot) coordinate onto the grid.
///
/// Slot 0 is the target edge of the lane: column 0 for Left, the last
/// column for Right, row 0 for Up, the last row for Down.
#[inline]
fn lane_cell(
    direction: Direction,
    lane: usize,
    slot: usize,
    rows: usize,
    cols: usize,
) -> (usize, usize) {
    match direction {
        Direction::Left => (lane, slot),
        Direction::Right => (lane, cols - 1 - slot),
        Direction::Up => (slot, lane),
        Direction::Down => (rows - 1 - slot, lane),
    }
}

/// Slide and merge one normalized lane toward slot 0.
///
/// Slots are scanned from the target edge outward. Each occupied slot
/// probes across empties toward slot 0; it merges into an equal neighbor
/// unless that neighbor was itself created by a merge earlier in this move,
/// otherwise it relocates to the last empty slot the probe crossed. The
/// merged-destination guard is what keeps a lane like `[2,2,2,0]` at one
/// merged pair plus a leftover instead of collapsing further.
fn slide_lane(lane: &mut [Tile]) -> MoveOutcome {
    let mut outcome = MoveOutcome::default();
    // Destination slot of the most recent merge. Merge destinations only
    // move outward during the scan, so one slot of memory is enough.
    let mut merged_slot: Option<usize> = None;

    for slot in 0..lane.len() {
        if lane[slot] == 0 {
            continue;
        }

        // Probe toward the target edge while the next slot is empty.
        let mut dest = slot;
        while dest > 0 && lane[dest - 1] == 0 {
            dest -= 1;
        }

        if dest > 0 && lane[dest - 1] == lane[slot] && merged_slot != Some(dest - 1) {
            let merged = lane[dest - 1] * 2;
            lane[dest - 1] = merged;
            lane[slot] = 0;
            outcome.score_gained += merged;
            outcome.changed = true;
            merged_slot = Some(dest - 1);
        } else if dest != slot {
            // Blocked by the edge, a different value, or an already-merged
            // tile: stack into the last empty slot.
            lane[dest] = lane[slot];
            lane[slot] = 0;
            outcome.changed = true;
        }
    }

    outcome
}
