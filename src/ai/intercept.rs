//! Intercept waypoint selection for the Hard strategy.
//!
//! Candidates are the walkable cells of the box spanned by the suspected
//! target position and the exit, widened by [`MARGIN`] and clipped to the grid
//! interior. Each is scored by
//! `REACH_WEIGHT * (target_dist - self_dist) - exit_dist`.

use micromegas_tracing::prelude::*;

use crate::ai::pathfinder::DistanceField;
use crate::components::Position;
use crate::grid::GridView;

const MARGIN: i32 = 2;
const REACH_WEIGHT: i64 = 10;
const NO_CANDIDATE: i64 = -999_999;

/// Score of a single candidate cell. Higher is better.
pub fn intercept_score(target_dist: u32, self_dist: u32, exit_dist: u32) -> i64 {
    REACH_WEIGHT * (i64::from(target_dist) - i64::from(self_dist)) - i64::from(exit_dist)
}

/// Best-scoring waypoint, or `mummy` itself when no candidate beats the
/// floor score. Earlier cells in row-major order win ties.
#[span_fn]
pub fn find_intercept(
    mummy: Position,
    suspect: Position,
    exit: Position,
    grid: &GridView<'_>,
) -> Position {
    let min_row = (suspect.row.min(exit.row) - MARGIN).max(1);
    let max_row = (suspect.row.max(exit.row) + MARGIN).min(grid.rows() - 2);
    let min_col = (suspect.col.min(exit.col) - MARGIN).max(1);
    let max_col = (suspect.col.max(exit.col) + MARGIN).min(grid.cols() - 2);

    let from_mummy = DistanceField::from_origin(mummy, grid);
    let from_suspect = DistanceField::from_origin(suspect, grid);
    let to_exit = DistanceField::toward_goal(exit, grid);

    let mut best = mummy;
    let mut best_score = NO_CANDIDATE;
    let mut candidates = 0u64;

    for row in min_row..=max_row {
        for col in min_col..=max_col {
            let cell = Position::new(row, col);
            if !grid.is_open(cell) {
                continue;
            }
            candidates += 1;
            let score = intercept_score(
                from_suspect.get(cell),
                from_mummy.get(cell),
                to_exit.get(cell),
            );
            if score > best_score {
                best_score = score;
                best = cell;
            }
        }
    }

    imetric!("intercept_candidates", "count", candidates);
    best
}
