//! Spiral search waypoints around a center cell.
//!
//! Ring `r` is every cell at Chebyshev distance `r`, walked clockwise: top
//! edge left to right, right edge downward, bottom edge right to left, left
//! edge upward. The sequence is a pure function of its inputs, so a search can
//! be restarted from its center and a saved cursor.

use micromegas_tracing::prelude::*;

use crate::components::Position;
use crate::grid::GridView;

/// Every cell of ring `r` around `center`, blocked or not.
pub fn ring(center: Position, r: i32) -> impl Iterator<Item = Position> {
    let (top, bottom) = (center.row - r, center.row + r);
    let (left, right) = (center.col - r, center.col + r);

    let top_edge = (left..=right).map(move |col| Position::new(top, col));
    let right_edge = (top + 1..=bottom).map(move |row| Position::new(row, right));
    let bottom_edge = (left..right).rev().map(move |col| Position::new(bottom, col));
    let left_edge = (top + 1..bottom).rev().map(move |row| Position::new(row, left));

    top_edge.chain(right_edge).chain(bottom_edge).chain(left_edge)
}

/// Walkable cells of rings 1..=radius, innermost ring first.
#[span_fn]
pub fn spiral_search(center: Position, radius: u32, grid: &GridView<'_>) -> Vec<Position> {
    (1..=radius as i32)
        .flat_map(|r| ring(center, r))
        .filter(|pos| grid.is_open(*pos))
        .collect()
}
