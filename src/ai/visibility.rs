//! Straight-line visibility along a shared row or column. No diagonals.

use crate::components::Position;
use crate::grid::GridView;

/// True when `a` and `b` share a row or column with no blocked cell strictly
/// between them, or when they are the same cell.
pub fn has_line_of_sight(a: Position, b: Position, grid: &GridView<'_>) -> bool {
    if a == b {
        return true;
    }
    if a.row == b.row {
        let (lo, hi) = (a.col.min(b.col), a.col.max(b.col));
        return (lo + 1..hi).all(|col| !grid.is_blocked(Position::new(a.row, col)));
    }
    if a.col == b.col {
        let (lo, hi) = (a.row.min(b.row), a.row.max(b.row));
        return (lo + 1..hi).all(|row| !grid.is_blocked(Position::new(row, a.col)));
    }
    false
}
