use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Grid and spatial
// ---------------------------------------------------------------------------

/// A tile on the maze grid, addressed as (row, col).
///
/// Everything inside the AI reasons in (row, col). The grid collaborator is
/// addressed as (x = col, y = row); that flip happens only in
/// [`GridView`](crate::grid::GridView).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The adjacent tile in `dir`. No bounds checking.
    pub fn offset(self, dir: Direction) -> Position {
        let (drow, dcol) = dir.delta();
        Position {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    pub fn manhattan(self, other: Position) -> u32 {
        (self.row - other.row).unsigned_abs() + (self.col - other.col).unsigned_abs()
    }

    /// Ring distance used for spiral membership: max(|drow|, |dcol|).
    pub fn chebyshev(self, other: Position) -> u32 {
        (self.row - other.row)
            .unsigned_abs()
            .max((self.col - other.col).unsigned_abs())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Cardinal direction for movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// Neighbor expansion order shared by BFS and the random walk.
    /// Changing it changes BFS tie-breaks.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// (row, col) offset for this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }
}
