//! The boundary between the AI and the maze collaborator.
//!
//! The maze answers walkability questions in (x = col, y = row) order; the AI
//! works in (row, col). [`GridView`] is the only place the pair is flipped.

use crate::components::{Direction, Position};
use crate::error::AiError;

/// Read-only grid queries supplied by the maze/map component.
pub trait GridQuery {
    /// True for walls and for any out-of-bounds coordinate.
    fn is_blocked(&self, x: i32, y: i32) -> bool;

    fn rows(&self) -> i32;

    fn cols(&self) -> i32;

    /// The cell the adversary defends, if the map has one.
    fn exit_position(&self) -> Option<Position> {
        None
    }
}

/// A validated (row, col) view over a borrowed grid.
#[derive(Clone, Copy)]
pub struct GridView<'a> {
    grid: &'a dyn GridQuery,
    rows: i32,
    cols: i32,
}

impl<'a> GridView<'a> {
    /// Rejects grids without at least one row and one column.
    pub fn new(grid: &'a dyn GridQuery) -> Result<Self, AiError> {
        let (rows, cols) = (grid.rows(), grid.cols());
        if rows <= 0 || cols <= 0 {
            return Err(AiError::EmptyGrid { rows, cols });
        }
        Ok(Self { grid, rows, cols })
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0 && pos.row < self.rows && pos.col >= 0 && pos.col < self.cols
    }

    /// Blocked check in AI coordinates. Out-of-bounds is blocked.
    pub fn is_blocked(&self, pos: Position) -> bool {
        self.grid.is_blocked(pos.col, pos.row)
    }

    /// A tile the adversary may stand on.
    pub fn is_open(&self, pos: Position) -> bool {
        self.contains(pos) && !self.is_blocked(pos)
    }

    /// Walkable 4-neighbors of `pos`, in [`Direction::SEARCH_ORDER`].
    pub fn open_neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::SEARCH_ORDER
            .into_iter()
            .map(move |dir| pos.offset(dir))
            .filter(move |next| self.is_open(*next))
    }

    /// Geometric center, (rows / 2, cols / 2).
    pub fn center(&self) -> Position {
        Position::new(self.rows / 2, self.cols / 2)
    }

    /// Clamp into the interior, rows 1..=rows-2 and cols 1..=cols-2.
    pub fn clamp_interior(&self, pos: Position) -> Position {
        Position::new(
            pos.row.min(self.rows - 2).max(1),
            pos.col.min(self.cols - 2).max(1),
        )
    }

    /// Fails when the adversary itself stands outside the grid.
    pub fn check_inside(&self, pos: Position) -> Result<(), AiError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(AiError::OutOfBounds { position: pos })
        }
    }
}
