//! Breadth-first shortest paths over the 4-connected walkable grid.
//!
//! Ties between equally short paths are broken by neighbor expansion order
//! (down, up, right, left). Every call searches from scratch; the grid is
//! assumed static for the lifetime of a level.

use std::collections::HashMap;

use micromegas_tracing::prelude::*;
use pathfinding::prelude::{bfs, dijkstra_all};

use crate::components::Position;
use crate::grid::GridView;

/// Distance reported when the goal cannot be reached.
pub const UNREACHABLE: u32 = 9999;

/// A shortest path from `start` to `goal`, both ends included.
pub fn shortest_path(start: Position, goal: Position, grid: &GridView<'_>) -> Option<Vec<Position>> {
    bfs(
        &start,
        |pos| grid.open_neighbors(*pos).collect::<Vec<_>>(),
        |pos| *pos == goal,
    )
}

/// First cell on a shortest path from `start` to `goal`.
/// Returns `start` when already there or when the goal is unreachable.
#[span_fn]
pub fn first_step(start: Position, goal: Position, grid: &GridView<'_>) -> Position {
    if start == goal {
        return start;
    }
    shortest_path(start, goal, grid)
        .and_then(|path| path.get(1).copied())
        .unwrap_or(start)
}

/// Hop count of a shortest path, or [`UNREACHABLE`].
#[span_fn]
pub fn distance(start: Position, goal: Position, grid: &GridView<'_>) -> u32 {
    if start == goal {
        return 0;
    }
    shortest_path(start, goal, grid).map_or(UNREACHABLE, |path| (path.len() - 1) as u32)
}

/// Distances between one fixed cell and every cell of the grid, from a single
/// flood. Answers the same values as repeated [`distance`] calls.
#[derive(Debug, Clone)]
pub struct DistanceField {
    anchor: Position,
    costs: HashMap<Position, u32>,
}

impl DistanceField {
    /// `distance(origin, cell)` for every cell.
    pub fn from_origin(origin: Position, grid: &GridView<'_>) -> Self {
        let reached = dijkstra_all(&origin, |pos| {
            grid.open_neighbors(*pos)
                .map(|next| (next, 1u32))
                .collect::<Vec<_>>()
        });
        let costs = reached
            .into_iter()
            .map(|(pos, (_parent, cost))| (pos, cost))
            .collect();
        Self {
            anchor: origin,
            costs,
        }
    }

    /// `distance(cell, goal)` for every walkable cell.
    ///
    /// Walkable cells reach each other symmetrically, but nothing walks onto a
    /// blocked goal, so a blocked goal is unreachable from everywhere else.
    pub fn toward_goal(goal: Position, grid: &GridView<'_>) -> Self {
        if grid.is_open(goal) {
            Self::from_origin(goal, grid)
        } else {
            Self {
                anchor: goal,
                costs: HashMap::new(),
            }
        }
    }

    pub fn get(&self, cell: Position) -> u32 {
        if cell == self.anchor {
            return 0;
        }
        self.costs.get(&cell).copied().unwrap_or(UNREACHABLE)
    }
}
