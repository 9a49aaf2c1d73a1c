//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};

use mummy_ai::{Position, TileMap};
use rand::Rng;
use rand::rngs::StdRng;

pub fn load_stage(name: &str) -> TileMap {
    let path = format!("{}/assets/maps/{}.txt", env!("CARGO_MANIFEST_DIR"), name);
    let text = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", path, e));
    TileMap::parse_numeric(&text).unwrap_or_else(|e| panic!("Failed to parse {}: {}", path, e))
}

/// Cell the target hides in on `pocket_map`.
pub const POCKET: Position = Position::new(7, 7);

/// 15x15 open map, exit in the bottom-right corner, and a walled-in cell at
/// `POCKET` that no other cell can see into.
pub fn pocket_map() -> TileMap {
    let walls = (6..=8)
        .flat_map(|row| (6..=8).map(move |col| Position::new(row, col)))
        .filter(|cell| *cell != POCKET);
    TileMap::open(15, 15)
        .with_walls(walls)
        .with_exit(Position::new(14, 14))
}

/// Random map with roughly `density` walls. Corners are kept open.
pub fn random_map(rng: &mut StdRng, density: f64) -> TileMap {
    let rows = rng.gen_range(4..12);
    let cols = rng.gen_range(4..12);
    let mut walls = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            if rng.gen_bool(density) {
                walls.push(Position::new(row, col));
            }
        }
    }
    let corners = [
        Position::new(0, 0),
        Position::new(rows - 1, cols - 1),
    ];
    walls.retain(|cell| !corners.contains(cell));
    TileMap::open(rows as usize, cols as usize).with_walls(walls)
}

pub fn open_cells(map: &TileMap) -> Vec<Position> {
    (0..map.height() as i32)
        .flat_map(|row| (0..map.width() as i32).map(move |col| Position::new(row, col)))
        .filter(|cell| !is_wall(map, *cell))
        .collect()
}

/// Hop counts from `start` to every reachable open cell, by plain BFS over
/// the tile map.
pub fn reference_distances(map: &TileMap, start: Position) -> HashMap<Position, u32> {
    let mut dist = HashMap::new();
    let mut queue = VecDeque::new();
    dist.insert(start, 0);
    queue.push_back(start);
    while let Some(cell) = queue.pop_front() {
        let d = dist[&cell];
        for (dr, dc) in [(0, 1), (1, 0), (0, -1), (-1, 0)] {
            let next = Position::new(cell.row + dr, cell.col + dc);
            if is_wall(map, next) || dist.contains_key(&next) {
                continue;
            }
            dist.insert(next, d + 1);
            queue.push_back(next);
        }
    }
    dist
}

fn is_wall(map: &TileMap, cell: Position) -> bool {
    map.tile_at(cell).is_none_or(|tile| tile.is_wall())
}
