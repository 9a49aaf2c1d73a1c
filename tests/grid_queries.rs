//! Property checks for the pathfinder, line of sight and spiral search on
//! seeded random maps.

mod common;

use mummy_ai::ai::pathfinder::{UNREACHABLE, distance, first_step};
use mummy_ai::ai::spiral::spiral_search;
use mummy_ai::ai::visibility::has_line_of_sight;
use mummy_ai::{GridQuery, GridView, Position};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn distance_matches_reference_bfs() {
    let mut rng = StdRng::seed_from_u64(0x6d756d6d79);
    for _ in 0..40 {
        let map = common::random_map(&mut rng, 0.3);
        let grid = GridView::new(&map).unwrap();
        let cells = common::open_cells(&map);
        for &start in cells.iter().step_by(3) {
            let reference = common::reference_distances(&map, start);
            for &goal in &cells {
                let expected = reference.get(&goal).copied().unwrap_or(UNREACHABLE);
                assert_eq!(
                    distance(start, goal, &grid),
                    expected,
                    "distance {} -> {}",
                    start,
                    goal
                );
            }
        }
    }
}

#[test]
fn first_step_closes_distance_by_one() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..40 {
        let map = common::random_map(&mut rng, 0.25);
        let grid = GridView::new(&map).unwrap();
        let cells = common::open_cells(&map);
        for &start in cells.iter().step_by(2) {
            for &goal in cells.iter().step_by(5) {
                let before = distance(start, goal, &grid);
                let step = first_step(start, goal, &grid);
                if start == goal || before == UNREACHABLE {
                    assert_eq!(step, start, "no move expected {} -> {}", start, goal);
                    continue;
                }
                assert_eq!(step.manhattan(start), 1);
                assert_eq!(distance(step, goal, &grid), before - 1);
            }
        }
    }
}

#[test]
fn line_of_sight_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let map = common::random_map(&mut rng, 0.3);
        let grid = GridView::new(&map).unwrap();
        let cells = common::open_cells(&map);
        for &a in &cells {
            for &b in &cells {
                assert_eq!(
                    has_line_of_sight(a, b, &grid),
                    has_line_of_sight(b, a, &grid),
                    "sight {} <-> {}",
                    a,
                    b
                );
            }
        }
    }
}

#[test]
fn spiral_is_deterministic_and_walkable() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let map = common::random_map(&mut rng, 0.3);
        let grid = GridView::new(&map).unwrap();
        for center in common::open_cells(&map) {
            let first = spiral_search(center, 3, &grid);
            let second = spiral_search(center, 3, &grid);
            assert_eq!(first, second);
            let mut last_ring = 1;
            for cell in &first {
                let ring = center.chebyshev(*cell);
                assert!((1..=3).contains(&ring), "{} is at ring {}", cell, ring);
                assert!(ring >= last_ring, "rings must not go back inward");
                assert!(!map.is_blocked(cell.col, cell.row));
                last_ring = ring;
            }
        }
    }
}

/// Walls at column 3 except on row 2, expressed only in (x, y).
struct ColumnGate;

impl GridQuery for ColumnGate {
    fn is_blocked(&self, x: i32, y: i32) -> bool {
        if !(0..6).contains(&x) || !(0..3).contains(&y) {
            return true;
        }
        x == 3 && y != 2
    }

    fn rows(&self) -> i32 {
        3
    }

    fn cols(&self) -> i32 {
        6
    }
}

#[test]
fn grid_queries_are_flipped_to_x_then_y() {
    let grid = GridView::new(&ColumnGate).unwrap();
    assert!(grid.is_blocked(Position::new(0, 3)));
    assert!(!grid.is_blocked(Position::new(2, 3)));
    // Down to row 2, through the gate, back up.
    assert_eq!(distance(Position::new(0, 0), Position::new(0, 5), &grid), 9);
    assert_eq!(first_step(Position::new(0, 0), Position::new(0, 5), &grid), Position::new(1, 0));
    assert!(!has_line_of_sight(Position::new(0, 0), Position::new(0, 5), &grid));
    assert!(has_line_of_sight(Position::new(2, 0), Position::new(2, 5), &grid));
}
