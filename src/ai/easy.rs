//! Easy AI: probabilistic chase mixed with a random walk.
//!
//! The closer the target, the likelier a single greedy step along a randomly
//! picked axis; otherwise a step in a random direction. No path planning and
//! no stuck recovery. All randomness comes from a strategy-owned linear
//! congruential generator so a snapshot replays the same rolls.

use micromegas_tracing::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::{Difficulty, Strategy, StrategySnapshot};
use crate::components::{Direction, Position};
use crate::config::EasyTuning;
use crate::error::AiError;
use crate::grid::{GridQuery, GridView};

/// 32-bit linear congruential generator with 15-bit output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Next roll in `0..32768`.
    pub fn roll(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (self.state / 65_536) % 32_768
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasySnapshot {
    pub rng_state: u32,
}

#[derive(Debug, Clone)]
pub struct EasyAi {
    tuning: EasyTuning,
    rng: Lcg,
}

impl EasyAi {
    pub fn new(tuning: EasyTuning) -> Self {
        let rng = tuning.seed.map_or_else(Lcg::from_entropy, Lcg::new);
        info!("easy ai ready, seed={}", rng.state());
        Self { tuning, rng }
    }

    pub fn with_seed(seed: u32) -> Self {
        Self::new(EasyTuning {
            seed: Some(seed),
            ..EasyTuning::default()
        })
    }

    /// Percent chance to chase at a given Manhattan distance.
    pub fn chase_chance(&self, distance: u32) -> u32 {
        let excess = i64::from(distance) - i64::from(self.tuning.chase_threshold);
        (100 - excess * i64::from(self.tuning.slope)).clamp(0, 100) as u32
    }
}

impl Strategy for EasyAi {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }

    fn decide_move(
        &mut self,
        mummy: Position,
        target: Position,
        grid: &dyn GridQuery,
    ) -> Result<Position, AiError> {
        span_scope!("easy_ai");
        let grid = GridView::new(grid)?;
        grid.check_inside(mummy)?;

        let chance = self.chase_chance(mummy.manhattan(target));
        let chase = self.rng.roll() % 100 < chance;

        let next = if chase {
            if self.rng.roll() & 1 == 1 {
                Position::new(mummy.row + (target.row - mummy.row).signum(), mummy.col)
            } else {
                Position::new(mummy.row, mummy.col + (target.col - mummy.col).signum())
            }
        } else {
            let dir = Direction::SEARCH_ORDER[(self.rng.roll() % 4) as usize];
            mummy.offset(dir)
        };

        Ok(if grid.is_open(next) { next } else { mummy })
    }

    fn snapshot(&self) -> StrategySnapshot {
        StrategySnapshot::Easy(EasySnapshot {
            rng_state: self.rng.state(),
        })
    }

    fn restore(&mut self, snapshot: &StrategySnapshot, grid: &dyn GridQuery) -> Result<(), AiError> {
        GridView::new(grid)?;
        match snapshot {
            StrategySnapshot::Easy(saved) => {
                self.rng = Lcg::new(saved.rng_state);
                Ok(())
            }
            other => {
                warn!("easy ai ignoring {} snapshot", other.difficulty());
                Err(AiError::SnapshotMismatch {
                    expected: Difficulty::Easy,
                    found: other.difficulty(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::TileMap;

    #[test]
    fn lcg_matches_reference_sequence() {
        let mut rng = Lcg::new(1);
        // state = 1 * 1103515245 + 12345 = 1103527590 -> 1103527590 / 65536 = 16838
        assert_eq!(rng.roll(), 16838);
        assert_eq!(rng.state(), 1_103_527_590);
        let mut again = Lcg::new(1);
        again.roll();
        assert_eq!(rng.roll(), again.roll());
    }

    #[test]
    fn chase_chance_clamps() {
        let ai = EasyAi::with_seed(0);
        assert_eq!(ai.chase_chance(0), 100);
        assert_eq!(ai.chase_chance(7), 100);
        assert_eq!(ai.chase_chance(8), 95);
        assert_eq!(ai.chase_chance(27), 0);
        assert_eq!(ai.chase_chance(500), 0);
    }

    #[test]
    fn moves_are_adjacent_and_walkable() {
        let map = TileMap::parse("#####\n#...#\n#.#.#\n#...#\n#####").unwrap();
        let mut ai = EasyAi::with_seed(99);
        let mut mummy = Position::new(1, 1);
        let target = Position::new(3, 3);
        for _ in 0..200 {
            let next = ai.decide_move(mummy, target, &map).unwrap();
            assert!(next.manhattan(mummy) <= 1);
            assert!(!map.is_blocked(next.col, next.row));
            mummy = next;
        }
    }

    #[test]
    fn same_seed_same_walk() {
        let map = TileMap::open(9, 9);
        let mut a = EasyAi::with_seed(7);
        let mut b = EasyAi::with_seed(7);
        let (mut pa, mut pb) = (Position::new(0, 0), Position::new(0, 0));
        let target = Position::new(8, 8);
        for _ in 0..50 {
            pa = a.decide_move(pa, target, &map).unwrap();
            pb = b.decide_move(pb, target, &map).unwrap();
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn close_target_is_always_chased() {
        // Distance 2 gives a 100% chase chance; every step must close in.
        let map = TileMap::open(5, 5);
        for seed in 0..50 {
            let mut ai = EasyAi::with_seed(seed);
            let mummy = Position::new(2, 0);
            let target = Position::new(2, 2);
            let next = ai.decide_move(mummy, target, &map).unwrap();
            // Either the column step or a zero row step (stay).
            assert!(next == Position::new(2, 1) || next == mummy);
        }
    }

    #[test]
    fn rejects_foreign_snapshot() {
        let map = TileMap::open(3, 3);
        let mut ai = EasyAi::with_seed(3);
        let foreign = crate::ai::medium::MediumAi::default().snapshot();
        let before = ai.snapshot();
        assert!(matches!(
            ai.restore(&foreign, &map),
            Err(AiError::SnapshotMismatch { expected: Difficulty::Easy, found: Difficulty::Medium })
        ));
        assert_eq!(ai.snapshot(), before);
    }
}
