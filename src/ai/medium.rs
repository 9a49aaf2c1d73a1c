//! Medium AI: greedy chase with BFS stuck recovery.
//!
//! Each turn proposes one step along the axis with the larger gap to the
//! target (rows win ties), staying put when that step is blocked. Proposing
//! the cell it just left, or staying put twice, counts as oscillation; after
//! `stuck_threshold` such turns the strategy follows BFS for a few turns.

use micromegas_tracing::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ai::pathfinder::first_step;
use crate::ai::{Difficulty, Strategy, StrategySnapshot};
use crate::components::Position;
use crate::config::MediumTuning;
use crate::error::AiError;
use crate::grid::{GridQuery, GridView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediumSnapshot {
    pub stuck_counter: u32,
    pub recovery_turns_remaining: u32,
    pub last_position: Option<Position>,
}

#[derive(Debug, Clone, Default)]
pub struct MediumAi {
    tuning: MediumTuning,
    stuck_counter: u32,
    recovery_turns_remaining: u32,
    last_position: Option<Position>,
}

impl MediumAi {
    pub fn new(tuning: MediumTuning) -> Result<Self, AiError> {
        tuning.validate()?;
        info!(
            "medium ai ready, stuck_threshold={} recovery_turns={}",
            tuning.stuck_threshold, tuning.recovery_turns
        );
        Ok(Self {
            tuning,
            ..Self::default()
        })
    }

    pub fn stuck_counter(&self) -> u32 {
        self.stuck_counter
    }

    pub fn recovery_turns_remaining(&self) -> u32 {
        self.recovery_turns_remaining
    }

    pub fn is_recovering(&self) -> bool {
        self.recovery_turns_remaining > 0
    }
}

/// One step along the dominant axis, or `mummy` if that step is blocked.
pub fn greedy_step(mummy: Position, target: Position, grid: &GridView<'_>) -> Position {
    let drow = target.row - mummy.row;
    let dcol = target.col - mummy.col;
    let proposal = if drow.abs() >= dcol.abs() {
        Position::new(mummy.row + drow.signum(), mummy.col)
    } else {
        Position::new(mummy.row, mummy.col + dcol.signum())
    };
    if grid.is_open(proposal) {
        proposal
    } else {
        mummy
    }
}

impl Strategy for MediumAi {
    fn difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }

    fn decide_move(
        &mut self,
        mummy: Position,
        target: Position,
        grid: &dyn GridQuery,
    ) -> Result<Position, AiError> {
        span_scope!("medium_ai");
        let grid = GridView::new(grid)?;
        grid.check_inside(mummy)?;

        if self.recovery_turns_remaining > 0 {
            self.recovery_turns_remaining -= 1;
            self.last_position = Some(mummy);
            return Ok(first_step(mummy, target, &grid));
        }

        let proposal = greedy_step(mummy, target, &grid);
        if Some(proposal) == self.last_position {
            self.stuck_counter += 1;
        } else {
            self.stuck_counter = 0;
        }
        self.last_position = Some(mummy);

        if self.stuck_counter >= self.tuning.stuck_threshold {
            debug!(
                "medium ai stuck at {} for {} turns, recovering with bfs",
                mummy, self.stuck_counter
            );
            self.stuck_counter = 0;
            self.recovery_turns_remaining = self.tuning.recovery_turns;
            return Ok(first_step(mummy, target, &grid));
        }

        Ok(proposal)
    }

    fn snapshot(&self) -> StrategySnapshot {
        StrategySnapshot::Medium(MediumSnapshot {
            stuck_counter: self.stuck_counter,
            recovery_turns_remaining: self.recovery_turns_remaining,
            last_position: self.last_position,
        })
    }

    fn restore(&mut self, snapshot: &StrategySnapshot, grid: &dyn GridQuery) -> Result<(), AiError> {
        GridView::new(grid)?;
        match snapshot {
            StrategySnapshot::Medium(saved) => {
                self.stuck_counter = saved.stuck_counter;
                self.recovery_turns_remaining = saved.recovery_turns_remaining;
                self.last_position = saved.last_position;
                Ok(())
            }
            other => {
                warn!("medium ai ignoring {} snapshot", other.difficulty());
                Err(AiError::SnapshotMismatch {
                    expected: Difficulty::Medium,
                    found: other.difficulty(),
                })
            }
        }
    }
}
