//! Adversary AI. Each difficulty is a strategy that picks the mummy's next
//! tile once per adversary turn and can save and restore its memory for
//! undo/redo.

pub mod easy;
pub mod hard;
pub mod intercept;
pub mod medium;
pub mod pathfinder;
pub mod spiral;
pub mod visibility;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::components::Position;
use crate::config::AiConfig;
use crate::error::AiError;
use crate::grid::{GridQuery, GridView};
use easy::{EasyAi, EasySnapshot};
use hard::{HardAi, HardSnapshot};
use medium::{MediumAi, MediumSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = AiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(AiError::InvalidConfig(format!("unknown difficulty '{}'", other))),
        }
    }
}

/// The contract every adversary strategy fulfils.
pub trait Strategy {
    fn difficulty(&self) -> Difficulty;

    /// The mummy's tile after this turn; may equal `mummy`.
    fn decide_move(
        &mut self,
        mummy: Position,
        target: Position,
        grid: &dyn GridQuery,
    ) -> Result<Position, AiError>;

    /// Capture all mutable memory.
    fn snapshot(&self) -> StrategySnapshot;

    /// Replace memory with a snapshot taken from the same difficulty.
    /// On error the strategy is left untouched.
    fn restore(&mut self, snapshot: &StrategySnapshot, grid: &dyn GridQuery) -> Result<(), AiError>;
}

/// Saved strategy memory, tagged by difficulty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "difficulty", rename_all = "snake_case")]
pub enum StrategySnapshot {
    Easy(EasySnapshot),
    Medium(MediumSnapshot),
    Hard(HardSnapshot),
}

impl StrategySnapshot {
    pub fn difficulty(&self) -> Difficulty {
        match self {
            StrategySnapshot::Easy(_) => Difficulty::Easy,
            StrategySnapshot::Medium(_) => Difficulty::Medium,
            StrategySnapshot::Hard(_) => Difficulty::Hard,
        }
    }

    pub fn to_json(&self) -> Result<String, AiError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, AiError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// One adversary's strategy, chosen once per level.
#[derive(Debug, Clone)]
pub enum MummyAi {
    Easy(EasyAi),
    Medium(MediumAi),
    Hard(HardAi),
}

impl MummyAi {
    /// Build the strategy for `difficulty`. Hard reads the exit from `grid`.
    pub fn new(difficulty: Difficulty, grid: &dyn GridQuery, config: &AiConfig) -> Result<Self, AiError> {
        config.validate()?;
        GridView::new(grid)?;
        Ok(match difficulty {
            Difficulty::Easy => MummyAi::Easy(EasyAi::new(config.easy)),
            Difficulty::Medium => MummyAi::Medium(MediumAi::new(config.medium)?),
            Difficulty::Hard => MummyAi::Hard(HardAi::from_grid(grid, config.hard)?),
        })
    }

    fn inner(&self) -> &dyn Strategy {
        match self {
            MummyAi::Easy(ai) => ai,
            MummyAi::Medium(ai) => ai,
            MummyAi::Hard(ai) => ai,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Strategy {
        match self {
            MummyAi::Easy(ai) => ai,
            MummyAi::Medium(ai) => ai,
            MummyAi::Hard(ai) => ai,
        }
    }
}

impl Strategy for MummyAi {
    fn difficulty(&self) -> Difficulty {
        self.inner().difficulty()
    }

    fn decide_move(
        &mut self,
        mummy: Position,
        target: Position,
        grid: &dyn GridQuery,
    ) -> Result<Position, AiError> {
        self.inner_mut().decide_move(mummy, target, grid)
    }

    fn snapshot(&self) -> StrategySnapshot {
        self.inner().snapshot()
    }

    fn restore(&mut self, snapshot: &StrategySnapshot, grid: &dyn GridQuery) -> Result<(), AiError> {
        self.inner_mut().restore(snapshot, grid)
    }
}
