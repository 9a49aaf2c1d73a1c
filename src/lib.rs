//! Adversary AI for a grid maze chase: pathfinding, line of sight, search
//! patterns and three difficulty strategies for the mummy.

pub mod ai;
pub mod components;
pub mod config;
pub mod error;
pub mod grid;
pub mod maze;

pub use ai::hard::{HardAi, HardState};
pub use ai::{Difficulty, MummyAi, Strategy, StrategySnapshot};
pub use components::{Direction, Position};
pub use config::AiConfig;
pub use error::{AiError, AiResult, MapError};
pub use grid::{GridQuery, GridView};
pub use maze::TileMap;
