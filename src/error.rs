use thiserror::Error;

use crate::ai::Difficulty;
use crate::components::Position;

/// Precondition violations at the AI boundary.
///
/// Path and visibility queries never fail; they degrade to "stay" or the
/// unreachable sentinel. These errors mean the host handed the AI something
/// it cannot reason about.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: i32, cols: i32 },

    #[error("adversary position {position} lies outside the grid")]
    OutOfBounds { position: Position },

    #[error("grid does not expose an exit cell")]
    MissingExit,

    #[error("cannot restore a {found} snapshot into a {expected} strategy")]
    SnapshotMismatch {
        expected: Difficulty,
        found: Difficulty,
    },

    #[error("search cursor {index} exceeds search path length {len}")]
    SearchCursorOutOfRange { index: usize, len: usize },

    #[error("invalid AI configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors raised while parsing a stage map.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,

    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile '{tile}' at row {row}, col {col}")]
    UnknownTile { row: usize, col: usize, tile: String },

    #[error("multiple exits: {first} and {second}")]
    DuplicateExit { first: Position, second: Position },
}

pub type AiResult<T> = Result<T, AiError>;
