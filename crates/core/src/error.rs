//! Construction-time errors.
//!
//! Gameplay itself never fails: out-of-range coordinates and empty cells are
//! treated as no-ops. Only building a board or session from bad parameters
//! is reported as an error.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive and fit in i32 cells, got {rows}x{cols}")]
    InvalidDimensions { rows: i32, cols: i32 },

    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("starting moves must be positive, got {0}")]
    InvalidMoves(i32),

    #[error("bomb radius must not be negative, got {0}")]
    InvalidBombRadius(i32),
}
