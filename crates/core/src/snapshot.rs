//! Read-only snapshot of a running game
//!
//! Frontends render from a snapshot and never touch the model directly.
//! The snapshot serializes to JSON for observers and logging.

use serde::Serialize;

use crate::types::{BoosterKind, GameStatus, Tile};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub rows: i32,
    pub cols: i32,
    /// Row-major cells, `None` for empty
    pub cells: Vec<Option<Tile>>,
    pub score: u32,
    pub goal_score: u32,
    pub moves: i32,
    pub shuffle_count: u32,
    pub swap_boosters: u32,
    pub bomb_boosters: u32,
    pub status: GameStatus,
    pub active_booster: BoosterKind,
    /// First tap of an unfinished swap
    pub pending_swap: Option<(i32, i32)>,
}

impl GameSnapshot {
    /// Tile at (row, col); `None` if empty or out of bounds
    pub fn cell(&self, row: i32, col: i32) -> Option<Tile> {
        if row < 0 || col < 0 || row >= self.rows || col >= self.cols {
            return None;
        }
        let idx = (row as usize) * (self.cols as usize) + (col as usize);
        self.cells.get(idx).copied().flatten()
    }
}
