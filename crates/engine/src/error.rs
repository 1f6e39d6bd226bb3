use thiserror::Error;

use tile_blast_types::BoosterKind;

/// Why a tap, booster selection or shuffle was rejected
///
/// A rejected request never changes the board or spends a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TapError {
    #[error("game is not playable")]
    NotPlayable,
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("group of {size} tile(s) is too small to remove")]
    GroupTooSmall { size: usize },
    #[error("no tiles in range of ({row}, {col})")]
    NothingInRange { row: i32, col: i32 },
    #[error("no {} booster left", .0.as_str())]
    BoosterUnavailable(BoosterKind),
    #[error("no shuffles left")]
    ShuffleUnavailable,
}

impl TapError {
    pub fn code(self) -> &'static str {
        match self {
            TapError::NotPlayable => "not_playable",
            TapError::OutOfBounds { .. } => "out_of_bounds",
            TapError::GroupTooSmall { .. } => "group_too_small",
            TapError::NothingInRange { .. } => "nothing_in_range",
            TapError::BoosterUnavailable(_) => "booster_unavailable",
            TapError::ShuffleUnavailable => "shuffle_unavailable",
        }
    }
}
