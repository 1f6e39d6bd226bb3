//! Booster strategies
//!
//! A booster turns a tap at `(row, col)` into either a set of tiles to remove
//! or a set of tiles that moved. The result is a tri-state so that "this tap
//! did nothing yet" is never confused with "an empty removal".
//!
//! | Booster | Tap result |
//! |---------|------------|
//! | `ChooseGroup` | `Removed(find_match(row, col))` |
//! | `SwapTile` | first tap `NoEffect`, second tap `Moved([first, second])` |
//! | `Bomb` | `Removed(tiles in square)`, `NoEffect` if the square is empty |
//!
//! Boosters never score or remove anything themselves; the caller decides
//! whether to accept the result (minimum group size, inventory) and runs the
//! removal through the controller.

use log::debug;

use crate::controller::GameController;
use crate::rng::RandomSource;
use crate::types::{BoosterKind, Tile};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoosterOutcome {
    /// The tap changed nothing and must not cost a move
    NoEffect,
    /// Tiles the caller should remove
    Removed(Vec<Tile>),
    /// Tiles already moved on the board, at their new positions
    Moved(Vec<Tile>),
}

impl BoosterOutcome {
    pub fn is_no_effect(&self) -> bool {
        matches!(self, BoosterOutcome::NoEffect)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Booster {
    #[default]
    ChooseGroup,
    SwapTile {
        /// First tap of an unfinished swap
        pending: Option<(i32, i32)>,
    },
    Bomb {
        radius: i32,
    },
}

impl Booster {
    /// Fresh booster for `kind`; `bomb_radius` only matters for `Bomb`
    pub fn for_kind(kind: BoosterKind, bomb_radius: i32) -> Self {
        match kind {
            BoosterKind::ChooseGroup => Booster::ChooseGroup,
            BoosterKind::SwapTile => Booster::SwapTile { pending: None },
            BoosterKind::Bomb => Booster::Bomb {
                radius: bomb_radius.max(0),
            },
        }
    }

    pub fn kind(&self) -> BoosterKind {
        match self {
            Booster::ChooseGroup => BoosterKind::ChooseGroup,
            Booster::SwapTile { .. } => BoosterKind::SwapTile,
            Booster::Bomb { .. } => BoosterKind::Bomb,
        }
    }

    /// Cell recorded by the first tap of a swap
    pub fn pending(&self) -> Option<(i32, i32)> {
        match self {
            Booster::SwapTile { pending } => *pending,
            _ => None,
        }
    }

    /// Forget any half-finished swap
    pub fn reset(&mut self) {
        if let Booster::SwapTile { pending } = self {
            *pending = None;
        }
    }

    /// Apply the booster to a tap at (row, col)
    pub fn action<R: RandomSource>(
        &mut self,
        controller: &mut GameController<R>,
        row: i32,
        col: i32,
    ) -> BoosterOutcome {
        match self {
            Booster::ChooseGroup => BoosterOutcome::Removed(controller.find_match(row, col)),
            Booster::SwapTile { pending } => swap_action(pending, controller, row, col),
            Booster::Bomb { radius } => {
                let tiles = controller.board().tiles_in_square(row, col, *radius);
                if tiles.is_empty() {
                    debug!("bomb at ({}, {}) found no tiles", row, col);
                    return BoosterOutcome::NoEffect;
                }
                BoosterOutcome::Removed(tiles)
            }
        }
    }
}

fn swap_action<R: RandomSource>(
    pending: &mut Option<(i32, i32)>,
    controller: &mut GameController<R>,
    row: i32,
    col: i32,
) -> BoosterOutcome {
    let occupied = controller.get_tile(row, col).is_some();

    let Some(first) = *pending else {
        if occupied {
            *pending = Some((row, col));
        }
        return BoosterOutcome::NoEffect;
    };

    if first == (row, col) {
        debug!("swap cancelled at ({}, {})", row, col);
        *pending = None;
        return BoosterOutcome::NoEffect;
    }

    match controller.swap_tiles(first, (row, col)) {
        Some(pair) => {
            *pending = None;
            BoosterOutcome::Moved(pair.to_vec())
        }
        None => BoosterOutcome::NoEffect,
    }
}
