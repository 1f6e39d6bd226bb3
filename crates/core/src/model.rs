//! Session model - board plus counters
//!
//! The model is plain state. All transitions go through
//! [`GameController`](crate::controller::GameController); a restart replaces
//! the whole model.

use crate::board::Board;
use crate::types::{BoosterKind, SHUFFLE_ALLOWANCE};

/// Remaining booster charges
///
/// `ChooseGroup` is the default strategy and has no inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoosterInventory {
    pub swap: u32,
    pub bomb: u32,
}

impl BoosterInventory {
    pub fn new(swap: u32, bomb: u32) -> Self {
        Self { swap, bomb }
    }

    /// Charges left for `kind` (`None` means unlimited)
    pub fn count(&self, kind: BoosterKind) -> Option<u32> {
        match kind {
            BoosterKind::ChooseGroup => None,
            BoosterKind::SwapTile => Some(self.swap),
            BoosterKind::Bomb => Some(self.bomb),
        }
    }

    /// Whether `kind` can be used right now
    pub fn has(&self, kind: BoosterKind) -> bool {
        self.count(kind).map_or(true, |n| n > 0)
    }

    /// Spend one charge of `kind`
    ///
    /// Returns false when none are left.
    pub fn consume(&mut self, kind: BoosterKind) -> bool {
        let slot = match kind {
            BoosterKind::ChooseGroup => return true,
            BoosterKind::SwapTile => &mut self.swap,
            BoosterKind::Bomb => &mut self.bomb,
        };
        if *slot == 0 {
            return false;
        }
        *slot -= 1;
        true
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    pub(crate) board: Board,
    pub(crate) score: u32,
    pub(crate) goal_score: u32,
    /// May go to zero or below once exhausted
    pub(crate) moves: i32,
    /// Remaining reshuffles
    pub(crate) shuffle_count: u32,
    pub(crate) inventory: BoosterInventory,
}

impl Model {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            score: 0,
            goal_score: 0,
            moves: 0,
            shuffle_count: SHUFFLE_ALLOWANCE,
            inventory: BoosterInventory::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn goal_score(&self) -> u32 {
        self.goal_score
    }

    pub fn moves(&self) -> i32 {
        self.moves
    }

    pub fn shuffle_count(&self) -> u32 {
        self.shuffle_count
    }

    pub fn inventory(&self) -> BoosterInventory {
        self.inventory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inventory_consume_stops_at_zero() {
        let mut inv = BoosterInventory::new(1, 0);
        assert!(inv.has(BoosterKind::SwapTile));
        assert!(inv.consume(BoosterKind::SwapTile));
        assert!(!inv.consume(BoosterKind::SwapTile));
        assert_eq!(inv.swap, 0);
        assert!(!inv.has(BoosterKind::Bomb));
    }

    #[test]
    fn choose_group_is_unlimited() {
        let mut inv = BoosterInventory::default();
        assert_eq!(inv.count(BoosterKind::ChooseGroup), None);
        assert!(inv.has(BoosterKind::ChooseGroup));
        assert!(inv.consume(BoosterKind::ChooseGroup));
    }
}
