//! Session - one playthrough from a fresh board to win or loss
//!
//! The session sits between the frontend and the controller. It owns the
//! active booster, checks booster inventory, and runs a whole turn:
//!
//! ```text
//! tap -> booster -> remove -> do_move -> drop -> refill -> settle
//! ```
//!
//! Settling evaluates the outcome (a loss first, then a win) and reshuffles a
//! dead board automatically while shuffles remain. Every step the turn took is
//! returned in a [`Turn`] so a frontend can stage its animations.

use log::{debug, info};

use tile_blast_core::config;
use tile_blast_core::{
    Booster, BoosterOutcome, ConfigError, GameController, GameSnapshot, RandomSource, SimpleRng,
};
use tile_blast_types::{BoosterKind, GameConfig, GameStatus, Tile, MIN_GROUP_SIZE};

use crate::error::TapError;

/// Everything a resolved tap changed, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub booster: BoosterKind,
    /// Tiles taken off the board
    pub removed: Vec<Tile>,
    pub score_gained: u32,
    /// The two tiles exchanged by a swap, at their new cells
    pub swapped: Vec<Tile>,
    /// Tiles that fell, at their new cells
    pub dropped: Vec<Tile>,
    /// Refill tiles
    pub created: Vec<Tile>,
    /// Board after an automatic reshuffle, if one happened
    pub reshuffled: Option<Vec<Tile>>,
    pub status: GameStatus,
}

impl Turn {
    fn new(booster: BoosterKind) -> Self {
        Self {
            booster,
            removed: Vec::new(),
            score_gained: 0,
            swapped: Vec::new(),
            dropped: Vec::new(),
            created: Vec::new(),
            reshuffled: None,
            status: GameStatus::Playing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// First half of a swap recorded at (row, col)
    AwaitingSecondTap { row: i32, col: i32 },
    /// The pending swap cell was tapped again
    SwapCancelled,
    Resolved(Turn),
}

#[derive(Debug, Clone)]
pub struct Session<R: RandomSource = SimpleRng> {
    config: GameConfig,
    controller: GameController<R>,
    booster: Booster,
    status: GameStatus,
    /// Monotonic episode id (increments on restart)
    episode_id: u32,
    /// Resolved turns in this episode
    turns: u32,
}

impl Session<SimpleRng> {
    /// Start a session with a board seeded from `config.seed`
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let controller = GameController::from_config(&config)?;
        Self::with_controller(config, controller)
    }
}

impl<R: RandomSource> Session<R> {
    /// Start a session on an existing controller
    ///
    /// The config's moves, goal, shuffle allowance and booster counts
    /// overwrite the controller's counters. The board keeps its size, and
    /// the config takes the board's dimensions so restarts rebuild the same
    /// shape.
    pub fn with_controller(
        mut config: GameConfig,
        mut controller: GameController<R>,
    ) -> Result<Self, ConfigError> {
        config.rows = controller.rows();
        config.cols = controller.cols();
        config::validate(&config)?;
        controller.apply_config(&config);
        let status = controller.status();
        Ok(Self {
            config,
            controller,
            booster: Booster::ChooseGroup,
            status,
            episode_id: 0,
            turns: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn controller(&self) -> &GameController<R> {
        &self.controller
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn active_booster(&self) -> BoosterKind {
        self.booster.kind()
    }

    pub fn pending_swap(&self) -> Option<(i32, i32)> {
        self.booster.pending()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Observer view including booster state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = self.controller.snapshot();
        snap.status = self.status;
        snap.active_booster = self.booster.kind();
        snap.pending_swap = self.booster.pending();
        snap
    }

    /// Make `kind` the active booster
    ///
    /// Switching always drops a half-finished swap.
    pub fn select_booster(&mut self, kind: BoosterKind) -> Result<(), TapError> {
        if self.status.is_terminal() {
            return Err(TapError::NotPlayable);
        }
        if !self.controller.inventory().has(kind) {
            return Err(TapError::BoosterUnavailable(kind));
        }
        self.booster = Booster::for_kind(kind, self.config.bomb_radius);
        debug!("booster {} selected", kind.as_str());
        Ok(())
    }

    /// Apply the active booster at (row, col) and run the rest of the turn
    pub fn tap(&mut self, row: i32, col: i32) -> Result<TapOutcome, TapError> {
        if self.status.is_terminal() {
            return Err(TapError::NotPlayable);
        }
        if !self.controller.board().in_bounds(row, col) {
            return Err(TapError::OutOfBounds { row, col });
        }

        let kind = self.booster.kind();
        let turn = match self.booster.action(&mut self.controller, row, col) {
            BoosterOutcome::NoEffect => {
                return match (kind, self.booster.pending()) {
                    (BoosterKind::SwapTile, Some((row, col))) => {
                        Ok(TapOutcome::AwaitingSecondTap { row, col })
                    }
                    (BoosterKind::SwapTile, None) => Ok(TapOutcome::SwapCancelled),
                    _ => Err(TapError::NothingInRange { row, col }),
                };
            }
            BoosterOutcome::Removed(group) => {
                if kind == BoosterKind::ChooseGroup && group.len() < MIN_GROUP_SIZE {
                    return Err(TapError::GroupTooSmall { size: group.len() });
                }
                self.resolve_removal(kind, &group)
            }
            BoosterOutcome::Moved(tiles) => {
                self.controller.do_move();
                let mut turn = Turn::new(kind);
                turn.swapped = tiles;
                turn
            }
        };

        Ok(TapOutcome::Resolved(self.finish_turn(turn)))
    }

    /// Spend one shuffle on demand
    pub fn shuffle(&mut self) -> Result<Vec<Tile>, TapError> {
        if self.status.is_terminal() {
            return Err(TapError::NotPlayable);
        }
        if self.controller.shuffle_count() == 0 {
            return Err(TapError::ShuffleUnavailable);
        }
        self.booster.reset();
        let tiles = self.controller.do_shuffle();
        debug!("manual shuffle, {} left", self.controller.shuffle_count());
        let status = self.controller.status();
        self.set_status(status);
        Ok(tiles)
    }

    /// Throw the model away and start a new episode with the same config
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        self.controller.reset(self.config.rows, self.config.cols)?;
        self.controller.apply_config(&self.config);
        self.booster = Booster::ChooseGroup;
        self.status = self.controller.status();
        self.episode_id = self.episode_id.wrapping_add(1);
        self.turns = 0;
        info!("episode {} started", self.episode_id);
        Ok(())
    }

    fn resolve_removal(&mut self, kind: BoosterKind, group: &[Tile]) -> Turn {
        let before = self.controller.score();
        let removed_ids = self.controller.remove_group(group);
        self.controller.do_move();

        let mut turn = Turn::new(kind);
        turn.removed = group
            .iter()
            .filter(|tile| removed_ids.contains(&tile.id))
            .copied()
            .collect();
        turn.score_gained = self.controller.score() - before;
        turn.dropped = self.controller.drop_tiles();
        turn.created = self.controller.create_new_tiles();
        turn
    }

    fn finish_turn(&mut self, mut turn: Turn) -> Turn {
        if turn.booster != BoosterKind::ChooseGroup {
            self.controller.inventory_mut().consume(turn.booster);
            self.booster = Booster::ChooseGroup;
        }
        self.turns += 1;

        turn.reshuffled = self.settle();
        turn.status = self.status;
        debug!(
            "turn {}: {} removed {} (+{}), swapped {}, moves {}",
            self.turns,
            turn.booster.as_str(),
            turn.removed.len(),
            turn.score_gained,
            turn.swapped.len(),
            self.controller.moves()
        );
        turn
    }

    /// Evaluate the board after a turn, reshuffling a dead board if allowed
    fn settle(&mut self) -> Option<Vec<Tile>> {
        let mut status = self.controller.status();
        let mut reshuffled = None;
        if status == GameStatus::Playing
            && !self.controller.has_any_group()
            && self.controller.shuffle_count() > 0
        {
            debug!(
                "no group left, reshuffling ({} shuffle(s) before)",
                self.controller.shuffle_count()
            );
            reshuffled = Some(self.controller.do_shuffle());
            status = self.controller.status();
        }
        self.set_status(status);
        reshuffled
    }

    fn set_status(&mut self, status: GameStatus) {
        if status.is_terminal() && !self.status.is_terminal() {
            info!(
                "episode {} {}: score {}/{} with {} move(s) left",
                self.episode_id,
                status.as_str(),
                self.controller.score(),
                self.controller.goal_score(),
                self.controller.moves()
            );
        }
        self.status = status;
    }
}
