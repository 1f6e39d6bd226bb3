//! Game controller - the only mutator of the model
//!
//! Every state transition (matching, removal, gravity, refill, shuffle,
//! scoring, win/loss evaluation) goes through [`GameController`]. Each call
//! runs to completion and leaves the position invariant intact; a frontend
//! that animates a turn simply calls the steps one after another:
//!
//! ```text
//! find_match -> remove_group -> drop_tiles -> create_new_tiles -> status
//! ```
//!
//! Randomness comes from the injected [`RandomSource`], so a seeded
//! controller replays the same refills and shuffles.

use log::{debug, trace, warn};

use crate::board::Board;
use crate::config;
use crate::error::ConfigError;
use crate::model::{BoosterInventory, Model};
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::group_score;
use crate::snapshot::GameSnapshot;
use crate::types::{GameConfig, GameStatus, Tile, TileColor, MAX_SHUFFLE_ATTEMPTS};

#[derive(Debug, Clone)]
pub struct GameController<R: RandomSource = SimpleRng> {
    model: Model,
    rng: R,
}

impl GameController<SimpleRng> {
    /// Build a controller from a full session configuration
    ///
    /// Seeds a [`SimpleRng`] from `config.seed` and applies the configured
    /// counters.
    pub fn from_config(config: &GameConfig) -> Result<Self, ConfigError> {
        config::validate(config)?;
        let mut controller = Self::new(config.rows, config.cols, SimpleRng::new(config.seed))?;
        controller.apply_config(config);
        Ok(controller)
    }
}

impl<R: RandomSource> GameController<R> {
    /// Create a controller with a fresh random board
    ///
    /// A board that starts without any group is shuffled once up front; this
    /// does not spend the player's shuffle allowance.
    pub fn new(rows: i32, cols: i32, mut rng: R) -> Result<Self, ConfigError> {
        let board = Board::new(rows, cols, &mut rng)?;
        let mut controller = Self {
            model: Model::new(board),
            rng,
        };
        if !controller.has_any_group() {
            debug!("initial board has no group, shuffling");
            controller.shuffle();
        }
        Ok(controller)
    }

    /// Wrap an existing board as-is
    pub fn from_board(board: Board, rng: R) -> Self {
        Self {
            model: Model::new(board),
            rng,
        }
    }

    /// Copy moves, goal, shuffle allowance and booster counts from `config`
    pub fn apply_config(&mut self, config: &GameConfig) {
        self.model.moves = config.moves;
        self.model.goal_score = config.goal_score;
        self.model.shuffle_count = config.shuffle_allowance;
        self.model.inventory = BoosterInventory::new(config.swap_boosters, config.bomb_boosters);
    }

    /// Replace the model with a new one (restart)
    ///
    /// The RNG carries over, so consecutive sessions differ.
    pub fn reset(&mut self, rows: i32, cols: i32) -> Result<(), ConfigError> {
        let board = Board::new(rows, cols, &mut self.rng)?;
        self.model = Model::new(board);
        if !self.has_any_group() {
            self.shuffle();
        }
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.model.board
    }

    pub fn rows(&self) -> i32 {
        self.model.board.rows()
    }

    pub fn cols(&self) -> i32 {
        self.model.board.cols()
    }

    pub fn score(&self) -> u32 {
        self.model.score
    }

    pub fn goal_score(&self) -> u32 {
        self.model.goal_score
    }

    pub fn set_goal_score(&mut self, score: u32) {
        self.model.goal_score = score;
    }

    pub fn moves(&self) -> i32 {
        self.model.moves
    }

    pub fn set_moves(&mut self, moves: i32) {
        self.model.moves = moves;
    }

    pub fn shuffle_count(&self) -> u32 {
        self.model.shuffle_count
    }

    pub fn set_shuffle_count(&mut self, count: u32) {
        self.model.shuffle_count = count;
    }

    pub fn inventory(&self) -> BoosterInventory {
        self.model.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut BoosterInventory {
        &mut self.model.inventory
    }

    /// Tile at (row, col); `None` if empty or out of bounds
    pub fn get_tile(&self, row: i32, col: i32) -> Option<Tile> {
        self.model.board.get(row, col)
    }

    /// Place a tile (or clear the cell); the tile's row/col follow the cell
    ///
    /// Out-of-bounds writes are ignored and return false.
    pub fn set_tile(&mut self, row: i32, col: i32, tile: Option<Tile>) -> bool {
        self.model.board.set(row, col, tile)
    }

    /// Exchange two tiles, returning `[first, second]` at their new cells
    ///
    /// Both cells must hold a tile; otherwise nothing changes.
    pub fn swap_tiles(&mut self, a: (i32, i32), b: (i32, i32)) -> Option<[Tile; 2]> {
        let board = &mut self.model.board;
        if board.get(a.0, a.1).is_none() || board.get(b.0, b.1).is_none() {
            return None;
        }
        board.swap(a, b);
        let first = board.get(b.0, b.1)?;
        let second = board.get(a.0, a.1)?;
        Some([first, second])
    }

    /// The same-colour group connected to (row, col)
    ///
    /// Iterative flood fill over orthogonal neighbours. Empty or
    /// out-of-bounds cells yield an empty group. Order is unspecified.
    pub fn find_match(&self, row: i32, col: i32) -> Vec<Tile> {
        let board = &self.model.board;
        let Some(start) = board.get(row, col) else {
            return Vec::new();
        };

        let cols = board.cols() as usize;
        let mut visited = vec![false; board.cells().len()];
        let mut stack = vec![(row, col)];
        let mut group = Vec::new();

        while let Some((r, c)) = stack.pop() {
            let idx = (r as usize) * cols + (c as usize);
            if visited[idx] {
                continue;
            }
            visited[idx] = true;

            let Some(tile) = board.get(r, c) else {
                continue;
            };
            group.push(tile);

            for (nr, nc) in board.neighbours(r, c) {
                let nidx = (nr as usize) * cols + (nc as usize);
                if visited[nidx] {
                    continue;
                }
                if board.get(nr, nc).is_some_and(|t| t.color == start.color) {
                    stack.push((nr, nc));
                }
            }
        }
        group
    }

    /// Points a group would score
    pub fn score_of_group(&self, group: &[Tile]) -> u32 {
        group_score(group.len())
    }

    /// Remove a group from the board and score it
    ///
    /// Only tiles still sitting at their recorded cell are removed, so a tile
    /// listed twice (or a stale copy) is neither removed nor scored twice.
    /// Returns the ids actually removed.
    pub fn remove_group(&mut self, group: &[Tile]) -> Vec<u32> {
        let board = &mut self.model.board;
        let mut removed = Vec::with_capacity(group.len());
        for tile in group {
            match board.get(tile.row, tile.col) {
                Some(current) if current.id == tile.id => {
                    board.take(tile.row, tile.col);
                    removed.push(tile.id);
                }
                _ => trace!("tile {} not at ({}, {}), skipped", tile.id, tile.row, tile.col),
            }
        }

        let gained = group_score(removed.len());
        self.model.score = self.model.score.saturating_add(gained);
        debug!("removed {} tiles, +{} (score {})", removed.len(), gained, self.model.score);
        removed
    }

    /// Apply gravity column by column
    ///
    /// Tiles fall toward the bottom row keeping their order. Returns only the
    /// tiles whose row changed, at their new position.
    pub fn drop_tiles(&mut self) -> Vec<Tile> {
        let board = &mut self.model.board;
        let rows = board.rows();
        let mut moved = Vec::new();

        for c in 0..board.cols() {
            let mut write = rows - 1;
            for r in (0..rows).rev() {
                let Some(tile) = board.get(r, c) else {
                    continue;
                };
                if write != r {
                    board.take(r, c);
                    board.set(write, c, Some(tile));
                    if let Some(landed) = board.get(write, c) {
                        moved.push(landed);
                    }
                }
                write -= 1;
            }
        }
        moved
    }

    /// Fill every empty cell with a new random tile
    ///
    /// Scans column by column, top to bottom, and returns the new tiles in
    /// that order. Afterwards the board has no empty cell.
    pub fn create_new_tiles(&mut self) -> Vec<Tile> {
        let mut created = Vec::new();
        let (rows, cols) = (self.rows(), self.cols());
        for c in 0..cols {
            for r in 0..rows {
                if self.model.board.get(r, c).is_some() {
                    continue;
                }
                let tile = self.model.board.new_tile(r, c, &mut self.rng);
                self.model.board.set(r, c, Some(tile));
                created.push(tile);
            }
        }
        created
    }

    /// True iff two orthogonally adjacent cells share a colour
    ///
    /// Meant for settled boards; empty cells never count as a match.
    pub fn has_any_group(&self) -> bool {
        let board = &self.model.board;
        for r in 0..board.rows() {
            for c in 0..board.cols() {
                if board.same_color((r, c), (r, c + 1)) || board.same_color((r, c), (r + 1, c)) {
                    return true;
                }
            }
        }
        false
    }

    /// Spend one reshuffle and permute the board until a group exists
    ///
    /// Returns every tile in row-major order after the final permutation.
    pub fn do_shuffle(&mut self) -> Vec<Tile> {
        self.model.shuffle_count = self.model.shuffle_count.saturating_sub(1);
        self.shuffle()
    }

    fn shuffle(&mut self) -> Vec<Tile> {
        if !self.group_possible() {
            // No arrangement of these colours can touch; one pass is enough.
            warn!("no arrangement of this board can form a group");
            self.permute();
            return self.model.board.tiles().collect();
        }

        let mut attempts = 0;
        loop {
            self.permute();
            attempts += 1;
            if self.has_any_group() {
                debug!("shuffle found a group after {} attempt(s)", attempts);
                break;
            }
            if attempts >= MAX_SHUFFLE_ATTEMPTS {
                warn!("shuffle gave up after {} attempts", attempts);
                break;
            }
        }
        self.model.board.tiles().collect()
    }

    /// Swap every cell with a uniformly chosen cell
    fn permute(&mut self) {
        let (rows, cols) = (self.rows(), self.cols());
        for r in 0..rows {
            for c in 0..cols {
                let tr = self.rng.next_range(rows as u32) as i32;
                let tc = self.rng.next_range(cols as u32) as i32;
                self.model.board.swap((r, c), (tr, tc));
            }
        }
    }

    /// Some colour appears at least twice, so some permutation has a group
    fn group_possible(&self) -> bool {
        let mut counts = [0usize; TileColor::COUNT];
        for tile in self.model.board.tiles() {
            let slot = TileColor::ALL
                .iter()
                .position(|&color| color == tile.color)
                .unwrap_or(0);
            counts[slot] += 1;
            if counts[slot] >= 2 {
                return true;
            }
        }
        false
    }

    /// Spend one move
    pub fn do_move(&mut self) {
        self.model.moves -= 1;
    }

    /// Out of moves short of the goal, or deadlocked with no shuffles left
    pub fn is_game_over(&self) -> bool {
        let model = &self.model;
        if model.moves <= 0 && model.score < model.goal_score {
            return true;
        }
        !self.has_any_group() && model.shuffle_count == 0
    }

    /// Goal reached with moves to spare
    pub fn is_win(&self) -> bool {
        self.model.moves > 0 && self.model.score >= self.model.goal_score
    }

    /// Current state; a loss is reported before a win
    ///
    /// Spending the last move on the goal is a win even though
    /// [`is_win`](Self::is_win) needs a move left.
    pub fn status(&self) -> GameStatus {
        if self.is_game_over() {
            GameStatus::Lost
        } else if self.is_win() || self.model.moves <= 0 {
            // Out of moves without a loss: the goal was met.
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// Observer view of the model
    pub fn snapshot(&self) -> GameSnapshot {
        let model = &self.model;
        GameSnapshot {
            rows: model.board.rows(),
            cols: model.board.cols(),
            cells: model.board.cells().to_vec(),
            score: model.score,
            goal_score: model.goal_score,
            moves: model.moves,
            shuffle_count: model.shuffle_count,
            swap_boosters: model.inventory.swap,
            bomb_boosters: model.inventory.bomb,
            status: self.status(),
            active_booster: Default::default(),
            pending_swap: None,
        }
    }
}
