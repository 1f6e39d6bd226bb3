//! Core rule engine - pure, deterministic, and testable
//!
//! This crate owns every rule of the tile-matching puzzle: the board, the
//! session counters, group detection, gravity, refill, reshuffling, scoring and
//! the booster strategies. It has **no dependencies** on terminal I/O, so the
//! same engine runs under the terminal frontend, in tests and in benches.
//!
//! - **Deterministic**: all randomness comes from an injected [`RandomSource`]
//! - **Single mutator**: [`GameController`] is the only type that changes the model
//! - **No-op on bad input**: out-of-range taps and empty cells change nothing
//!
//! # Module Structure
//!
//! - [`board`]: `rows x cols` grid of optional tiles, owns the tile id counter
//! - [`model`]: board plus score, moves, goal, shuffle allowance, booster inventory
//! - [`controller`]: find/remove/drop/refill/shuffle and win/loss evaluation
//! - [`booster`]: ChooseGroup, SwapTile and Bomb tap strategies
//! - [`rng`]: seedable LCG behind the `RandomSource` trait
//! - [`scoring`]: triangular group score
//! - [`snapshot`]: serialisable observer view
//!
//! # Game Rules
//!
//! - A **group** is a 4-connected set of same-coloured tiles; only groups of
//!   two or more may be removed
//! - Removing `n` tiles scores `n * (n + 1) / 2`
//! - After a removal tiles fall down their column and empty cells are refilled
//! - A board without any adjacent same-coloured pair is reshuffled, spending
//!   one of three shuffles
//! - The game is **lost** when moves run out short of the goal, or when the
//!   board is dead with no shuffles left; it is **won** when the goal is reached
//!   with moves to spare. A loss is reported first.
//!
//! # Example
//!
//! ```
//! use tile_blast_core::{Board, GameController, SimpleRng};
//! use tile_blast_types::{GameStatus, TileColor::{Blue as B, Red as R}};
//!
//! let board = Board::from_colors(&[vec![R, R, B], vec![B, R, B]]).unwrap();
//! let mut game = GameController::from_board(board, SimpleRng::new(12345));
//! game.set_moves(5);
//! game.set_goal_score(6);
//!
//! let group = game.find_match(0, 0);
//! assert_eq!(group.len(), 3);
//!
//! game.remove_group(&group);
//! game.do_move();
//! game.drop_tiles();
//! game.create_new_tiles();
//!
//! assert_eq!(game.score(), 6);
//! assert!(game.board().is_full());
//! assert_eq!(game.status(), GameStatus::Won);
//! ```

pub mod board;
pub mod booster;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tile_blast_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Cell};
pub use booster::{Booster, BoosterOutcome};
pub use controller::GameController;
pub use error::ConfigError;
pub use model::{BoosterInventory, Model};
pub use rng::{RandomSource, SimpleRng};
pub use scoring::group_score;
pub use snapshot::GameSnapshot;
