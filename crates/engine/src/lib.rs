//! Turn orchestration on top of the rule engine
//!
//! [`Session`] is what a frontend talks to: it turns taps into complete turns,
//! enforces booster inventory, and tracks the win/loss state of an episode.
//!
//! ```
//! use tile_blast_engine::{Session, TapError};
//! use tile_blast_types::{BoosterKind, GameConfig, GameStatus};
//!
//! let mut session = Session::new(GameConfig::default()).unwrap();
//! assert_eq!(session.status(), GameStatus::Playing);
//!
//! session.select_booster(BoosterKind::Bomb).unwrap();
//! assert!(session.tap(4, 4).is_ok());
//! assert_eq!(session.active_booster(), BoosterKind::ChooseGroup);
//!
//! assert_eq!(session.tap(99, 0), Err(TapError::OutOfBounds { row: 99, col: 0 }));
//! ```

pub mod error;
pub mod session;

pub use error::TapError;
pub use session::{Session, TapOutcome, Turn};
