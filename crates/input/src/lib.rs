//! Terminal input module (session-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and tracks the board cursor that
//! taps are aimed with.

pub mod cursor;
pub mod map;

pub use tile_blast_types as types;

pub use cursor::Cursor;
pub use map::{handle_key_event, should_quit};
