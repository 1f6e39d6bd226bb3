//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal gameplay. It avoids widget/layout
//! libraries and renders into a framebuffer that is flushed to the terminal.
//!
//! Pipeline:
//! - [`GameView`] turns a [`core::GameSnapshot`] into a [`FrameBuffer`] (pure)
//! - [`TerminalRenderer`] writes the framebuffer out, diffing against the last frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tile_blast_core as core;
pub use tile_blast_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_rgb, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
