//! Tile Blast (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, benches and
//! integration tests can use `tile_blast::{core,engine,input,term,types}`.

pub use tile_blast_core as core;
pub use tile_blast_engine as engine;
pub use tile_blast_input as input;
pub use tile_blast_term as term;
pub use tile_blast_types as types;
