//! Terminal falling-block puzzle game (workspace facade crate).
//!
//! The engine, input mapping and renderer live in dedicated crates under
//! `crates/`; this package re-exports them under one name and owns the
//! runner's configuration and event log.

pub mod config;
pub mod event_log;

pub use tui_tetromino_core as core;
pub use tui_tetromino_input as input;
pub use tui_tetromino_term as term;
pub use tui_tetromino_types as types;
