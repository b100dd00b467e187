//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] commands.
//! Each key press is one command. There is no repeat timer here: held keys
//! rely on the terminal's own repeat, and [`repeats`] says which actions
//! should honour it.

pub mod map;

pub use tui_tetromino_types as types;

pub use map::{handle_key_event, repeats, should_quit};
