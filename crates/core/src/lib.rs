//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state. It has no dependency on the
//! terminal, input devices or clocks, which makes it:
//!
//! - **Deterministic**: a seed (or a scripted piece source) fixes the whole game
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: any front end can drive it by calling `tick` on a timer
//!
//! # Module Structure
//!
//! - [`board`]: grid with collision detection, locking and line clearing
//! - [`game_state`]: the engine: current/next piece, counters, phases
//! - [`pieces`]: the seven catalog shapes, rotation and piece spawning
//! - [`rng`]: injectable piece selection (seeded uniform or scripted)
//! - [`scoring`]: points per clear, level progression, gravity interval
//! - [`snapshot`]: plain-data copy of the engine state for rendering
//!
//! # Example
//!
//! ```
//! use tui_tetromino_core::{gravity_interval_ms, GameState};
//! use tui_tetromino_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! let cleared = game.tick();
//!
//! assert_eq!(cleared, 0);
//! assert_eq!(game.level(), 1);
//! assert_eq!(gravity_interval_ms(game.level()), 1000);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use tui_tetromino_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use pieces::{spawn_shape, Piece, Shape, CATALOG};
pub use rng::{PieceSource, RandomPieces, ScriptedPieces, SimpleRng};
pub use scoring::{gravity_interval_ms, level_for_lines, line_clear_points};
pub use snapshot::{GameSnapshot, Grid};
