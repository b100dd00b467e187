//! Terminal rendering for the falling-block game.
//!
//! Frames are composed into a plain framebuffer by [`GameView`] (no I/O) and
//! flushed by [`TerminalRenderer`], which writes only the runs that changed.
//! Board cells are two columns wide so they look square in most fonts.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_tetromino_core as core;
pub use tui_tetromino_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_frame_into, TerminalRenderer};
