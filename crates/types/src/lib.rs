//! Shared types module - data structures and constants used by every crate
//!
//! Everything here is plain data with no dependencies, so the same definitions
//! serve the engine, the terminal view and the key map.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Scoring and Speed
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `LINE_SCORES` | `[0, 100, 300, 500, 800]` | Points per clear, multiplied by level |
//! | `LINES_PER_LEVEL` | 10 | Lines needed to advance one level |
//! | `BASE_GRAVITY_MS` | 1000 | Gravity interval at level 1 |
//!
//! # Examples
//!
//! ```
//! use tui_tetromino_types::{PieceColor, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::ALL[2];
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.color(), PieceColor::Purple);
//! assert_eq!(piece.as_str(), "t");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_GRAVITY_MS: u32 = 1000;

/// Lines cleared per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring table
///
/// Base points for clearing N lines, multiplied by the current level:
/// - 1 line: 100
/// - 2 lines: 300
/// - 3 lines: 500
/// - 4 lines: 800
///
/// A piece spans at most four rows, so no lock can clear more than four.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino kinds, in catalog order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, indexed the same way as the piece catalog.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Catalog index of this kind.
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }

    /// Fixed color for this kind.
    pub fn color(self) -> PieceColor {
        PieceColor::ALL[self.index()]
    }

    /// Lowercase name, used in the event log
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Cell color of a locked or falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Cyan,
    Yellow,
    Purple,
    Blue,
    Red,
    Green,
    Orange,
}

impl PieceColor {
    /// Colors in catalog order (parallel to [`PieceKind::ALL`]).
    pub const ALL: [PieceColor; 7] = [
        PieceColor::Cyan,
        PieceColor::Yellow,
        PieceColor::Purple,
        PieceColor::Blue,
        PieceColor::Red,
        PieceColor::Green,
        PieceColor::Orange,
    ];

    /// 24-bit RGB value.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            PieceColor::Cyan => (0x00, 0xFF, 0xFF),
            PieceColor::Yellow => (0xFF, 0xFF, 0x00),
            PieceColor::Purple => (0xFF, 0x00, 0xFF),
            PieceColor::Blue => (0x00, 0x00, 0xFF),
            PieceColor::Red => (0xFF, 0x00, 0x00),
            PieceColor::Green => (0x00, 0xFF, 0x00),
            PieceColor::Orange => (0xFF, 0xA5, 0x00),
        }
    }
}

/// A cell on the game board
///
/// - `None`: empty
/// - `Some(color)`: occupied, drawn in `color`
///
/// Occupancy and color share one value, so a cell can never be occupied
/// without a color or colored without being occupied.
pub type Cell = Option<PieceColor>;

/// Commands the presentation layer sends to the engine
///
/// Every command is safe to send at any time; commands that do not apply in
/// the current phase are ignored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Toggle pause state
    Pause,
    /// Start a fresh game (from any state)
    Restart,
}

/// Engine lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Created but never started
    #[default]
    Ready,
    Running,
    Paused,
    /// Terminal until the next restart
    GameOver,
}

/// Emitted by the engine every time a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Points awarded for this lock's line clear.
    pub points: u32,
    /// True when the promoted piece could not spawn.
    pub game_over: bool,
}
