//! Snapshot module - a plain-data copy of the engine state, read once per frame

use crate::pieces::Piece;
use crate::types::{Cell, Phase, BOARD_HEIGHT, BOARD_WIDTH};

/// Fixed-size grid matching the standard board
pub type Grid = [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Plain-data copy of every engine query, read once per frame by the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Grid,
    pub current: Option<Piece>,
    pub next: Option<Piece>,
    pub phase: Phase,
    pub episode_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl GameSnapshot {
    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            current: None,
            next: None,
            phase: Phase::Ready,
            episode_id: 0,
            score: 0,
            level: 1,
            lines: 0,
        }
    }
}
