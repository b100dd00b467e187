//! Game state module - the engine that owns the board and the falling pieces
//!
//! Ties together the board, the piece source and scoring. Every public
//! operation runs to completion synchronously; there are no timers in here.
//! The front end calls [`GameState::tick`] on its own schedule (see
//! [`crate::scoring::gravity_interval_ms`]) and forwards player commands.
//!
//! Commands that do not apply in the current phase (moving while paused,
//! anything after game over) are ignored rather than reported as errors.

use crate::board::Board;
use crate::pieces::Piece;
use crate::rng::{PieceSource, RandomPieces};
use crate::scoring::{level_for_lines, line_clear_points};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, LockEvent, Phase};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomPieces> {
    board: Board,
    current: Option<Piece>,
    next: Option<Piece>,
    source: S,
    phase: Phase,
    /// Number of games started on this engine (increments on every start).
    episode_id: u32,
    /// Last lock event (drained by the front end for logging).
    last_event: Option<LockEvent>,
    score: u32,
    level: u32,
    lines: u32,
}

impl GameState<RandomPieces> {
    /// Create a new game with uniformly random pieces from `seed`
    pub fn new(seed: u32) -> Self {
        Self::with_source(RandomPieces::new(seed))
    }

    pub fn seed(&self) -> u32 {
        self.source.seed()
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a game that draws pieces from `source`
    ///
    /// The game starts in [`Phase::Ready`]; call [`GameState::start`] to play.
    pub fn with_source(source: S) -> Self {
        Self {
            board: Board::new(),
            current: None,
            next: None,
            source,
            phase: Phase::Ready,
            episode_id: 0,
            last_event: None,
            score: 0,
            level: 1,
            lines: 0,
        }
    }

    /// Start a fresh game from any phase
    ///
    /// Clears the board, zeroes the counters and spawns new current and next
    /// pieces. The piece source keeps its position, so consecutive games
    /// differ.
    pub fn start(&mut self) {
        self.board.reset();
        self.score = 0;
        self.level = 1;
        self.lines = 0;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);

        let width = self.board.width();
        self.current = Some(Piece::spawn_from(&mut self.source, width));
        self.next = Some(Piece::spawn_from(&mut self.source, width));
        self.phase = Phase::Running;
    }

    /// Same as [`GameState::start`]
    pub fn reset(&mut self) {
        self.start();
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::Ready
    }

    pub fn paused(&self) -> bool {
        self.phase == Phase::Paused
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// The falling piece; `None` before the first start and after game over
    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    /// The piece that spawns after the current one locks
    pub fn next(&self) -> Option<Piece> {
        self.next
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access for test setup and tooling.
    ///
    /// Writes made here bypass the engine's rules.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.current = self.current;
        out.next = self.next;
        out.phase = self.phase;
        out.episode_id = self.episode_id;
        out.score = self.score;
        out.level = self.level;
        out.lines = self.lines;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// The falling piece, only while the game is running
    fn playable_piece(&self) -> Option<Piece> {
        if self.phase != Phase::Running {
            return None;
        }
        self.current
    }

    /// Shift the current piece if the target position is free
    fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };

        if self.board.collides(&piece, dx, dy) {
            return false;
        }

        self.current = Some(piece.shifted(dx, dy));
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    /// Move down one row. Never locks; a blocked soft drop is ignored.
    pub fn soft_drop(&mut self) -> bool {
        self.try_move(0, 1)
    }

    /// Rotate clockwise in place; rejected if the rotated shape collides
    pub fn rotate(&mut self) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };

        let candidate = piece.rotated();
        if self.board.collides(&candidate, 0, 0) {
            return false;
        }

        self.current = Some(candidate);
        true
    }

    /// Flip between running and paused. Ignored before start and after game over.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::Ready | Phase::GameOver => return false,
        };
        true
    }

    /// Gravity step. Returns the number of lines cleared by this tick.
    ///
    /// Moves the current piece down one row; if it cannot move, the piece is
    /// locked, full rows are cleared and scored, and the next piece takes its
    /// place. If that piece does not fit at its spawn position the game ends.
    pub fn tick(&mut self) -> u32 {
        let Some(piece) = self.playable_piece() else {
            return 0;
        };

        if !self.board.collides(&piece, 0, 1) {
            self.current = Some(piece.shifted(0, 1));
            return 0;
        }

        self.lock_piece(piece)
    }

    fn lock_piece(&mut self, piece: Piece) -> u32 {
        self.board.lock(&piece);

        let cleared = self.board.clear_full_rows();
        let points = self.award_lines(cleared);

        let width = self.board.width();
        let promoted = match self.next.take() {
            Some(next) => next,
            None => Piece::spawn_from(&mut self.source, width),
        };
        self.next = Some(Piece::spawn_from(&mut self.source, width));

        let blocked = self.board.collides(&promoted, 0, 0);
        if blocked {
            self.current = None;
            self.phase = Phase::GameOver;
        } else {
            self.current = Some(promoted);
        }

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: cleared as u32,
            points,
            game_over: blocked,
        });

        cleared as u32
    }

    /// Score a clear at the current level, then advance lines and level.
    fn award_lines(&mut self, cleared: usize) -> u32 {
        if cleared == 0 {
            return 0;
        }

        let points = line_clear_points(cleared, self.level);
        self.score = self.score.saturating_add(points);
        self.lines += cleared as u32;
        self.level = level_for_lines(self.lines);
        points
    }

    /// Apply a command. Returns true if the game state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.start();
                true
            }
        }
    }
}
