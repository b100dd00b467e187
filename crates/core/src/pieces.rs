//! Pieces module - tetromino catalog, shape matrices and rotation
//!
//! Shapes are small row-major 0/1 matrices (at most 4x4). A piece's anchor is
//! the board position of the matrix's top-left corner, so a cell at matrix
//! position (row, col) lands on board cell (x + col, y + row).

use arrayvec::ArrayVec;

use crate::rng::PieceSource;
use crate::types::{PieceColor, PieceKind, BOARD_WIDTH};

/// Largest side of any shape matrix
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of a single mino relative to the anchor, as (dx, dy)
pub type MinoOffset = (i8, i8);

/// Occupied offsets of a shape (always four for catalog shapes)
pub type Minos = ArrayVec<MinoOffset, { MAX_SHAPE_SIZE * MAX_SHAPE_SIZE }>;

/// Immutable occupancy matrix of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from 0/1 rows.
    ///
    /// Rows must be non-empty, equally long and no larger than 4x4; this is
    /// only called on the static catalog and in tests.
    pub const fn from_rows<const R: usize, const C: usize>(rows: [[u8; C]; R]) -> Self {
        assert!(R > 0 && R <= MAX_SHAPE_SIZE);
        assert!(C > 0 && C <= MAX_SHAPE_SIZE);

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < R {
            let mut c = 0;
            while c < C {
                cells[r][c] = rows[r][c] != 0;
                c += 1;
            }
            r += 1;
        }

        Self {
            rows: R as u8,
            cols: C as u8,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether matrix cell (row, col) is filled. Out of range reads as empty.
    pub fn filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.cells[row][col]
    }

    /// Occupied offsets in row-major order.
    pub fn minos(&self) -> Minos {
        let mut out = Minos::new();
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                if self.cells[row][col] {
                    out.push((col as i8, row as i8));
                }
            }
        }
        out
    }

    /// Clockwise quarter turn: `new[i][j] = old[rows - 1 - j][i]`.
    ///
    /// The result has `cols` rows and `rows` columns.
    pub fn rotated_cw(&self) -> Self {
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let rows = self.rows();
        for (i, out_row) in cells.iter_mut().enumerate().take(self.cols()) {
            for (j, out) in out_row.iter_mut().enumerate().take(rows) {
                *out = self.cells[rows - 1 - j][i];
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Matrix as 0/1 rows, for display and assertions.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.rows())
            .map(|r| (0..self.cols()).map(|c| self.cells[r][c] as u8).collect())
            .collect()
    }
}

/// Static catalog: spawn shapes in [`PieceKind::ALL`] order.
pub const CATALOG: [Shape; 7] = [
    Shape::from_rows([[1, 1, 1, 1]]),
    Shape::from_rows([[1, 1], [1, 1]]),
    Shape::from_rows([[1, 1, 1], [0, 1, 0]]),
    Shape::from_rows([[1, 1, 1], [1, 0, 0]]),
    Shape::from_rows([[1, 1, 1], [0, 0, 1]]),
    Shape::from_rows([[1, 1, 0], [0, 1, 1]]),
    Shape::from_rows([[0, 1, 1], [1, 1, 0]]),
];

/// Spawn shape for a kind
pub fn spawn_shape(kind: PieceKind) -> Shape {
    CATALOG[kind.index()]
}

/// Spawn column for a shape on a board of the given width
pub fn spawn_x(shape: &Shape, board_width: u8) -> i8 {
    ((board_width as i16 - shape.cols() as i16).div_euclid(2)) as i8
}

/// A spawned piece: shape, color and anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: PieceColor,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Spawn a specific kind at the top of a standard-width board
    pub fn spawn(kind: PieceKind) -> Self {
        Self::spawn_on(kind, BOARD_WIDTH)
    }

    /// Spawn a specific kind centered on a board of `board_width` columns
    pub fn spawn_on(kind: PieceKind, board_width: u8) -> Self {
        let shape = spawn_shape(kind);
        Self {
            kind,
            shape,
            color: kind.color(),
            x: spawn_x(&shape, board_width),
            y: 0,
        }
    }

    /// Spawn whatever kind the source yields next
    pub fn spawn_from(source: &mut impl PieceSource, board_width: u8) -> Self {
        Self::spawn_on(source.next_kind(), board_width)
    }

    /// Copy of this piece shifted by (dx, dy)
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy of this piece rotated clockwise about the unchanged anchor
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Absolute board coordinates of every mino
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .minos()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}
