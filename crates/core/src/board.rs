//! Board module - manages the game grid
//!
//! The board is a grid where each cell is either empty or holds the color of
//! the piece that was locked there. Storage is a single row-major array, so
//! "occupied" and "has a color" are the same fact.
//!
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//! Row 0 is the top of the well.

use crate::pieces::Piece;
use crate::types::{Cell, PieceColor, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board, 10x20 unless built with [`Board::with_size`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Row-major cells (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty 10x20 board
    pub fn new() -> Self {
        Self::with_size(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board of arbitrary size
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_size(width: u8, height: u8) -> Self {
        assert!(width > 0 && height > 0, "board dimensions must be non-zero");
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x as i16, y as i16).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x as i16, y as i16) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Color of the locked cell at (x, y), if any
    pub fn color_at(&self, x: i8, y: i8) -> Option<PieceColor> {
        self.get(x, y).flatten()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .map(|cells| cells.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Whether `piece`, shifted by (dx, dy), would leave the well or overlap a
    /// locked cell.
    ///
    /// Cells above the top edge only count against the side walls and the
    /// floor; they never hit locked cells.
    pub fn collides(&self, piece: &Piece, dx: i8, dy: i8) -> bool {
        piece.cells().any(|(cx, cy)| {
            let x = cx as i16 + dx as i16;
            let y = cy as i16 + dy as i16;
            if x < 0 || x >= self.width as i16 || y >= self.height as i16 {
                return true;
            }
            y >= 0 && self.index(x, y).is_some_and(|idx| self.cells[idx].is_some())
        })
    }

    /// Write `piece` into the grid in its color.
    ///
    /// Cells above the top edge are dropped. Callers only lock pieces that do
    /// not collide.
    pub fn lock(&mut self, piece: &Piece) {
        for (x, y) in piece.cells() {
            if y >= 0 {
                self.set(x, y, Some(piece.color));
            }
        }
    }

    /// Remove every full row, shifting the rows above down. Returns the number
    /// of rows removed.
    ///
    /// Works bottom-up with a read cursor and a write cursor, so each surviving
    /// row is copied at most once and any pattern of full rows is handled in a
    /// single pass.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width as usize;
        let mut cleared = 0;
        let mut write_y = self.height as usize;

        for read_y in (0..self.height as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
        cleared
    }

    /// Clear the entire board
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Row-major cells
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Occupancy view, one `Vec<bool>` per row
    pub fn occupancy(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.iter().map(Option::is_some).collect())
            .collect()
    }

    /// Color view, one `Vec<Cell>` per row
    pub fn colors(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.width as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Copy the grid into a fixed-size buffer without allocating.
    ///
    /// Only the overlapping region is written when sizes differ.
    pub fn write_grid<const W: usize, const H: usize>(&self, out: &mut [[Cell; W]; H]) {
        for (y, out_row) in out.iter_mut().enumerate() {
            match self.row(y) {
                Some(row) => {
                    let n = row.len().min(W);
                    out_row[..n].copy_from_slice(&row[..n]);
                    out_row[n..].fill(None);
                }
                None => out_row.fill(None),
            }
        }
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Build a board from text rows: `.` is empty, any other char is a cell
    /// of `color`. Handy for tests and benchmarks.
    ///
    /// # Panics
    ///
    /// Panics if rows are empty or of unequal length.
    pub fn from_ascii(rows: &[&str], color: PieceColor) -> Self {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut board = Self::with_size(width as u8, height as u8);
        for (y, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), width, "ragged row {}", y);
            for (x, ch) in row.chars().enumerate() {
                if ch != '.' {
                    board.set(x as i8, y as i8, Some(color));
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new();
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_collides_walls_and_floor() {
        let board = Board::new();
        let piece = Piece::spawn(PieceKind::O); // x = 4, cols 4..=5

        assert!(!board.collides(&piece, 0, 0));
        assert!(!board.collides(&piece, -4, 0));
        assert!(board.collides(&piece, -5, 0));
        assert!(!board.collides(&piece, 4, 0));
        assert!(board.collides(&piece, 5, 0));
        assert!(!board.collides(&piece, 0, 18));
        assert!(board.collides(&piece, 0, 19));
    }

    #[test]
    fn test_cells_above_top_ignore_occupancy_but_not_walls() {
        let mut board = Board::new();
        board.set(4, 0, Some(PieceColor::Red));
        let piece = Piece::spawn(PieceKind::O);

        // Shifted up two rows: fully above the well, no overlap possible.
        assert!(!board.collides(&piece, 0, -2));
        // Shifted up one row: bottom row lands on (4, 0).
        assert!(board.collides(&piece, 0, -1));
        // Above the well but outside the left wall.
        assert!(board.collides(&piece, -5, -3));
    }

    #[test]
    fn test_lock_skips_cells_above_top() {
        let mut board = Board::new();
        let piece = Piece::spawn(PieceKind::O).shifted(0, -1);
        board.lock(&piece);

        assert_eq!(board.filled_count(), 2);
        assert_eq!(board.color_at(4, 0), Some(PieceColor::Yellow));
        assert_eq!(board.color_at(5, 0), Some(PieceColor::Yellow));
    }

    #[test]
    fn test_clear_resets_partial_top() {
        let mut board = Board::from_ascii(&["#...", "####"], PieceColor::Blue);
        assert_eq!(board.clear_full_rows(), 1);
        assert_eq!(board.row(0).unwrap(), &[None, None, None, None]);
        assert_eq!(
            board.row(1).unwrap(),
            &[Some(PieceColor::Blue), None, None, None]
        );
    }

    #[test]
    fn test_write_grid_pads_and_truncates() {
        let board = Board::from_ascii(&["##", ".#"], PieceColor::Cyan);
        let mut out = [[Some(PieceColor::Red); 3]; 3];
        board.write_grid(&mut out);
        assert_eq!(out[0], [Some(PieceColor::Cyan), Some(PieceColor::Cyan), None]);
        assert_eq!(out[1], [None, Some(PieceColor::Cyan), None]);
        assert_eq!(out[2], [None, None, None]);
    }
}
