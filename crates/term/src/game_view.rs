//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Piece};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{PieceColor, BOARD_HEIGHT, BOARD_WIDTH};

/// Side of the square "next piece" preview, in board cells
const PREVIEW_CELLS: u16 = 4;

/// Minimum columns the side panel needs to be drawn at all
const PANEL_MIN_WIDTH: u16 = 12;

const WELL_BG: Rgb = Rgb::new(20, 20, 28);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the well and its panel land in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    /// Top-left of the well border
    frame_x: u16,
    frame_y: u16,
    frame_w: u16,
    frame_h: u16,
    /// Left edge of the side panel, if it fits
    panel_x: Option<u16>,
}

/// Draws the well, the falling piece, the score panel and overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 keeps cells roughly square in most terminal fonts.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let frame_h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let panel_w = PREVIEW_CELLS * self.cell_w + 4;

        // Center the well plus panel as one block when there is room for both.
        let with_panel = frame_w + 2 + panel_w.max(PANEL_MIN_WIDTH);
        let (frame_x, panel_x) = if viewport.width >= with_panel {
            let x = (viewport.width - with_panel) / 2;
            (x, Some(x + frame_w + 2))
        } else {
            (viewport.width.saturating_sub(frame_w) / 2, None)
        };

        Layout {
            frame_x,
            frame_y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
            panel_x,
        }
    }

    /// Render a snapshot into an existing framebuffer, resizing it to fit.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph {
            ch: ' ',
            style: Style::new(Rgb::new(220, 220, 220), SCREEN_BG),
        });

        let layout = self.layout(viewport);
        self.draw_well(fb, snap, layout);

        if let Some(panel_x) = layout.panel_x {
            self.draw_panel(fb, snap, panel_x, layout.frame_y);
        }

        if snap.game_over() {
            self.draw_overlay(fb, layout, &["GAME OVER", "R: restart"]);
        } else if snap.paused() {
            self.draw_overlay(fb, layout, &["PAUSED"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_well(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, layout: Layout) {
        let border = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);
        fb.draw_box(
            layout.frame_x,
            layout.frame_y,
            layout.frame_w,
            layout.frame_h,
            border,
        );

        let origin = (layout.frame_x + 1, layout.frame_y + 1);
        let empty = Style::new(Rgb::new(70, 70, 85), WELL_BG).dim();

        for (y, row) in snap.board.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let (x, y) = (x as u16, y as u16);
                match cell {
                    Some(color) => self.draw_block(fb, origin, x, y, *color),
                    None => self.fill_cell(fb, origin, x, y, '·', empty),
                }
            }
        }

        if let Some(piece) = snap.current {
            for (x, y) in visible_cells(&piece) {
                self.draw_block(fb, origin, x, y, piece.color);
            }
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: (u16, u16), x: u16, y: u16, color: PieceColor) {
        let style = Style::new(Rgb::from(color), WELL_BG).bold();
        self.fill_cell(fb, origin, x, y, '█', style);
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        x: u16,
        y: u16,
        ch: char,
        style: Style,
    ) {
        fb.fill_rect(
            origin.0 + x * self.cell_w,
            origin.1 + y * self.cell_h,
            self.cell_w,
            self.cell_h,
            ch,
            style,
        );
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, top: u16) {
        let label = Style::new(Rgb::new(230, 230, 230), SCREEN_BG).bold();
        let value = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);

        let mut y = top;
        for (name, number) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, number, value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        let box_w = PREVIEW_CELLS * self.cell_w + 2;
        let box_h = PREVIEW_CELLS * self.cell_h + 2;
        fb.draw_box(x, y, box_w, box_h, value.dim());
        fb.fill_rect(x + 1, y + 1, box_w - 2, box_h - 2, ' ', Style::new(value.fg, WELL_BG));
        if let Some(next) = snap.next {
            self.draw_preview(fb, (x + 1, y + 1), &next);
        }
        y += box_h + 1;

        let hint = value.dim();
        for line in ["←→ move  ↓ drop", "↑ rotate  space pause", "r restart  q quit"] {
            fb.put_str(x, y, line, hint);
            y += 1;
        }
    }

    /// Draw `piece` centered in the preview box, ignoring its board anchor.
    fn draw_preview(&self, fb: &mut FrameBuffer, origin: (u16, u16), piece: &Piece) {
        let shape = piece.shape;
        let off_x = (PREVIEW_CELLS as usize).saturating_sub(shape.cols()) / 2;
        let off_y = (PREVIEW_CELLS as usize).saturating_sub(shape.rows()) / 2;
        for (dx, dy) in shape.minos() {
            let x = (off_x + dx as usize) as u16;
            let y = (off_y + dy as usize) as u16;
            self.draw_block(fb, origin, x, y, piece.color);
        }
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, layout: Layout, lines: &[&str]) {
        let style = Style::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        let mid_y = layout.frame_y + layout.frame_h / 2;
        let start_y = mid_y.saturating_sub(lines.len() as u16 / 2);
        for (i, text) in lines.iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = layout.frame_x + layout.frame_w.saturating_sub(text_w) / 2;
            fb.put_str(x, start_y + i as u16, text, style);
        }
    }
}

/// Cells of `piece` that lie inside the well, as unsigned board coordinates.
fn visible_cells(piece: &Piece) -> impl Iterator<Item = (u16, u16)> + '_ {
    piece.cells().filter_map(|(x, y)| {
        let inside = x >= 0 && y >= 0 && x < BOARD_WIDTH as i8 && y < BOARD_HEIGHT as i8;
        inside.then_some((x as u16, y as u16))
    })
}
