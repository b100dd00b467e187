use tui_tetromino::core::{GameSnapshot, GameState, Piece};
use tui_tetromino::term::{encode_frame_into, FrameBuffer, GameView, Viewport};
use tui_tetromino::types::{Phase, PieceColor, PieceKind};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 10x20 cells at 2x1 plus the border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = Some(PieceColor::Cyan);

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 19);
    let left = fb.get(x0, y0).unwrap();
    assert_eq!(left.ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(left.style.fg.r, 0);
    assert_eq!(left.style.fg.b, 255);

    // Empty neighbour
    assert_ne!(fb.get(x0 + 2, y0).unwrap().ch, '█');
}

#[test]
fn term_view_draws_current_piece() {
    let mut snap = GameSnapshot::default();
    snap.phase = Phase::Running;
    snap.current = Some(Piece::spawn(PieceKind::O));

    let fb = GameView::default().render(&snap, Viewport::new(22, 22));

    // O spawns at columns 4..=5, rows 0..=1.
    for (x, y) in [(4u16, 0u16), (5, 0), (4, 1), (5, 1)] {
        let sx = 1 + x * 2;
        assert_eq!(fb.get(sx, 1 + y).unwrap().ch, '█', "cell ({}, {})", x, y);
    }
    assert_ne!(fb.get(1 + 3 * 2, 1).unwrap().ch, '█');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut gs = GameState::new(1);
    gs.start();
    let mut snap = gs.snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let view = GameView::default();
    let wide = screen_text(&view.render(&snap, Viewport::new(60, 22)));
    assert!(wide.contains("SCORE"));
    assert!(wide.contains("1234"));
    assert!(wide.contains("LEVEL"));
    assert!(wide.contains("NEXT"));

    let narrow = screen_text(&view.render(&snap, Viewport::new(22, 22)));
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_overlays() {
    let view = GameView::default();
    let mut snap = GameState::new(1).snapshot();

    snap.phase = Phase::Paused;
    assert!(screen_text(&view.render(&snap, Viewport::new(40, 24))).contains("PAUSED"));

    snap.phase = Phase::GameOver;
    let text = screen_text(&view.render(&snap, Viewport::new(40, 24)));
    assert!(text.contains("GAME OVER"));
    assert!(!text.contains("PAUSED"));

    snap.phase = Phase::Running;
    let text = screen_text(&view.render(&snap, Viewport::new(40, 24)));
    assert!(!text.contains("GAME OVER"));
}

#[test]
fn term_view_tiny_viewport_does_not_panic() {
    let mut gs = GameState::new(3);
    gs.start();
    let fb = GameView::default().render(&gs.snapshot(), Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}

#[test]
fn term_diff_is_smaller_than_full_redraw() {
    let mut gs = GameState::new(5);
    gs.start();
    let view = GameView::default();
    let vp = Viewport::new(60, 24);

    let first = view.render(&gs.snapshot(), vp);
    gs.move_left();
    let second = view.render(&gs.snapshot(), vp);

    let mut full = Vec::new();
    encode_frame_into(None, &second, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_frame_into(Some(&first), &second, &mut diff).unwrap();

    assert!(!diff.is_empty());
    assert!(diff.len() < full.len() / 4);
}
