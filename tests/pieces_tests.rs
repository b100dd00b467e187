//! Catalog and rotation tests

use tui_tetromino::core::{spawn_shape, Piece, ScriptedPieces, CATALOG};
use tui_tetromino::types::{PieceColor, PieceKind, BOARD_WIDTH};

#[test]
fn test_catalog_matches_kind_order() {
    let expected = [
        (PieceKind::I, vec![vec![1, 1, 1, 1]], PieceColor::Cyan),
        (PieceKind::O, vec![vec![1, 1], vec![1, 1]], PieceColor::Yellow),
        (PieceKind::T, vec![vec![1, 1, 1], vec![0, 1, 0]], PieceColor::Purple),
        (PieceKind::L, vec![vec![1, 1, 1], vec![1, 0, 0]], PieceColor::Blue),
        (PieceKind::J, vec![vec![1, 1, 1], vec![0, 0, 1]], PieceColor::Red),
        (PieceKind::S, vec![vec![1, 1, 0], vec![0, 1, 1]], PieceColor::Green),
        (PieceKind::Z, vec![vec![0, 1, 1], vec![1, 1, 0]], PieceColor::Orange),
    ];

    for (i, (kind, rows, color)) in expected.iter().enumerate() {
        assert_eq!(PieceKind::ALL[i], *kind);
        assert_eq!(kind.color(), *color);
        assert_eq!(&CATALOG[i].to_rows(), rows, "shape of {:?}", kind);
    }
}

#[test]
fn test_four_rotations_restore_every_shape() {
    for kind in PieceKind::ALL {
        let shape = spawn_shape(kind);
        let spun = shape.rotated_cw().rotated_cw().rotated_cw().rotated_cw();
        assert_eq!(spun, shape, "{:?}", kind);
    }
}

#[test]
fn test_rotation_swaps_dimensions() {
    for kind in PieceKind::ALL {
        let shape = spawn_shape(kind);
        let r = shape.rotated_cw();
        assert_eq!((r.rows(), r.cols()), (shape.cols(), shape.rows()));
        assert_eq!(r.minos().len(), 4);
    }
}

#[test]
fn test_rotation_formula() {
    // new[i][j] = old[rows - 1 - j][i]
    for kind in PieceKind::ALL {
        let old = spawn_shape(kind);
        let new = old.rotated_cw();
        for i in 0..new.rows() {
            for j in 0..new.cols() {
                assert_eq!(new.filled(i, j), old.filled(old.rows() - 1 - j, i));
            }
        }
    }
}

#[test]
fn test_rotation_keeps_anchor() {
    let piece = Piece::spawn(PieceKind::J).shifted(1, 5);
    let rotated = piece.rotated();
    assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
    assert_eq!(rotated.color, piece.color);
    assert_eq!(rotated.kind, PieceKind::J);
}

#[test]
fn test_spawn_anchor_is_centered_at_top() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind);
        let cols = piece.shape.cols() as i8;
        assert_eq!(piece.x, (BOARD_WIDTH as i8 - cols) / 2, "{:?}", kind);
        assert_eq!(piece.y, 0);
    }
}

#[test]
fn test_spawn_from_scripted_source() {
    let mut source = ScriptedPieces::new(vec![PieceKind::Z, PieceKind::O]);
    let kinds: Vec<_> = (0..3)
        .map(|_| Piece::spawn_from(&mut source, BOARD_WIDTH).kind)
        .collect();
    assert_eq!(kinds, vec![PieceKind::Z, PieceKind::O, PieceKind::Z]);
}
