use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_tetromino::core::{Board, GameSnapshot, GameState, Piece};
use tui_tetromino::types::{PieceColor, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            if state.game_over() {
                state.start();
            }
            black_box(state.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let mut full = Board::new();
    for y in 16..20 {
        for x in 0..10 {
            full.set(x, y, Some(PieceColor::Cyan));
        }
    }

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = full.clone();
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_collides(c: &mut Criterion) {
    let board = Board::from_ascii(
        &[
            "..........",
            "..........",
            "..........",
            "#.#.#.#.#.",
            "##.##.##.#",
            "#########.",
        ],
        PieceColor::Red,
    );
    let piece = Piece::spawn(PieceKind::T);

    c.bench_function("collides", |b| {
        b.iter(|| {
            for dy in 0..4 {
                black_box(board.collides(black_box(&piece), 0, dy));
            }
        })
    });
}

fn bench_move_and_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("move_and_rotate", |b| {
        b.iter(|| {
            state.move_left();
            state.rotate();
            state.move_right();
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collides,
    bench_move_and_rotate,
    bench_snapshot
);
criterion_main!(benches);
