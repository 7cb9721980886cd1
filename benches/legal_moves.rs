//! Benchmarks for move enumeration and state transitions.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use king_arena::{Board, GameState, Move, Piece, PlayerId, Position};

fn crowded_board() -> Board {
    let owners = ["a", "b", "c", "d"];
    (0..8)
        .flat_map(|x| (0..8).map(move |y| Position::new(x, y)))
        .filter(|p| (p.x + p.y) % 3 == 0)
        .enumerate()
        .fold(Board::empty(), |board, (i, position)| {
            board.place_at(position, Piece::king(owners[i % owners.len()]))
        })
}

fn bench_legal_moves(c: &mut Criterion) {
    let board = crowded_board();
    let player = PlayerId::new("a");

    c.bench_function("legal_moves_crowded", |b| {
        b.iter(|| black_box(&board).legal_moves(&player).count())
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let board = Board::empty()
        .place_at(Position::new(0, 0), Piece::king("a"))
        .place_at(Position::new(7, 7), Piece::king("b"));
    let state = GameState::new(board, [PlayerId::new("a"), PlayerId::new("b")]);
    let mv = Move::new(Position::new(0, 0), Position::new(1, 1));

    c.bench_function("apply_move", |b| {
        b.iter(|| black_box(&state).apply_move(mv))
    });
}

criterion_group!(benches, bench_legal_moves, bench_apply_move);
criterion_main!(benches);
