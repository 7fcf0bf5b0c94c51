use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::rules::is_game_over;
use tui_2048::core::{Board, TileSpawner, TiltEngine};
use tui_2048::types::{Side, WINNING_TILE};

fn dense_board() -> Board {
    // Full checkerboard: tilts scan every cell but move nothing.
    Board::from_rows(&[
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
        &[2, 4, 2, 4],
        &[4, 2, 4, 2],
    ])
}

fn mergeable_board() -> Board {
    Board::from_rows(&[
        &[2, 2, 4, 4],
        &[8, 8, 16, 16],
        &[2, 2, 4, 4],
        &[8, 8, 16, 16],
    ])
}

fn bench_tilt_noop(c: &mut Criterion) {
    let mut engine = TiltEngine::new();
    let mut board = dense_board();

    c.bench_function("tilt_dense_noop", |b| {
        b.iter(|| engine.tilt(black_box(&mut board), Side::North))
    });
}

fn bench_tilt_with_merges(c: &mut Criterion) {
    let mut engine = TiltEngine::new();
    let base = mergeable_board();

    c.bench_function("tilt_with_merges", |b| {
        b.iter(|| {
            let mut board = base.clone();
            engine.tilt(black_box(&mut board), Side::West)
        })
    });
}

fn bench_game_over_scan(c: &mut Criterion) {
    let board = dense_board();

    c.bench_function("game_over_scan", |b| {
        b.iter(|| is_game_over(black_box(&board), WINNING_TILE))
    });
}

fn bench_spawn(c: &mut Criterion) {
    let board = Board::from_rows(&[
        &[2, 0, 4, 0],
        &[0, 8, 0, 2],
        &[4, 0, 2, 0],
        &[0, 2, 0, 4],
    ]);
    let mut spawner = TileSpawner::new(12345);

    c.bench_function("spawn_tile", |b| {
        b.iter(|| spawner.next_tile(black_box(&board)))
    });
}

criterion_group!(
    benches,
    bench_tilt_noop,
    bench_tilt_with_merges,
    bench_game_over_scan,
    bench_spawn
);
criterion_main!(benches);
