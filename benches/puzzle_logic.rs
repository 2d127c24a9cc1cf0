use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_hanoi::core::{Puzzle, PuzzleConfig, PuzzleSnapshot};
use tui_hanoi::term::{FrameBuffer, GameView, Viewport};
use tui_hanoi::types::{RodIndex, MAX_DISKS};

fn solve(n: u8, from: RodIndex, to: RodIndex, via: RodIndex, puzzle: &mut Puzzle) {
    if n == 0 {
        return;
    }
    solve(n - 1, from, via, to, puzzle);
    puzzle.move_disk(from, to);
    solve(n - 1, via, to, from, puzzle);
}

fn bench_move_undo(c: &mut Criterion) {
    let mut puzzle = Puzzle::with_disks(8).unwrap();

    c.bench_function("move_then_undo", |b| {
        b.iter(|| {
            puzzle.move_disk(black_box(RodIndex::START), black_box(RodIndex::TARGET));
            puzzle.undo();
        })
    });
}

fn bench_full_solution(c: &mut Criterion) {
    let config = PuzzleConfig::with_disks(10).history_capacity(1 << 10);

    c.bench_function("solve_10_disks", |b| {
        b.iter(|| {
            let mut puzzle = Puzzle::new(config).unwrap();
            solve(10, RodIndex::START, RodIndex::TARGET, RodIndex::SPARE, &mut puzzle);
            black_box(puzzle.check_win())
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let puzzle = Puzzle::with_disks(MAX_DISKS as u8).unwrap();
    let view = GameView::default();
    let viewport = Viewport::new(160, 48);
    let mut snap = PuzzleSnapshot::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            puzzle.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(benches, bench_move_undo, bench_full_solution, bench_render);
criterion_main!(benches);
