//! Benchmarks for the snake cube solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use snakecube::geometry::Direction;
use snakecube::moves::{next_moves, Node};
use snakecube::{report, solve, Snake, SAMPLE_SNAKE};

/// Benchmark the complete search for the sample snake.
fn bench_solve(c: &mut Criterion) {
    c.bench_function("solve_sample", |b| b.iter(|| solve(black_box(SAMPLE_SNAKE))));
}

/// Benchmark a search that exhausts its frontier.
fn bench_solve_unsolvable(c: &mut Criterion) {
    c.bench_function("solve_unsolvable", |b| {
        b.iter(|| solve(black_box("sffaaffaffaaffafaaaffafafaf")))
    });
}

/// Benchmark expanding a node with four free turns.
fn bench_next_moves(c: &mut Criterion) {
    let snake: Snake = "saaaaaaaaaaaaaaaaaaaaaaaaaa".parse().unwrap();
    let node = Node::seed((1, 1, 1), Direction::PLUS_X);

    c.bench_function("next_moves_free", |b| {
        b.iter(|| next_moves(black_box(&node), &snake))
    });
}

/// Benchmark formatting a fold for display.
fn bench_format_fold(c: &mut Criterion) {
    let outcome = solve(SAMPLE_SNAKE);
    let fold = outcome.fold().unwrap();

    c.bench_function("format_fold", |b| {
        b.iter(|| report::format_fold(black_box(fold)))
    });
}

criterion_group!(
    benches,
    bench_solve,
    bench_solve_unsolvable,
    bench_next_moves,
    bench_format_fold
);
criterion_main!(benches);
