//! Benchmarks for the backtracking solver.
//!
//! Measures `solve` on a fixed 30-clue puzzle and on a fully empty board
//! (worst case for the number of cells to fill, best case for constraints).
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use doku_core::Board;

const PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

fn bench_solve_puzzle(c: &mut Criterion) {
    let board: Board = PUZZLE.parse().unwrap();
    c.bench_function("solve_30_clue_puzzle", |b| {
        b.iter_batched(
            || hint::black_box(board.clone()),
            |mut board| {
                assert!(doku_solver::solve(&mut board));
                board
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_solve_empty_board(c: &mut Criterion) {
    c.bench_function("solve_empty_board", |b| {
        b.iter_batched(
            || hint::black_box(Board::new()),
            |mut board| {
                assert!(doku_solver::solve(&mut board));
                board
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_solve_puzzle, bench_solve_empty_board);
criterion_main!(benches);
