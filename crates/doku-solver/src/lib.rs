//! Backtracking solver for 9x9 Sudoku boards.
//!
//! The solver visits empty cells in row-major order and tries digits 1-9 in
//! ascending order, recursing on each placement that passes the placement
//! rules and undoing it when the recursion fails. The first completion found
//! wins; no attempt is made to enumerate further solutions.
//!
//! "No solution exists" is an ordinary boolean outcome, never an error: it is
//! the expected result for deliberately contradictory boards.
//!
//! # Examples
//!
//! ```
//! use doku_core::{Board, rules};
//!
//! let mut board: Board = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()
//! .unwrap();
//!
//! assert!(doku_solver::solve(&mut board));
//! assert!(board.is_full());
//! assert!(rules::is_consistent(&board));
//! ```

use doku_core::{
    Board,
    board::{EMPTY, SIZE},
    rules,
};

/// Attempts to fill every empty cell of `board` consistently with the Sudoku
/// rules.
///
/// Returns `true` and leaves `board` completely filled if a solution exists;
/// returns `false` and leaves `board` unchanged otherwise. A board with no
/// empty cells is trivially solved.
///
/// The search is synchronous and has no internal time or step limit; callers
/// needing bounded latency must impose one externally.
pub fn solve(board: &mut Board) -> bool {
    solve_from(board, 0)
}

/// Returns `true` if `board` admits at least one complete solution.
///
/// Solves a scratch copy; `board` itself is never modified.
#[must_use]
pub fn is_solvable(board: &Board) -> bool {
    let mut scratch = board.clone();
    solve(&mut scratch)
}

fn solve_from(board: &mut Board, start: usize) -> bool {
    let Some(index) = board.first_empty_from(start) else {
        return true;
    };
    let (row, col) = (index / SIZE, index % SIZE);
    for value in 1..=9u8 {
        if rules::is_valid_placement(board, value, row, col) {
            board.set(row, col, value);
            if solve_from(board, index + 1) {
                return true;
            }
            board.set(row, col, EMPTY);
        }
    }
    false
}
