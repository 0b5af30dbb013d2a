//! Randomized 9x9 Sudoku board generation.
//!
//! [`BoardGenerator`] populates boards one cell at a time in row-major order,
//! drawing uniformly random digits and rejecting any that would break the
//! placement rules. The filling process never backtracks: a cell for which no
//! legal digit is found within the per-cell draw budget is simply left empty.
//!
//! On top of that process the generator offers five entry points with
//! different post-conditions:
//!
//! - [`fill_board_randomly`](BoardGenerator::fill_board_randomly): fill all
//!   81 cells, accepting dead cells as empty
//! - [`fill_board_with_clues`](BoardGenerator::fill_board_with_clues): stop
//!   at exactly [`CLUE_TARGET`] clues
//! - [`solvable_board_with_clues`](BoardGenerator::solvable_board_with_clues):
//!   clue-limited and accepted by the solver
//! - [`solvable_board`](BoardGenerator::solvable_board): full fill accepted
//!   by the solver
//! - [`unsolvable_board`](BoardGenerator::unsolvable_board): a board the
//!   solver is guaranteed to reject
//!
//! The modes that promise a solver outcome retry whole fills until one
//! qualifies. Retries are capped; exhausting the budget yields a
//! [`GenerateError`] rather than an inconsistent board.
//!
//! # Examples
//!
//! ```
//! use doku_generator::BoardGenerator;
//!
//! let mut generator = BoardGenerator::from_seed(42);
//! let board = generator.solvable_board_with_clues()?;
//!
//! assert_eq!(board.clue_count(), 63);
//! assert!(doku_solver::is_solvable(&board));
//! # Ok::<(), doku_generator::GenerateError>(())
//! ```

use doku_core::{
    Board,
    board::{CELL_COUNT, EMPTY, SIZE},
    rules,
};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

/// Number of clues left on a board by the clue-limited modes.
pub const CLUE_TARGET: usize = 63;

/// Random digit draws attempted per cell before it is left empty.
const DIGIT_ATTEMPTS: usize = 100;

/// Whole-board fills attempted by the retrying modes before giving up.
///
/// A greedy fill that completes all 81 cells without hitting a dead cell is
/// rare, so `solvable_board` burns through many cheap attempts; the budget
/// has to be generous.
const MAX_ATTEMPTS: usize = 1_000_000;

/// Error returned when a retrying generation mode exhausts its attempt
/// budget without producing an acceptable board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("no acceptable board after {attempts} generation attempts")]
pub struct GenerateError {
    /// Fill attempts made before giving up.
    pub attempts: usize,
}

/// Randomized board generator with an injectable random source.
///
/// The concrete generator used by [`new`](Self::new) and
/// [`from_seed`](Self::from_seed) is [`Pcg64Mcg`]; tests can substitute any
/// [`Rng`] via [`with_rng`](Self::with_rng). Seeding is not part of the
/// public generation contract — only the post-conditions of each mode are.
///
/// A generator is single-threaded and drives one board at a time; boards it
/// returns are owned by the caller and independent of the generator.
#[derive(Debug, Clone)]
pub struct BoardGenerator<R> {
    rng: R,
}

impl BoardGenerator<Pcg64Mcg> {
    /// Creates a generator seeded from the thread-local entropy source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Pcg64Mcg::from_rng(&mut rand::rng()),
        }
    }

    /// Creates a generator with a fixed seed, for reproducible boards.
    ///
    /// # Examples
    ///
    /// ```
    /// use doku_generator::BoardGenerator;
    ///
    /// let a = BoardGenerator::from_seed(7).fill_board_randomly();
    /// let b = BoardGenerator::from_seed(7).fill_board_randomly();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }
}

impl Default for BoardGenerator<Pcg64Mcg> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BoardGenerator<R> {
    /// Creates a generator backed by the given random source.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Fills all 81 cells with random digits, keeping every placement valid.
    ///
    /// No backtracking is performed: when the random process paints itself
    /// into a corner and a cell has no legal digit left, that cell stays
    /// empty and filling continues. Callers must therefore not assume the
    /// result is complete — only that every placed digit is consistent with
    /// its row, column, and box.
    pub fn fill_board_randomly(&mut self) -> Board {
        let mut board = Board::new();
        self.fill_cells(&mut board, CELL_COUNT);
        board
    }

    /// Fills cells until exactly [`CLUE_TARGET`] clues are present.
    ///
    /// Uses the same row-major random placement process as
    /// [`fill_board_randomly`](Self::fill_board_randomly), stopping as soon
    /// as the clue target is reached. A traversal that ends short of the
    /// target is discarded and refilled from an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the attempt budget runs out before a
    /// fill reaches the clue target.
    pub fn fill_board_with_clues(&mut self) -> Result<Board, GenerateError> {
        self.retry("clue-limited fill", |this| {
            let mut board = Board::new();
            this.fill_cells(&mut board, CLUE_TARGET);
            (board.clue_count() == CLUE_TARGET).then_some(board)
        })
    }

    /// Fills cells until exactly [`CLUE_TARGET`] clues are present, retrying
    /// until the result admits at least one complete solution.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the attempt budget runs out before a
    /// solvable clue-limited board is produced.
    pub fn solvable_board_with_clues(&mut self) -> Result<Board, GenerateError> {
        self.retry("solvable clue-limited fill", |this| {
            let mut board = Board::new();
            this.fill_cells(&mut board, CLUE_TARGET);
            (board.clue_count() == CLUE_TARGET && doku_solver::is_solvable(&board))
                .then_some(board)
        })
    }

    /// Performs full random fills until one is accepted by the solver.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError`] if the attempt budget runs out before a
    /// solvable fill is produced.
    pub fn solvable_board(&mut self) -> Result<Board, GenerateError> {
        self.retry("solvable full fill", |this| {
            let mut board = Board::new();
            this.fill_cells(&mut board, CELL_COUNT);
            doku_solver::is_solvable(&board).then_some(board)
        })
    }

    /// Produces a randomly filled board that the solver is guaranteed to
    /// reject.
    ///
    /// The contradiction is constructed up front: the first row receives the
    /// digits 2-9 and the first column the digit 1, leaving the corner cell
    /// with no legal candidate. The rest of the board is then filled with the
    /// usual random process, which can never repair the corner. No retry loop
    /// is involved.
    pub fn unsolvable_board(&mut self) -> Board {
        let mut board = Board::new();
        for (col, value) in (1..SIZE).zip(2..=9u8) {
            board.set(0, col, value);
        }
        board.set(1, 0, 1);
        self.fill_cells(&mut board, CELL_COUNT);
        debug_assert!(!doku_solver::is_solvable(&board));
        board
    }

    /// Visits cells in row-major order and places random valid digits in the
    /// empty ones, stopping once `target` cells have been placed.
    ///
    /// Each empty cell gets up to [`DIGIT_ATTEMPTS`] uniform draws from 1-9;
    /// a cell where every draw fails the placement rules is left empty.
    fn fill_cells(&mut self, board: &mut Board, target: usize) {
        let mut placed = 0;
        for index in 0..CELL_COUNT {
            if placed >= target {
                break;
            }
            let (row, col) = (index / SIZE, index % SIZE);
            if board.get(row, col) != EMPTY {
                continue;
            }
            let mut found = false;
            for _ in 0..DIGIT_ATTEMPTS {
                let value = self.rng.random_range(1..=9);
                if rules::is_valid_placement(board, value, row, col) {
                    board.set(row, col, value);
                    placed += 1;
                    found = true;
                    break;
                }
            }
            if !found {
                log::trace!("no valid digit for cell ({row}, {col}); leaving it empty");
            }
        }
    }

    fn retry(
        &mut self,
        what: &str,
        mut attempt: impl FnMut(&mut Self) -> Option<Board>,
    ) -> Result<Board, GenerateError> {
        for attempts in 1..=MAX_ATTEMPTS {
            if let Some(board) = attempt(self) {
                log::debug!("{what}: accepted a board after {attempts} attempt(s)");
                return Ok(board);
            }
        }
        log::warn!("{what}: attempt budget of {MAX_ATTEMPTS} exhausted");
        Err(GenerateError {
            attempts: MAX_ATTEMPTS,
        })
    }
}
