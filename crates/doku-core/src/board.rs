//! The 9x9 Sudoku board.
//!
//! A [`Board`] is a fixed 9x9 grid of cell values in the range 0-9, where 0
//! marks an empty cell and 1-9 are placed digits. The board carries no
//! identity beyond its contents: two boards with equal cells compare equal.
//!
//! # Examples
//!
//! ```
//! use doku_core::Board;
//!
//! let mut board = Board::new();
//! assert_eq!(board.clue_count(), 0);
//!
//! board.set(2, 1, 5);
//! assert_eq!(board.get(2, 1), 5);
//! assert_eq!(board.clue_count(), 1);
//! ```

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// Number of rows and columns on a board.
pub const SIZE: usize = 9;

/// Number of cells on a board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// The cell value marking an empty cell.
pub const EMPTY: u8 = 0;

/// A 9x9 Sudoku board.
///
/// Cell values are always in the range 0-9; 0 marks an empty cell. The board
/// enforces this range (and coordinate bounds) at every access, panicking on
/// violations: out-of-range access is a programming error, not a recoverable
/// outcome.
///
/// # Examples
///
/// ```
/// use doku_core::Board;
///
/// let board: Board = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(board.get(0, 0), 5);
/// assert_eq!(board.clue_count(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[u8; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Creates an empty board (all cells 0).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[EMPTY; SIZE]; SIZE],
        }
    }

    /// Returns the value at `(row, col)`; 0 means the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        assert!(
            row < SIZE && col < SIZE,
            "cell coordinates out of range: ({row}, {col})"
        );
        self.cells[row][col]
    }

    /// Writes `value` at `(row, col)`, overwriting any previous value.
    ///
    /// This is the raw single-cell write: it performs no Sudoku-validity
    /// checking whatsoever. Callers that need rule-respecting placements must
    /// check [`rules::is_valid_placement`](crate::rules::is_valid_placement)
    /// (and cell occupancy) themselves before writing.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8, or if `value` is not
    /// in the range 0-9.
    pub fn set(&mut self, row: usize, col: usize, value: u8) {
        assert!(
            row < SIZE && col < SIZE,
            "cell coordinates out of range: ({row}, {col})"
        );
        assert!(value <= 9, "cell value must be between 0 and 9, got {value}");
        self.cells[row][col] = value;
    }

    /// Returns the number of clues (non-empty cells).
    ///
    /// Always computed from the cells, never cached.
    #[must_use]
    pub fn clue_count(&self) -> usize {
        self.cells().filter(|&value| value != EMPTY).count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.first_empty_from(0).is_none()
    }

    /// Returns the row-major index of the first empty cell at or after
    /// `start`, or `None` if no cell from `start` onward is empty.
    ///
    /// Row-major index `i` addresses the cell at row `i / 9`, column `i % 9`.
    ///
    /// # Examples
    ///
    /// ```
    /// use doku_core::Board;
    ///
    /// let mut board = Board::new();
    /// board.set(0, 0, 1);
    /// board.set(0, 1, 2);
    /// assert_eq!(board.first_empty_from(0), Some(2));
    /// assert_eq!(board.first_empty_from(3), Some(3));
    /// ```
    #[must_use]
    pub fn first_empty_from(&self, start: usize) -> Option<usize> {
        (start..CELL_COUNT).find(|&i| self.cells[i / SIZE][i % SIZE] == EMPTY)
    }

    /// Returns an iterator over all 81 cell values in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Copies every cell value from `source` into this board.
    ///
    /// The boards remain independent afterward: mutating one never affects
    /// the other.
    ///
    /// # Examples
    ///
    /// ```
    /// use doku_core::Board;
    ///
    /// let mut a = Board::new();
    /// a.set(4, 4, 9);
    ///
    /// let mut b = Board::new();
    /// b.copy_from(&a);
    /// assert_eq!(a, b);
    ///
    /// a.set(4, 4, 1);
    /// assert_eq!(b.get(4, 4), 9);
    /// ```
    pub fn copy_from(&mut self, source: &Self) {
        self.cells = source.cells;
    }
}

/// Error returned when parsing a board string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The string contains a character that is not a digit, an empty-cell
    /// marker (`.`, `_`, or `0`), or whitespace.
    #[display("unexpected character {ch:?} in board string")]
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
    },
    /// The string does not describe exactly 81 cells.
    #[display("expected 81 cells, found {count}")]
    WrongCellCount {
        /// Number of cells the string describes.
        count: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses a board from a grid string.
    ///
    /// Digits 1-9 are filled cells; `.`, `_`, and `0` are empty cells;
    /// whitespace is ignored. The string must describe exactly 81 cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Self::new();
        let mut count = 0;
        for ch in s.chars() {
            if ch.is_whitespace() {
                continue;
            }
            let value = match ch {
                '1'..='9' => ch as u8 - b'0',
                '.' | '_' | '0' => EMPTY,
                _ => return Err(ParseBoardError::UnexpectedCharacter { ch }),
            };
            if count < CELL_COUNT {
                board.cells[count / SIZE][count % SIZE] = value;
            }
            count += 1;
        }
        if count != CELL_COUNT {
            return Err(ParseBoardError::WrongCellCount { count });
        }
        Ok(board)
    }
}

impl Display for Board {
    /// Formats the board as nine rows of nine cells, with `_` for empty cells
    /// and a space between 3-column groups.
    ///
    /// This is pure formatting; writing the text anywhere is the caller's
    /// side effect.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                f.write_str("\n")?;
            }
            for (col, &value) in cells.iter().enumerate() {
                if col == 3 || col == 6 {
                    f.write_str(" ")?;
                }
                if value == EMPTY {
                    f.write_str("_")?;
                } else {
                    write!(f, "{value}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.clue_count(), 0);
        assert!(!board.is_full());
        assert!(board.cells().all(|value| value == EMPTY));
        assert_eq!(board, Board::default());
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut board = Board::new();
        board.set(2, 1, 3);
        board.set(2, 1, 5);
        assert_eq!(board.get(2, 1), 5);

        board.set(8, 8, 9);
        assert_eq!(board.get(8, 8), 9);

        board.set(8, 8, EMPTY);
        assert_eq!(board.get(8, 8), EMPTY);
    }

    #[test]
    fn clue_count_tracks_nonzero_cells() {
        let mut board = Board::new();
        board.set(0, 0, 1);
        board.set(4, 4, 5);
        board.set(8, 8, 9);
        assert_eq!(board.clue_count(), 3);

        board.set(4, 4, EMPTY);
        assert_eq!(board.clue_count(), 2);
    }

    #[test]
    fn copy_is_deep_and_independent() {
        let mut a = Board::new();
        a.set(0, 0, 7);
        a.set(5, 3, 2);

        let mut b = Board::new();
        b.copy_from(&a);
        assert_eq!(a, b);

        a.set(0, 0, 4);
        assert_eq!(b.get(0, 0), 7);

        b.set(5, 3, 9);
        assert_eq!(a.get(5, 3), 2);
    }

    #[test]
    fn first_empty_from_walks_row_major() {
        let mut board = Board::new();
        assert_eq!(board.first_empty_from(0), Some(0));

        board.set(0, 0, 1);
        board.set(0, 1, 2);
        assert_eq!(board.first_empty_from(0), Some(2));
        assert_eq!(board.first_empty_from(2), Some(2));
        assert_eq!(board.first_empty_from(3), Some(3));
        assert_eq!(board.first_empty_from(CELL_COUNT), None);
    }

    #[test]
    fn parse_accepts_all_empty_markers() {
        let text = ".".repeat(27) + &"_".repeat(27) + &"0".repeat(27);
        let board: Board = text.parse().unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn parse_and_display_round_trip() {
        let board: Board = "
            53_ _7_ ___
            6__ 195 ___
            _98 ___ _6_
            8__ _6_ __3
            4__ 8_3 __1
            7__ _2_ __6
            _6_ ___ 28_
            ___ 419 __5
            ___ _8_ _79
        "
        .parse()
        .unwrap();
        assert_eq!(board.get(0, 0), 5);
        assert_eq!(board.get(8, 8), 9);
        assert_eq!(board.clue_count(), 30);

        let reparsed: Board = board.to_string().parse().unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            "x".repeat(81).parse::<Board>(),
            Err(ParseBoardError::UnexpectedCharacter { ch: 'x' })
        );
        assert_eq!(
            "1".repeat(80).parse::<Board>(),
            Err(ParseBoardError::WrongCellCount { count: 80 })
        );
        assert_eq!(
            ".".repeat(82).parse::<Board>(),
            Err(ParseBoardError::WrongCellCount { count: 82 })
        );
    }

    #[test]
    fn display_renders_nine_rows() {
        let mut board = Board::new();
        board.set(0, 0, 5);
        let text = board.to_string();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "5__ ___ ___");
        assert_eq!(lines[8], "___ ___ ___");
    }

    #[test]
    #[should_panic(expected = "cell coordinates out of range")]
    fn get_panics_on_out_of_range_row() {
        let board = Board::new();
        let _ = board.get(9, 0);
    }

    #[test]
    #[should_panic(expected = "cell coordinates out of range")]
    fn set_panics_on_out_of_range_col() {
        let mut board = Board::new();
        board.set(0, 9, 1);
    }

    #[test]
    #[should_panic(expected = "cell value must be between 0 and 9")]
    fn set_panics_on_out_of_range_value() {
        let mut board = Board::new();
        board.set(0, 0, 10);
    }

    proptest! {
        #[test]
        fn set_then_get_returns_value(row in 0..SIZE, col in 0..SIZE, value in 0..=9u8) {
            let mut board = Board::new();
            board.set(row, col, value);
            prop_assert_eq!(board.get(row, col), value);
            prop_assert!(board.cells().all(|cell| cell <= 9));
        }
    }
}
