//! Pure row, column, and box constraint checks.
//!
//! Every function here is a side-effect-free predicate over a [`Board`]. The
//! composite check used before writing a cell is [`is_valid_placement`]; the
//! individual containment predicates are exposed for callers that need finer
//! grained queries.

use crate::board::{Board, EMPTY, SIZE};

/// Returns `true` if `value` appears anywhere in the given row.
///
/// # Panics
///
/// Panics if `row` is not in the range 0-8.
#[must_use]
pub fn value_in_row(board: &Board, value: u8, row: usize) -> bool {
    (0..SIZE).any(|col| board.get(row, col) == value)
}

/// Returns `true` if `value` appears anywhere in the given column.
///
/// # Panics
///
/// Panics if `col` is not in the range 0-8.
#[must_use]
pub fn value_in_column(board: &Board, value: u8, col: usize) -> bool {
    (0..SIZE).any(|row| board.get(row, col) == value)
}

/// Returns `true` if `value` appears anywhere in the 3x3 box containing
/// `(row, col)`.
///
/// The box spans 3 rows and columns starting at `(row / 3) * 3` and
/// `(col / 3) * 3`.
///
/// # Panics
///
/// Panics if `row` or `col` is not in the range 0-8.
#[must_use]
pub fn value_in_box(board: &Board, value: u8, row: usize, col: usize) -> bool {
    let box_row = (row / 3) * 3;
    let box_col = (col / 3) * 3;
    (box_row..box_row + 3)
        .any(|r| (box_col..box_col + 3).any(|c| board.get(r, c) == value))
}

/// Returns `true` if placing `value` at `(row, col)` would not duplicate an
/// existing digit in the cell's row, column, or box.
///
/// This predicate deliberately ignores whether the target cell itself is
/// occupied: it answers "would `value` be consistent here", which callers may
/// legally ask even over a filled cell. Checking occupancy before writing is
/// the caller's separate responsibility.
///
/// # Examples
///
/// ```
/// use doku_core::{Board, rules};
///
/// let mut board = Board::new();
/// board.set(0, 0, 5);
///
/// assert!(!rules::is_valid_placement(&board, 5, 0, 4)); // same row
/// assert!(!rules::is_valid_placement(&board, 5, 4, 0)); // same column
/// assert!(!rules::is_valid_placement(&board, 5, 1, 1)); // same box
/// assert!(rules::is_valid_placement(&board, 5, 4, 4));
/// ```
///
/// # Panics
///
/// Panics if `row` or `col` is not in the range 0-8.
#[must_use]
pub fn is_valid_placement(board: &Board, value: u8, row: usize, col: usize) -> bool {
    !value_in_row(board, value, row)
        && !value_in_column(board, value, col)
        && !value_in_box(board, value, row, col)
}

/// Returns `true` if no row, column, or box contains a duplicate digit.
///
/// Empty cells are ignored; a fully empty board is consistent.
#[must_use]
pub fn is_consistent(board: &Board) -> bool {
    for i in 0..SIZE {
        if house_has_duplicate((0..SIZE).map(|col| board.get(i, col))) {
            return false;
        }
        if house_has_duplicate((0..SIZE).map(|row| board.get(row, i))) {
            return false;
        }
        let box_row = (i / 3) * 3;
        let box_col = (i % 3) * 3;
        if house_has_duplicate((0..SIZE).map(|j| board.get(box_row + j / 3, box_col + j % 3))) {
            return false;
        }
    }
    true
}

fn house_has_duplicate(values: impl Iterator<Item = u8>) -> bool {
    let mut seen = [false; 10];
    for value in values {
        if value == EMPTY {
            continue;
        }
        if seen[usize::from(value)] {
            return true;
        }
        seen[usize::from(value)] = true;
    }
    false
}
