//! Core data structures and rules for 9x9 Sudoku boards.
//!
//! This crate provides the board representation and the placement rules shared
//! by the solver and generator crates.
//!
//! # Overview
//!
//! - [`board`]: the [`Board`] grid, its accessors, and its text representation
//! - [`rules`]: pure row/column/box constraint checks over a [`Board`]
//!
//! # Examples
//!
//! ```
//! use doku_core::{Board, rules};
//!
//! let mut board = Board::new();
//! board.set(0, 0, 5);
//!
//! // 5 now conflicts everywhere in row 0, column 0, and the top-left box.
//! assert!(!rules::is_valid_placement(&board, 5, 0, 8));
//! assert!(rules::is_valid_placement(&board, 5, 4, 4));
//! ```

pub mod board;
pub mod rules;

pub use self::board::{Board, ParseBoardError};
