//! Command-line interface for the doku Sudoku engine.
//!
//! Generates a board in one of the five generation modes and prints it,
//! optionally followed by its solution.
//!
//! # Usage
//!
//! Generate a solvable 63-clue board (the default mode):
//!
//! ```sh
//! cargo run --bin doku
//! ```
//!
//! Reproducible generation with a seed, solving the result:
//!
//! ```sh
//! cargo run --bin doku -- --mode clues-solvable --seed 42 --solve
//! ```
//!
//! Build a board the solver must reject:
//!
//! ```sh
//! cargo run --bin doku -- --mode unsolvable --solve
//! ```

use std::process;

use clap::{Parser, ValueEnum};
use doku_core::Board;
use doku_generator::{BoardGenerator, GenerateError};
use rand::Rng;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    /// Fill all 81 cells randomly; dead cells may stay empty.
    Full,
    /// Fill exactly 63 clues.
    Clues,
    /// Fill exactly 63 clues, guaranteed solvable.
    CluesSolvable,
    /// Full random fill, guaranteed solvable.
    Solvable,
    /// A board the solver is guaranteed to reject.
    Unsolvable,
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Generation mode.
    #[arg(long, value_enum, default_value = "clues-solvable")]
    mode: Mode,

    /// Seed for reproducible generation; omit to seed from entropy.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Also run the solver on the generated board and print the outcome.
    #[arg(long)]
    solve: bool,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let mut generator = match args.seed {
        Some(seed) => BoardGenerator::from_seed(seed),
        None => BoardGenerator::new(),
    };

    let board = match generate(&mut generator, args.mode) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("Board ({} clues):", board.clue_count());
    println!("{board}");

    if args.solve {
        let mut solution = board.clone();
        println!();
        if doku_solver::solve(&mut solution) {
            println!("Solution:");
            println!("{solution}");
        } else {
            println!("No solution exists.");
        }
    }
}

fn generate(
    generator: &mut BoardGenerator<impl Rng>,
    mode: Mode,
) -> Result<Board, GenerateError> {
    match mode {
        Mode::Full => Ok(generator.fill_board_randomly()),
        Mode::Clues => generator.fill_board_with_clues(),
        Mode::CluesSolvable => generator.solvable_board_with_clues(),
        Mode::Solvable => generator.solvable_board(),
        Mode::Unsolvable => Ok(generator.unsolvable_board()),
    }
}
