#![warn(missing_docs)]
//! A sudoku solving library based on human-style logical deduction.
//!
//! ## Overview
//!
//! This crate solves 9×9 sudokus the way a person armed with pencilmarks
//! does: every empty cell carries the set of digits still possible there,
//! and a library of deduction strategies whittles those sets down until the
//! grid is filled or no strategy makes further progress. There is no
//! backtracking fallback; a puzzle the strategies cannot crack is returned
//! partially solved together with its remaining candidates.
//!
//! ## Example
//!
//! ```
//! use sudoku_logic::{Strategy, StrategySolver, Sudoku};
//!
//! // line format: row-major, `.`/`_`/`0` for empty cells
//! let line = "_23456789456_89123789123_562_45678915678_12348912345_734_67891267891_34591234567_";
//!
//! let sudoku = Sudoku::from_str_line(line).unwrap();
//! let solver = StrategySolver::from_sudoku(sudoku);
//!
//! match solver.solve(Strategy::ALL) {
//!     Ok(solution) => assert!(solution.is_solved()),
//!     Err(partial) => println!("no more deductions possible:\n{}", partial),
//! }
//! ```

pub mod bitset;
pub mod board;
pub mod errors;
mod helper;
pub mod strategy;

pub use crate::board::{CellState, Digit, GridState, Sudoku};
pub use crate::strategy::{Strategy, StrategySolver};
