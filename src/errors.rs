//! Errors reported when constructing a sudoku from external input.
//!
//! Everything here concerns malformed input only. An *inconsistent* grid
//! (duplicate digit in a row, column or box) is not an error; it is a
//! queryable state, see [`Sudoku::is_valid`](crate::Sudoku::is_valid).

/// Error for [`Sudoku::from_bytes`](crate::Sudoku::from_bytes) and
/// [`Sudoku::from_slice`](crate::Sudoku::from_slice)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidGridError {
    /// Input does not contain exactly 81 cell values
    #[error("expected 81 cell values, found {0}")]
    InvalidLength(usize),
    /// A cell value outside of `0..=9`
    #[error("cell {cell} contains {value}, cell values must be 0..=9")]
    InvalidCellValue {
        /// Index of the offending cell, `0..81` in row-major order
        cell: usize,
        /// The out-of-range value
        value: u8,
    },
}

/// Error for [`Sudoku::from_str_line`](crate::Sudoku::from_str_line)
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseLineError {
    /// Line does not contain exactly 81 characters
    #[error("line contains {0} characters, expected 81")]
    WrongLength(usize),
    /// A character that is neither a digit nor one of the empty-cell markers
    /// `.`, `_`, `0`
    #[error("invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// Character position within the line, counted in characters
        position: usize,
        /// The offending character
        character: char,
    },
}
