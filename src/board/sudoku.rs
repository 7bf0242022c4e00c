use crate::bitset::Set;
use crate::board::positions::{Cell, House};
use crate::board::Digit;
use crate::errors::{InvalidGridError, ParseLineError};
use std::fmt;

/// The 81 placed values of a 9×9 sudoku grid, `0` marking an empty cell.
///
/// This is the sole input and output format of the solver: a plain value
/// grid without candidate bookkeeping. Use
/// [`StrategySolver`](crate::StrategySolver) to solve one.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sudoku(pub(crate) [u8; 81]);

impl Sudoku {
    /// Creates a sudoku from an array of 81 cell values in row-major order.
    ///
    /// Returns an error if any value lies outside `0..=9`.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Sudoku, InvalidGridError> {
        for (cell, &value) in bytes.iter().enumerate() {
            if value > 9 {
                return Err(InvalidGridError::InvalidCellValue { cell, value });
            }
        }
        Ok(Sudoku(bytes))
    }

    /// Creates a sudoku from a slice of cell values in row-major order.
    ///
    /// Returns an error unless the slice contains exactly 81 values, all of
    /// them within `0..=9`.
    pub fn from_slice(values: &[u8]) -> Result<Sudoku, InvalidGridError> {
        if values.len() != 81 {
            return Err(InvalidGridError::InvalidLength(values.len()));
        }
        let mut bytes = [0; 81];
        bytes.copy_from_slice(values);
        Sudoku::from_bytes(bytes)
    }

    /// Parses a sudoku in line format: 81 characters, row-major, digits
    /// `1`–`9` for placed cells and `.`, `_` or `0` for empty ones.
    ///
    /// ```
    /// use sudoku_logic::Sudoku;
    ///
    /// let line = ".....6....59.....82....8....45........3........6..3.54...325..6..................";
    /// let sudoku = Sudoku::from_str_line(line).unwrap();
    /// assert_eq!(sudoku.n_clues(), 17);
    /// ```
    pub fn from_str_line(line: &str) -> Result<Sudoku, ParseLineError> {
        let mut bytes = [0; 81];
        let mut filled = 0;
        for (position, character) in line.chars().enumerate() {
            if filled == 81 {
                return Err(ParseLineError::WrongLength(line.chars().count()));
            }
            bytes[position] = match character {
                '1'..='9' => character as u8 - b'0',
                '.' | '_' | '0' => 0,
                _ => return Err(ParseLineError::InvalidCharacter { position, character }),
            };
            filled += 1;
        }
        if filled != 81 {
            return Err(ParseLineError::WrongLength(filled));
        }
        Ok(Sudoku(bytes))
    }

    /// Returns the cell values as an array, in row-major order.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the line-format representation, `.` for empty cells.
    pub fn to_str_line(&self) -> String {
        self.0
            .iter()
            .map(|&value| if value == 0 { '.' } else { (b'0' + value) as char })
            .collect()
    }

    /// Iterator over all cells, `None` for empty ones.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&value| Digit::new_checked(value))
    }

    /// Returns the number of placed cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&value| value != 0).count() as u8
    }

    /// Checks that no digit occurs more than once in any row, column or box.
    ///
    /// Empty cells impose no constraint: a grid full of zeros is valid.
    pub fn is_valid(&self) -> bool {
        for house in House::all() {
            let mut seen = Set::<Digit>::NONE;
            for cell in house.cells() {
                if let Some(digit) = Digit::new_checked(self.0[cell.as_index()]) {
                    if seen.contains(digit) {
                        return false;
                    }
                    seen |= digit;
                }
            }
        }
        true
    }

    /// Checks whether the sudoku is completely and consistently filled.
    pub fn is_solved(&self) -> bool {
        self.is_valid() && self.0.iter().all(|&value| value != 0)
    }

    pub(crate) fn value(&self, cell: Cell) -> u8 {
        self.0[cell.as_index()]
    }

    pub(crate) fn digit(&self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.value(cell))
    }

    pub(crate) fn set_digit(&mut self, cell: Cell, digit: Digit) {
        self.0[cell.as_index()] = digit.get();
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (cell, &value) in self.0.iter().enumerate() {
            match (cell / 9, cell % 9) {
                (0, 0) => (),
                (_, 3) | (_, 6) => write!(f, " ")?,
                (3, 0) | (6, 0) => write!(f, "\n\n")?,
                (_, 0) => writeln!(f)?,
                _ => (),
            }
            match value {
                0 => write!(f, "_")?,
                _ => write!(f, "{}", value)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Sudoku({})", self.to_str_line())
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Sudoku;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Sudoku {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(&self.to_str_line())
        }
    }

    impl<'de> Deserialize<'de> for Sudoku {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let line = String::deserialize(deserializer)?;
            Sudoku::from_str_line(&line).map_err(de::Error::custom)
        }
    }
}
