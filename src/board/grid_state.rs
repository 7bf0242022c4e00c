use super::CellState;
use std::fmt;

/// Snapshot of a solve in progress: the digit of every placed cell and the
/// remaining candidates of every unsolved one.
///
/// The `Display` impl prints the familiar pencilmark grid:
///
/// ```text
/// ┌─────────────┬─────────────┬─────────────┐
/// │ 1   2   3   │ 4   5   6   │ 7   8   9   │
/// │ 456 456 456 │ 123 123 123 │ 123 123 123 │
/// │ ...         │             │             │
/// └─────────────┴─────────────┴─────────────┘
/// ```
pub struct GridState(pub [CellState; 81]);

impl GridState {
    fn cell_text(&self, cell: usize) -> String {
        match self.0[cell] {
            CellState::Digit(digit) => digit.get().to_string(),
            CellState::Candidates(candidates) => {
                if candidates.is_empty() {
                    // unsolved cell with no possibility left: contradiction
                    "x".to_string()
                } else {
                    candidates.into_iter().map(|digit| (b'0' + digit.get()) as char).collect()
                }
            }
        }
    }
}

impl fmt::Display for GridState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let texts: Vec<String> = (0..81).map(|cell| self.cell_text(cell)).collect();
        let width = texts.iter().map(String::len).max().unwrap_or(1);
        let stack_width = 3 * (width + 1) + 1;

        let delimiter = |f: &mut fmt::Formatter, left, mid, right| {
            writeln!(
                f,
                "{left}{0:─<1$}{mid}{0:─<1$}{mid}{0:─<1$}{right}",
                "",
                stack_width,
                left = left,
                mid = mid,
                right = right,
            )
        };

        delimiter(f, '┌', '┬', '┐')?;
        for row in 0..9 {
            if row == 3 || row == 6 {
                delimiter(f, '├', '┼', '┤')?;
            }
            for col in 0..9 {
                if col % 3 == 0 {
                    write!(f, "│ ")?;
                }
                write!(f, "{:1$} ", texts[row * 9 + col], width)?;
            }
            writeln!(f, "│")?;
        }
        delimiter(f, '└', '┴', '┘')
    }
}
