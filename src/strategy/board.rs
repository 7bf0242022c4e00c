use crate::bitset::Set;
use crate::board::positions::{Cell, House, Position};
use crate::board::{CellState, Digit, Sudoku};
use crate::helper::CellArray;

/// The placed values of a sudoku together with the live candidate set of
/// every empty cell.
///
/// The board owns all solve state exclusively. Strategies receive it by
/// mutable reference and communicate progress through the change counts of
/// the elimination primitives; they never place digits themselves.
///
/// Invariant: a placed cell has an empty candidate set, an empty cell's
/// candidate set is never narrowed below what the placed values imply.
pub(crate) struct Board {
    grid: Sudoku,
    candidates: CellArray<Set<Digit>>,
}

impl Board {
    /// Wraps a value grid. Candidate sets stay empty until
    /// [`initialize_candidates`](Board::initialize_candidates) runs.
    pub(crate) fn from_sudoku(grid: Sudoku) -> Board {
        Board {
            grid,
            candidates: CellArray([Set::NONE; 81]),
        }
    }

    /// Recomputes every empty cell's candidates from scratch: all nine
    /// digits minus whatever is placed among the cell's peers.
    pub(crate) fn initialize_candidates(&mut self) {
        let mut house_placed = [Set::<Digit>::NONE; 27];
        for cell in Cell::all() {
            if let Some(digit) = self.grid.digit(cell) {
                for house in cell.houses() {
                    house_placed[house.as_index()] |= digit;
                }
            }
        }
        for cell in Cell::all() {
            self.candidates[cell] = match self.grid.digit(cell) {
                Some(_) => Set::NONE,
                None => {
                    let [row, col, block] = cell.houses();
                    Set::ALL.without(
                        house_placed[row.as_index()]
                            | house_placed[col.as_index()]
                            | house_placed[block.as_index()],
                    )
                }
            };
        }
    }

    pub(crate) fn digit(&self, cell: Cell) -> Option<Digit> {
        self.grid.digit(cell)
    }

    pub(crate) fn candidates(&self, cell: Cell) -> Set<Digit> {
        self.candidates[cell]
    }

    /// Enters a digit: sets the value, drops the cell's candidates and
    /// eliminates the digit from every peer's candidate set.
    pub(crate) fn place(&mut self, cell: Cell, digit: Digit) {
        self.grid.set_digit(cell, digit);
        self.candidates[cell] = Set::NONE;
        self.eliminate_in(cell.neighbors(), digit);
    }

    /// Removes `digit` from the candidate sets of all given cells.
    /// Returns how many sets actually shrank; zero is a normal outcome.
    pub(crate) fn eliminate_in(&mut self, cells: Set<Cell>, digit: Digit) -> u32 {
        let mut changed = 0;
        for cell in cells {
            if self.candidates[cell].contains(digit) {
                self.candidates[cell].remove(digit);
                changed += 1;
            }
        }
        changed
    }

    /// Intersects a cell's candidates with `allowed`. Returns whether the
    /// set shrank.
    pub(crate) fn restrict_candidates(&mut self, cell: Cell, allowed: Set<Digit>) -> bool {
        let old = self.candidates[cell];
        let new = old & allowed;
        self.candidates[cell] = new;
        new != old
    }

    /// The set of all cells that still have `digit` as a candidate.
    pub(crate) fn cells_with_candidate(&self, digit: Digit) -> Set<Cell> {
        let mut cells = Set::NONE;
        for cell in Cell::all() {
            if self.candidates[cell].contains(digit) {
                cells |= cell;
            }
        }
        cells
    }

    /// The in-house positions at which `digit` is still a candidate.
    pub(crate) fn candidate_positions(&self, house: House, digit: Digit) -> Set<Position> {
        let mut positions = Set::NONE;
        for (index, cell) in house.cells().into_iter().enumerate() {
            if self.candidates[cell].contains(digit) {
                positions |= Position::new(index as u8);
            }
        }
        positions
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.grid.is_valid()
    }

    pub(crate) fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    pub(crate) fn grid(&self) -> &Sudoku {
        &self.grid
    }

    pub(crate) fn into_sudoku(self) -> Sudoku {
        self.grid
    }

    /// Digit or remaining candidates of every cell, in cell order.
    pub(crate) fn grid_state(&self) -> [CellState; 81] {
        let mut states = [CellState::Candidates(Set::NONE); 81];
        for cell in Cell::all() {
            states[cell.as_index()] = match self.grid.digit(cell) {
                Some(digit) => CellState::Digit(digit),
                None => CellState::Candidates(self.candidates[cell]),
            };
        }
        states
    }

    #[cfg(test)]
    pub(crate) fn total_candidates(&self) -> u32 {
        Cell::all().map(|cell| u32::from(self.candidates[cell].len())).sum()
    }
}
