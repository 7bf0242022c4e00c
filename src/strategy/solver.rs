use super::board::Board;
use super::singles;
use super::strategies::Strategy;
use crate::board::{GridState, Sudoku};

/// Applies human-style deduction strategies to a sudoku until nothing makes
/// further progress.
///
/// A solve alternates two phases. First the elimination strategies prune
/// candidate sets until a full sweep of them changes nothing, then the
/// singles pass enters every digit that has become forced. One such round
/// that leaves the board untouched means the fixpoint is reached: the solver
/// stops and reports either the solution or the partial grid. Every round
/// either shrinks a candidate set or fills a cell, so termination needs no
/// iteration cap.
///
/// There is no backtracking. A sudoku beyond the reach of the given
/// strategies comes back partially solved, with the remaining candidates
/// available through [`grid_state`](StrategySolver::grid_state).
pub struct StrategySolver {
    board: Board,
    initialized: bool,
}

impl StrategySolver {
    /// Creates a solver for the given sudoku.
    ///
    /// Candidate sets are computed on the first call to
    /// [`run`](StrategySolver::run) or [`solve`](StrategySolver::solve).
    pub fn from_sudoku(sudoku: Sudoku) -> StrategySolver {
        StrategySolver {
            board: Board::from_sudoku(sudoku),
            initialized: false,
        }
    }

    /// Runs the solver with the given strategies until no further deduction
    /// is possible. Returns `Ok` with the solution if the sudoku was filled
    /// completely and consistently, `Err` with the partial grid otherwise.
    ///
    /// An unsolved sudoku is a normal outcome, not a failure of the board:
    /// it only means this strategy set ran out of deductions.
    pub fn solve(mut self, strategies: &[Strategy]) -> Result<Sudoku, Sudoku> {
        self.run(strategies);
        match self.board.is_solved() {
            true => Ok(self.board.into_sudoku()),
            false => Err(self.board.into_sudoku()),
        }
    }

    /// Runs rounds of eliminations and singles until a whole round changes
    /// nothing, and returns the total number of changes (candidate sets
    /// shrunk plus digits placed). Calling it again afterwards returns `0`.
    pub fn run(&mut self, strategies: &[Strategy]) -> u32 {
        if !self.initialized {
            self.board.initialize_candidates();
            self.initialized = true;
        }
        let mut total = 0;
        loop {
            let mut round = 0;
            loop {
                let eliminated: u32 = strategies
                    .iter()
                    .map(|&strategy| strategy.apply(&mut self.board))
                    .sum();
                round += eliminated;
                if eliminated == 0 {
                    break;
                }
            }
            loop {
                let placed = singles::solve_singles(&mut self.board);
                round += placed;
                if placed == 0 {
                    break;
                }
            }
            total += round;
            if round == 0 {
                return total;
            }
        }
    }

    /// Checks whether the grid is completely and consistently filled.
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Checks that no digit occurs twice in any row, column or box.
    pub fn is_valid(&self) -> bool {
        self.board.is_valid()
    }

    /// Returns the current placed values, ignoring candidates.
    pub fn to_sudoku(&self) -> Sudoku {
        *self.board.grid()
    }

    /// Returns the digit or remaining candidates of every cell.
    ///
    /// Before the first [`run`](StrategySolver::run), candidates have not
    /// been computed yet and empty cells show none.
    pub fn grid_state(&self) -> GridState {
        GridState(self.board.grid_state())
    }
}
