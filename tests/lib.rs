use sudoku_logic::errors::{InvalidGridError, ParseLineError};
use sudoku_logic::{CellState, Strategy, StrategySolver, Sudoku};

// full valid grid from the shifted-rows pattern; solution of every puzzle
// the tests derive by blanking cells
fn filled_bytes() -> [u8; 81] {
    let mut bytes = [0; 81];
    for row in 0..9 {
        for col in 0..9 {
            bytes[row * 9 + col] = ((3 * row + row / 3 + col) % 9 + 1) as u8;
        }
    }
    bytes
}

// blanks one cell per row such that no two blanks share a row, column or
// box; every blank is then deducible from its own houses alone
fn singles_puzzle() -> (Sudoku, Sudoku) {
    let solution = Sudoku::from_bytes(filled_bytes()).unwrap();
    let mut bytes = filled_bytes();
    for row in 0..9 {
        let col = (3 * row + row / 3) % 9;
        bytes[row * 9 + col] = 0;
    }
    (Sudoku::from_bytes(bytes).unwrap(), solution)
}

// naive duplicate check, written independently of the library's house logic
fn has_duplicates(bytes: &[u8; 81]) -> bool {
    let group_has_duplicates = |cells: &[usize]| {
        let mut seen = [false; 10];
        for &cell in cells {
            let value = bytes[cell] as usize;
            if value != 0 {
                if seen[value] {
                    return true;
                }
                seen[value] = true;
            }
        }
        false
    };
    for i in 0..9 {
        let row: Vec<usize> = (0..9).map(|c| i * 9 + c).collect();
        let col: Vec<usize> = (0..9).map(|r| r * 9 + i).collect();
        let block: Vec<usize> = (0..9)
            .map(|j| (i / 3 * 3 + j / 3) * 9 + i % 3 * 3 + j % 3)
            .collect();
        if group_has_duplicates(&row) || group_has_duplicates(&col) || group_has_duplicates(&block)
        {
            return true;
        }
    }
    false
}

#[test]
fn is_valid_agrees_with_naive_duplicate_check() {
    let mut grids: Vec<[u8; 81]> = vec![[0; 81], filled_bytes()];

    let mut row_duplicate = [0; 81];
    row_duplicate[0] = 5;
    row_duplicate[7] = 5;
    grids.push(row_duplicate);

    let mut col_duplicate = [0; 81];
    col_duplicate[4] = 2;
    col_duplicate[4 + 72] = 2;
    grids.push(col_duplicate);

    let mut box_duplicate = [0; 81];
    box_duplicate[30] = 8;
    box_duplicate[40] = 8;
    grids.push(box_duplicate);

    let mut no_duplicate = filled_bytes();
    no_duplicate[17] = 0;
    no_duplicate[53] = 0;
    grids.push(no_duplicate);

    for bytes in grids {
        let sudoku = Sudoku::from_bytes(bytes).unwrap();
        assert_eq!(sudoku.is_valid(), !has_duplicates(&bytes));
    }
}

#[test]
fn construction_rejects_bad_input() {
    assert_eq!(
        Sudoku::from_slice(&[0; 80]),
        Err(InvalidGridError::InvalidLength(80)),
    );
    assert_eq!(
        Sudoku::from_slice(&[0; 82]),
        Err(InvalidGridError::InvalidLength(82)),
    );

    let mut values = [0; 81];
    values[80] = 12;
    assert_eq!(
        Sudoku::from_slice(&values),
        Err(InvalidGridError::InvalidCellValue {
            cell: 80,
            value: 12
        }),
    );

    assert!(matches!(
        Sudoku::from_str_line("12345"),
        Err(ParseLineError::WrongLength(5)),
    ));
}

#[test]
fn solves_a_puzzle_of_pure_singles() {
    let (puzzle, solution) = singles_puzzle();
    let solved = StrategySolver::from_sudoku(puzzle)
        .solve(Strategy::ALL)
        .unwrap();
    assert!(solved.is_solved());
    assert_eq!(solved, solution);
}

#[test]
fn solves_a_cascade_of_singles() {
    // blanking all of row 4 and column 4 leaves their crossing cell
    // deducible only after its row and column fill back up
    let solution = Sudoku::from_bytes(filled_bytes()).unwrap();
    let mut bytes = filled_bytes();
    for i in 0..9 {
        bytes[4 * 9 + i] = 0;
        bytes[i * 9 + 4] = 0;
    }
    let puzzle = Sudoku::from_bytes(bytes).unwrap();

    let solved = StrategySolver::from_sudoku(puzzle)
        .solve(Strategy::ALL)
        .unwrap();
    assert_eq!(solved, solution);
}

#[test]
fn empty_board_is_valid_but_yields_no_deductions() {
    let sudoku = Sudoku::from_bytes([0; 81]).unwrap();
    assert!(sudoku.is_valid());
    assert!(!sudoku.is_solved());

    let mut solver = StrategySolver::from_sudoku(sudoku);
    assert_eq!(solver.run(Strategy::ALL), 0);
    assert!(!solver.is_solved());

    // all 81 cells still hold all nine candidates
    let state = solver.grid_state();
    for cell_state in state.0.iter() {
        match cell_state {
            CellState::Candidates(candidates) => assert_eq!(candidates.len(), 9),
            CellState::Digit(digit) => panic!("unexpected digit {} on the empty board", digit.get()),
        }
    }
}

#[test]
fn fixpoint_is_stable() {
    let (puzzle, _) = singles_puzzle();
    let mut solver = StrategySolver::from_sudoku(puzzle);
    assert!(solver.run(Strategy::ALL) > 0);
    assert_eq!(solver.run(Strategy::ALL), 0);
    let before = solver.to_sudoku();
    assert_eq!(solver.run(Strategy::ALL), 0);
    assert_eq!(solver.to_sudoku(), before);
}

#[test]
fn deductions_never_exclude_the_known_solution() {
    // blank a diagonal half of the grid; the strategies may or may not crack
    // it, but whatever they deduce has to stay compatible with the solution
    let solution = filled_bytes();
    let mut bytes = filled_bytes();
    for row in 0..9 {
        for col in 0..9 {
            if (row + col) % 2 == 0 {
                bytes[row * 9 + col] = 0;
            }
        }
    }
    let puzzle = Sudoku::from_bytes(bytes).unwrap();

    let mut solver = StrategySolver::from_sudoku(puzzle);
    solver.run(Strategy::ALL);

    assert!(solver.is_valid());
    let state = solver.grid_state();
    for (cell, cell_state) in state.0.iter().enumerate() {
        let expected = solution[cell];
        match cell_state {
            CellState::Digit(digit) => assert_eq!(
                digit.get(),
                expected,
                "cell {} was placed wrongly",
                cell
            ),
            CellState::Candidates(candidates) => {
                let solution_digit = sudoku_logic::Digit::new(expected);
                assert!(
                    candidates.contains(solution_digit),
                    "cell {} lost its solution digit {}",
                    cell,
                    expected
                );
            }
        }
    }
}

#[test]
fn duplicate_digits_in_a_row_stay_invalid_through_a_solve() {
    let mut bytes = [0; 81];
    bytes[27] = 6;
    bytes[33] = 6;
    let sudoku = Sudoku::from_bytes(bytes).unwrap();
    assert!(!sudoku.is_valid());

    let partial = StrategySolver::from_sudoku(sudoku)
        .solve(Strategy::ALL)
        .unwrap_err();
    assert!(!partial.is_valid());
    assert!(!partial.is_solved());
}

#[test]
fn partial_solve_keeps_givens_and_reports_unsolved() {
    // two clues can't crack anything
    let mut bytes = [0; 81];
    bytes[0] = 1;
    bytes[80] = 9;
    let sudoku = Sudoku::from_bytes(bytes).unwrap();

    let partial = StrategySolver::from_sudoku(sudoku)
        .solve(Strategy::ALL)
        .unwrap_err();
    assert_eq!(partial.to_bytes()[0], 1);
    assert_eq!(partial.to_bytes()[80], 9);
    assert_eq!(partial.n_clues(), 2);
}

#[test]
fn line_format_roundtrip_through_solver() {
    let (puzzle, solution) = singles_puzzle();
    let line = puzzle.to_str_line();
    let reparsed = Sudoku::from_str_line(&line).unwrap();
    assert_eq!(reparsed, puzzle);

    let solved = StrategySolver::from_sudoku(reparsed)
        .solve(Strategy::ALL)
        .unwrap();
    assert_eq!(solved.to_str_line(), solution.to_str_line());
}

#[test]
fn display_formats_do_not_collapse() {
    let (puzzle, _) = singles_puzzle();
    let block = format!("{}", puzzle);
    assert_eq!(block.lines().count(), 11); // 9 rows + 2 band separators

    let mut solver = StrategySolver::from_sudoku(puzzle);
    solver.run(Strategy::ALL);
    let grid_state = format!("{}", solver.grid_state());
    assert!(grid_state.contains('│'));
}
