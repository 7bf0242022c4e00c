use super::prelude::*;

/// Looks for rows and columns whose candidates for a digit all fall inside
/// one box, and clears that digit from the rest of the box.
pub(crate) fn find_box_line_reductions(board: &mut Board) -> u32 {
    let mut changed = 0;
    for line in Line::all() {
        let line_cells = line.cells();
        for digit in Digit::all() {
            let in_line = board.cells_with_candidate(digit) & line_cells;
            if in_line.is_empty() {
                continue;
            }
            for block in line.blocks() {
                if in_line.without(block.cells()).is_empty() {
                    changed += board.eliminate_in(block.cells().without(line_cells), digit);
                    break;
                }
            }
        }
    }
    changed
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Sudoku;

    #[test]
    fn digit_locked_to_one_box_of_a_row() {
        let mut board = Board::from_sudoku(Sudoku::from_bytes([0; 81]).unwrap());
        board.initialize_candidates();
        // digit 4 survives in row 0 only within the leftmost box
        let row_right_of_box = Row::new(0)
            .cells()
            .without(Block::new(0).cells());
        board.eliminate_in(row_right_of_box, Digit::new(4));

        let changed = find_box_line_reductions(&mut board);

        // 4 cleared from the box rows below row 0, nothing else
        assert_eq!(changed, 6);
        for cell in Block::new(0).cells().without(Row::new(0).cells()) {
            assert!(!board.candidates(cell).contains(Digit::new(4)));
        }
        assert!(board.candidates(Cell::new(0)).contains(Digit::new(4)));
        // cells outside box and row keep the digit
        assert!(board.candidates(Cell::new(3 * 9)).contains(Digit::new(4)));
    }
}
