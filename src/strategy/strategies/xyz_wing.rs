use super::prelude::*;

/// Looks for XYZ-wings: a pivot cell with candidates `{a,b,c}` linked to a
/// pincer in its box and a pincer on its row or column, both bivalue, whose
/// candidates stay within the pivot's and share exactly one digit. Every
/// assignment of the pivot forces that digit somewhere among the three
/// cells, so it is cleared from everything seeing all of them.
pub(crate) fn find_xyz_wings(board: &mut Board) -> u32 {
    let mut changed = 0;
    for pivot in Cell::all() {
        let pivot_digits = board.candidates(pivot);
        if pivot_digits.len() != 3 {
            continue;
        }

        let row_cells = pivot.row().cells();
        let col_cells = pivot.col().cells();
        let block_cells = pivot.block().cells();

        let row_rest = row_cells.without(block_cells);
        let col_rest = col_cells.without(block_cells);
        let block_row_rest = block_cells.without(row_cells);
        let block_col_rest = block_cells.without(col_cells);

        // unlike the xy-wing, the pivot takes part in the pattern itself, so
        // one pincer must sit in its box for a shared elimination zone to
        // exist at all
        for &(first_cells, second_cells) in &[
            (block_row_rest, row_rest),
            (block_col_rest, col_rest),
        ] {
            for (first, first_digits) in pincers(board, first_cells, pivot_digits) {
                for (second, second_digits) in pincers(board, second_cells, pivot_digits) {
                    let common = first_digits & second_digits;
                    if common.len() != 1
                        || (first_digits | second_digits | pivot_digits).len() != 3
                    {
                        continue;
                    }
                    if let Some(digit) = common.unique() {
                        let sees_all_three =
                            first.neighbors() & second.neighbors() & pivot.neighbors();
                        changed += board.eliminate_in(sees_all_three, digit);
                    }
                }
            }
        }
    }
    changed
}

// unsolved cells with two candidates, both of them shared with the pivot
fn pincers(board: &Board, cells: Set<Cell>, pivot_digits: Set<Digit>) -> Vec<(Cell, Set<Digit>)> {
    cells
        .into_iter()
        .map(|cell| (cell, board.candidates(cell)))
        .filter(|&(_, digits)| digits.len() == 2 && (digits & pivot_digits).len() == 2)
        .collect()
}
