use super::prelude::*;

/// Looks for Y-wings: a pivot cell with candidates `{a,b}` linked to two
/// pincer cells holding `{a,c}` and `{b,c}`. Whichever digit the pivot
/// takes, one pincer becomes `c`, so `c` is cleared from every cell that
/// sees both pincers.
pub(crate) fn find_xy_wings(board: &mut Board) -> u32 {
    let mut changed = 0;
    for pivot in Cell::all() {
        let pivot_digits = board.candidates(pivot);
        if pivot_digits.len() != 2 {
            continue;
        }

        let row_cells = pivot.row().cells();
        let col_cells = pivot.col().cells();
        let block_cells = pivot.block().cells();

        // pincers are drawn from disjoint parts of the pivot's houses, so
        // the two never see each other
        let row_rest = row_cells.without(block_cells);
        let col_rest = col_cells.without(block_cells);
        let block_row_rest = block_cells.without(row_cells);
        let block_col_rest = block_cells.without(col_cells);

        for &(first_cells, second_cells) in &[
            (block_row_rest, row_rest),
            (block_col_rest, col_rest),
            (row_rest, col_rest),
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
                        let sees_both = first.neighbors() & second.neighbors();
                        changed += board.eliminate_in(sees_both, digit);
                    }
                }
            }
        }
    }
    changed
}

// unsolved cells with two candidates, exactly one of them shared with the
// pivot
fn pincers(board: &Board, cells: Set<Cell>, pivot_digits: Set<Digit>) -> Vec<(Cell, Set<Digit>)> {
    cells
        .into_iter()
        .map(|cell| (cell, board.candidates(cell)))
        .filter(|&(_, digits)| digits.len() == 2 && (digits & pivot_digits).len() == 1)
        .collect()
}
