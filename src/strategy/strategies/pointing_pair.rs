use super::prelude::*;

/// Looks for boxes in which all candidates for a digit sit in a single row
/// or column, and clears that digit from the rest of the line.
pub(crate) fn find_pointing_pairs(board: &mut Board) -> u32 {
    let mut changed = 0;
    for block in Block::all() {
        let block_cells = block.cells();
        for digit in Digit::all() {
            let in_block = board.cells_with_candidate(digit) & block_cells;
            if in_block.is_empty() {
                continue;
            }
            for row in block.rows() {
                if in_block.without(row.cells()).is_empty() {
                    changed += board.eliminate_in(row.cells().without(block_cells), digit);
                }
            }
            for col in block.cols() {
                if in_block.without(col.cells()).is_empty() {
                    changed += board.eliminate_in(col.cells().without(block_cells), digit);
                }
            }
        }
    }
    changed
}
