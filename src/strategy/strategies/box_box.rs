use super::prelude::*;

/// Looks for pairs of boxes in a band or stack whose candidates for a digit
/// together span only two of the three shared lines, and clears that digit
/// from those two lines in the remaining box.
pub(crate) fn find_box_box_reductions(board: &mut Board) -> u32 {
    let mut changed = 0;
    for digit in Digit::all() {
        for chute in 0..6 {
            let blocks = chute_blocks(chute);
            for &(first, second, other) in &[(0, 1, 2), (0, 2, 1), (1, 2, 0)] {
                let first_lines = lines_spanned(board, digit, chute, blocks[first]);
                let second_lines = lines_spanned(board, digit, chute, blocks[second]);
                if first_lines.is_empty() || second_lines.is_empty() {
                    continue;
                }
                let lines = first_lines | second_lines;
                if lines.len() != 2 {
                    continue;
                }
                let mut line_cells = Set::NONE;
                for line in lines {
                    line_cells |= line.cells();
                }
                changed += board.eliminate_in(blocks[other].cells() & line_cells, digit);
            }
        }
    }
    changed
}

// bands (shared rows) come first, then stacks (shared columns)
fn chute_blocks(chute: u8) -> [Block; 3] {
    if chute < 3 {
        let base = chute * 3;
        [Block::new(base), Block::new(base + 1), Block::new(base + 2)]
    } else {
        let stack = chute - 3;
        [Block::new(stack), Block::new(stack + 3), Block::new(stack + 6)]
    }
}

// the rows (in a band) or columns (in a stack) on which the block still has
// the digit as a candidate
fn lines_spanned(board: &Board, digit: Digit, chute: u8, block: Block) -> Set<Line> {
    let mut lines = Set::NONE;
    for cell in block.cells() {
        if board.candidates(cell).contains(digit) {
            lines |= match chute < 3 {
                true => cell.row().line(),
                false => cell.col().line(),
            };
        }
    }
    lines
}
