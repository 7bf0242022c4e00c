use super::prelude::*;
use crate::bitset::Iter as SetIter;

//               size
// x-wing          2
// swordfish       3
// jellyfish       4
/// Looks for `size` rows on which a digit is confined to the same `size`
/// columns and clears the digit from those columns outside the
/// participating rows; the same with rows and columns swapped.
pub(crate) fn find_fish(board: &mut Board, size: u8) -> u32 {
    debug_assert!((2..=4).contains(&size));

    let mut changed = 0;
    let mut found: Vec<(Set<Line>, Set<Position>)> = Vec::new();
    for digit in Digit::all() {
        for &base_lines in &[Line::ALL_ROWS, Line::ALL_COLS] {
            found.clear();
            walk_combinations(
                board,
                digit,
                base_lines.into_iter(),
                Set::NONE,
                Set::NONE,
                size,
                &mut found,
            );
            let rows_are_base = base_lines == Line::ALL_ROWS;
            for &(lines, cover) in &found {
                changed += eliminate_in_cover(board, digit, lines, cover, rows_are_base);
            }
        }
    }
    changed
}

fn walk_combinations(
    board: &Board,
    digit: Digit,
    mut rest: SetIter<Line>,
    chosen: Set<Line>,
    union: Set<Position>,
    size: u8,
    found: &mut Vec<(Set<Line>, Set<Position>)>,
) {
    if chosen.len() == size {
        if union.len() == size {
            found.push((chosen, union));
        }
        return;
    }
    while let Some(line) = rest.next() {
        let positions = board.candidate_positions(line.house(), digit);
        // 0 candidates left: digit placed on this line; 1: a hidden single,
        // either way no fish
        if positions.len() < 2 {
            continue;
        }
        let union = union | positions;
        if union.len() > size {
            continue;
        }
        walk_combinations(board, digit, rest, chosen | line, union, size, found);
    }
}

fn eliminate_in_cover(
    board: &mut Board,
    digit: Digit,
    base_lines: Set<Line>,
    cover: Set<Position>,
    rows_are_base: bool,
) -> u32 {
    let mut base_cells = Set::NONE;
    for line in base_lines {
        base_cells |= line.cells();
    }
    let mut changed = 0;
    for position in cover {
        let cover_line = match rows_are_base {
            true => Col::new(position.get()).line(),
            false => Row::new(position.get()).line(),
        };
        changed += board.eliminate_in(cover_line.cells().without(base_cells), digit);
    }
    changed
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::Sudoku;

    fn empty_board() -> Board {
        let mut board = Board::from_sudoku(Sudoku::from_bytes([0; 81]).unwrap());
        board.initialize_candidates();
        board
    }

    #[test]
    fn x_wing_on_rows_clears_the_columns() {
        let mut board = empty_board();
        // digit 7 occupies exactly columns 3 and 6 of rows 2 and 5
        for &row in &[2u8, 5] {
            let keep = Set::from(Row::new(row).cell_at(Position::new(3)))
                | Row::new(row).cell_at(Position::new(6));
            board.eliminate_in(Row::new(row).cells().without(keep), Digit::new(7));
        }

        let changed = find_fish(&mut board, 2);

        // 7 removed from columns 3 and 6 in the seven other rows
        assert_eq!(changed, 14);
        for row in 0..9u8 {
            let in_fish_row = row == 2 || row == 5;
            for &col in &[3u8, 6] {
                let cell = Row::new(row).cell_at(Position::new(col));
                assert_eq!(board.candidates(cell).contains(Digit::new(7)), in_fish_row);
            }
        }
        // other columns of the fish rows were sculpted empty, others full
        assert!(board.candidates(Cell::new(2 * 9)).contains(Digit::new(8)));
    }

    #[test]
    fn swordfish_on_columns() {
        let mut board = empty_board();
        // digit 1 occupies only rows 0, 4, 8 in columns 1, 4, 7
        for &col in &[1u8, 4, 7] {
            let keep = Set::from(Col::new(col).cell_at(Position::new(0)))
                | Col::new(col).cell_at(Position::new(4))
                | Col::new(col).cell_at(Position::new(8));
            board.eliminate_in(Col::new(col).cells().without(keep), Digit::new(1));
        }

        let changed = find_fish(&mut board, 3);

        // rows 0, 4 and 8 lose digit 1 outside the three columns
        assert_eq!(changed, 18);
        for &row in &[0u8, 4, 8] {
            for col in 0..9u8 {
                let cell = Row::new(row).cell_at(Position::new(col));
                let in_fish_col = col == 1 || col == 4 || col == 7;
                assert_eq!(board.candidates(cell).contains(Digit::new(1)), in_fish_col);
            }
        }
    }

    #[test]
    fn no_fish_on_a_wide_open_board() {
        let mut board = empty_board();
        for &size in &[2u8, 3, 4] {
            assert_eq!(find_fish(&mut board, size), 0);
        }
    }
}
