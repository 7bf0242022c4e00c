use super::prelude::*;
use crate::bitset::Iter as SetIter;

/// Looks for groups of `size` cells in a house that collectively allow only
/// `size` digits, and clears those digits from the rest of the house.
pub(crate) fn find_naked_subsets(board: &mut Board, size: u8) -> u32 {
    debug_assert!(size == 2 || size == 3);

    let mut changed = 0;
    let mut found: Vec<(Set<Cell>, Set<Digit>)> = Vec::new();
    for house in House::all() {
        found.clear();
        walk_combinations(
            board,
            house.cells().into_iter(),
            Set::NONE,
            Set::NONE,
            size,
            &mut found,
        );
        for &(cells, digits) in &found {
            let rest = house.cells().without(cells);
            for digit in digits {
                changed += board.eliminate_in(rest, digit);
            }
        }
    }
    changed
}

fn walk_combinations(
    board: &Board,
    mut rest: SetIter<Cell>,
    chosen: Set<Cell>,
    union: Set<Digit>,
    size: u8,
    found: &mut Vec<(Set<Cell>, Set<Digit>)>,
) {
    if chosen.len() == size {
        if union.len() == size {
            found.push((chosen, union));
        }
        return;
    }
    while let Some(cell) = rest.next() {
        let candidates = board.candidates(cell);
        // solved cells take no part in subsets
        if candidates.is_empty() {
            continue;
        }
        let union = union | candidates;
        // the union only ever grows; overshooting `size` is unrecoverable
        if union.len() > size {
            continue;
        }
        walk_combinations(board, rest, chosen | cell, union, size, found);
    }
}
