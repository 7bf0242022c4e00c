use super::prelude::*;
use crate::bitset::Iter as SetIter;
use crate::helper::DigitArray;

/// Looks for groups of `size` digits confined to `size` cells of a house,
/// and strips every other candidate from those cells.
pub(crate) fn find_hidden_subsets(board: &mut Board, size: u8) -> u32 {
    debug_assert!(size == 2 || size == 3);

    let mut changed = 0;
    let mut found: Vec<(Set<Digit>, Set<Position>)> = Vec::new();
    for house in House::all() {
        let mut positions = DigitArray([Set::<Position>::NONE; 9]);
        for digit in Digit::all() {
            positions[digit] = board.candidate_positions(house, digit);
        }

        found.clear();
        walk_combinations(
            &positions,
            Set::ALL.into_iter(),
            Set::NONE,
            Set::NONE,
            size,
            &mut found,
        );
        for &(digits, confined_to) in &found {
            for position in confined_to {
                if board.restrict_candidates(house.cell_at(position), digits) {
                    changed += 1;
                }
            }
        }
    }
    changed
}

fn walk_combinations(
    positions: &DigitArray<Set<Position>>,
    mut rest: SetIter<Digit>,
    chosen: Set<Digit>,
    union: Set<Position>,
    size: u8,
    found: &mut Vec<(Set<Digit>, Set<Position>)>,
) {
    if chosen.len() == size {
        if union.len() == size {
            found.push((chosen, union));
        }
        return;
    }
    while let Some(digit) = rest.next() {
        let digit_positions = positions[digit];
        // digits already placed in the house have no position left
        if digit_positions.is_empty() {
            continue;
        }
        let union = union | digit_positions;
        if union.len() > size {
            continue;
        }
        walk_combinations(positions, rest, chosen | digit, union, size, found);
    }
}
