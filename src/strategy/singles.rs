//! The singles pass: enters every digit that is forced outright, either
//! because a cell is down to one candidate or because a house admits the
//! digit in only one of its cells.

use super::board::Board;
use crate::bitset::Set;
use crate::board::positions::{Block, Col, House, Row};
use crate::board::Digit;

/// Runs one pass over all 27 houses and places every single it finds.
///
/// Houses are scanned in a fixed order (boxes, then rows, then columns, each
/// by ascending index) so that a cell qualifying through several houses is
/// always resolved by the first one. Returns the number of digits placed;
/// the driver decides whether another pass is worthwhile.
pub(crate) fn solve_singles(board: &mut Board) -> u32 {
    let mut placed = 0;
    let scan_order = Block::all()
        .map(Block::house)
        .chain(Row::all().map(Row::house))
        .chain(Col::all().map(Col::house));
    for house in scan_order {
        placed += solve_singles_in_house(board, house);
    }
    placed
}

fn solve_singles_in_house(board: &mut Board, house: House) -> u32 {
    // digits that occur in exactly one unsolved cell of the house
    let mut unsolved = Set::<Digit>::NONE;
    let mut seen_twice = Set::<Digit>::NONE;
    for cell in house.cells() {
        let candidates = board.candidates(cell);
        seen_twice |= unsolved & candidates;
        unsolved |= candidates;
    }
    let lone = unsolved.without(seen_twice);

    let mut placed = 0;
    for cell in house.cells() {
        if board.digit(cell).is_some() {
            continue;
        }
        let candidates = board.candidates(cell);
        let forced = match candidates.len() {
            1 => candidates,
            _ => candidates & lone,
        };
        // `forced` can hold two lone digits on an inconsistent board;
        // placing nothing keeps the pass safe there
        if let Some(digit) = forced.unique() {
            board.place(cell, digit);
            placed += 1;
        }
    }
    placed
}
