mod basic_fish;
mod box_box;
mod box_line;
mod hidden_subsets;
mod naked_subsets;
mod pointing_pair;
mod prelude;
mod xy_wing;
mod xyz_wing;

use super::board::Board;

/// The candidate elimination strategies available to the
/// [`StrategySolver`](crate::StrategySolver).
///
/// Subset strategies stop at size 3: quads are rare and the combinatorics
/// per house grow steeply, so leaving them out trades a little completeness
/// for a lot of work saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[allow(missing_docs)]
pub enum Strategy {
    PointingPair,
    BoxLineReduction,
    BoxBoxReduction,
    NakedPairs,
    NakedTriples,
    HiddenPairs,
    HiddenTriples,
    XWing,
    Swordfish,
    Jellyfish,
    XyWing,
    XyzWing,
}

impl Strategy {
    /// Every available strategy, ordered roughly from cheap to expensive.
    pub const ALL: &'static [Strategy] = &[
        Strategy::PointingPair,
        Strategy::BoxLineReduction,
        Strategy::BoxBoxReduction,
        Strategy::NakedPairs,
        Strategy::NakedTriples,
        Strategy::HiddenPairs,
        Strategy::HiddenTriples,
        Strategy::XWing,
        Strategy::Swordfish,
        Strategy::Jellyfish,
        Strategy::XyWing,
        Strategy::XyzWing,
    ];

    /// Applies the strategy once, removing every candidate its pattern rules
    /// out. Returns the number of candidate sets that shrank.
    pub(crate) fn apply(self, board: &mut Board) -> u32 {
        match self {
            Strategy::PointingPair => pointing_pair::find_pointing_pairs(board),
            Strategy::BoxLineReduction => box_line::find_box_line_reductions(board),
            Strategy::BoxBoxReduction => box_box::find_box_box_reductions(board),
            Strategy::NakedPairs => naked_subsets::find_naked_subsets(board, 2),
            Strategy::NakedTriples => naked_subsets::find_naked_subsets(board, 3),
            Strategy::HiddenPairs => hidden_subsets::find_hidden_subsets(board, 2),
            Strategy::HiddenTriples => hidden_subsets::find_hidden_subsets(board, 3),
            Strategy::XWing => basic_fish::find_fish(board, 2),
            Strategy::Swordfish => basic_fish::find_fish(board, 3),
            Strategy::Jellyfish => basic_fish::find_fish(board, 4),
            Strategy::XyWing => xy_wing::find_xy_wings(board),
            Strategy::XyzWing => xyz_wing::find_xyz_wings(board),
        }
    }
}
