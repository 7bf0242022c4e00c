//! Positions of cells, lines and houses on the 9×9 grid.
//!
//! Everything here is pure index math. A cell's row, column and box are
//! always derived from its index, never stored, and the cells belonging to a
//! house are produced as [`Set<Cell>`] masks so that intersection queries
//! ("this box restricted to one row") are single bit operations.
#![allow(missing_docs)]

use crate::bitset::Set;

macro_rules! define_position_types {
    ( $( $name:ident : $limit:expr ),* $(,)? ) => {
        $(
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            pub struct $name(u8);

            impl $name {
                /// Constructs the position from its index.
                ///
                /// An out-of-range index is a caller bug.
                pub fn new(index: u8) -> Self {
                    debug_assert!(index < $limit);
                    $name(index)
                }

                /// Returns the index contained within.
                pub fn get(self) -> u8 {
                    self.0
                }

                /// Returns the index as `usize`, for table lookups.
                pub fn as_index(self) -> usize {
                    self.0 as usize
                }

                /// Iterator over all positions of this kind, in index order.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
}

define_position_types!(
    // one of the 81 cells, row-major
    Cell: 81,
    Row: 9,
    Col: 9,
    // one of the nine 3×3 boxes, row-major
    Block: 9,
    // rows 0..9, then columns 9..18
    Line: 18,
    // rows 0..9, columns 9..18, blocks 18..27
    House: 27,
    // index of a cell within a house, in the order `cells()` yields them
    Position: 9,
);

/// Row or column nature of a [`Line`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum LineKind {
    Row(Row),
    Col(Col),
}

/// Row, column or block nature of a [`House`].
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum HouseKind {
    Row(Row),
    Col(Col),
    Block(Block),
}

impl Cell {
    pub fn row(self) -> Row {
        Row::new(self.0 / 9)
    }

    pub fn col(self) -> Col {
        Col::new(self.0 % 9)
    }

    pub fn block(self) -> Block {
        Block::new(self.0 / 27 * 3 + self.0 % 9 / 3)
    }

    /// The row, column and block houses this cell belongs to.
    pub fn houses(self) -> [House; 3] {
        [
            self.row().house(),
            self.col().house(),
            self.block().house(),
        ]
    }

    /// All cells sharing a house with this cell, the cell itself excluded.
    pub fn neighbors(self) -> Set<Cell> {
        (self.row().cells() | self.col().cells() | self.block().cells()).without(Set::from(self))
    }
}

impl Row {
    pub fn cells(self) -> Set<Cell> {
        Set::from_bits(0o777u128 << (9 * self.0))
    }

    pub fn cell_at(self, position: Position) -> Cell {
        Cell::new(self.0 * 9 + position.get())
    }

    pub fn line(self) -> Line {
        Line::new(self.0)
    }

    pub fn house(self) -> House {
        House::new(self.0)
    }
}

impl Col {
    pub fn cells(self) -> Set<Cell> {
        Set::from_bits(0o001_001_001_001_001_001_001_001_001u128 << self.0)
    }

    pub fn cell_at(self, position: Position) -> Cell {
        Cell::new(position.get() * 9 + self.0)
    }

    pub fn line(self) -> Line {
        Line::new(self.0 + 9)
    }

    pub fn house(self) -> House {
        House::new(self.0 + 9)
    }
}

impl Block {
    pub fn cells(self) -> Set<Cell> {
        let band = self.0 / 3;
        let stack = self.0 % 3;
        Set::from_bits(0o007_007_007u128 << (27 * band + 3 * stack))
    }

    pub fn cell_at(self, position: Position) -> Cell {
        let row = self.0 / 3 * 3 + position.get() / 3;
        let col = self.0 % 3 * 3 + position.get() % 3;
        Cell::new(row * 9 + col)
    }

    /// The three rows crossing this block, top to bottom.
    pub fn rows(self) -> [Row; 3] {
        let base = self.0 / 3 * 3;
        [Row::new(base), Row::new(base + 1), Row::new(base + 2)]
    }

    /// The three columns crossing this block, left to right.
    pub fn cols(self) -> [Col; 3] {
        let base = self.0 % 3 * 3;
        [Col::new(base), Col::new(base + 1), Col::new(base + 2)]
    }

    pub fn house(self) -> House {
        House::new(self.0 + 18)
    }
}

impl Line {
    /// The set of all 9 row lines.
    pub const ALL_ROWS: Set<Line> = Set(0o000_777);
    /// The set of all 9 column lines.
    pub const ALL_COLS: Set<Line> = Set(0o777_000);

    pub fn categorize(self) -> LineKind {
        if self.0 < 9 {
            LineKind::Row(Row::new(self.0))
        } else {
            LineKind::Col(Col::new(self.0 - 9))
        }
    }

    pub fn cells(self) -> Set<Cell> {
        match self.categorize() {
            LineKind::Row(row) => row.cells(),
            LineKind::Col(col) => col.cells(),
        }
    }

    pub fn cell_at(self, position: Position) -> Cell {
        match self.categorize() {
            LineKind::Row(row) => row.cell_at(position),
            LineKind::Col(col) => col.cell_at(position),
        }
    }

    /// The three blocks crossing this line.
    pub fn blocks(self) -> [Block; 3] {
        match self.categorize() {
            LineKind::Row(row) => {
                let base = row.get() / 3 * 3;
                [Block::new(base), Block::new(base + 1), Block::new(base + 2)]
            }
            LineKind::Col(col) => {
                let stack = col.get() / 3;
                [Block::new(stack), Block::new(stack + 3), Block::new(stack + 6)]
            }
        }
    }

    pub fn house(self) -> House {
        House::new(self.0)
    }
}

impl House {
    pub fn categorize(self) -> HouseKind {
        match self.0 {
            0..=8 => HouseKind::Row(Row::new(self.0)),
            9..=17 => HouseKind::Col(Col::new(self.0 - 9)),
            _ => HouseKind::Block(Block::new(self.0 - 18)),
        }
    }

    pub fn cells(self) -> Set<Cell> {
        match self.categorize() {
            HouseKind::Row(row) => row.cells(),
            HouseKind::Col(col) => col.cells(),
            HouseKind::Block(block) => block.cells(),
        }
    }

    /// The cell at `position`, consistent with the order `cells()` yields.
    pub fn cell_at(self, position: Position) -> Cell {
        match self.categorize() {
            HouseKind::Row(row) => row.cell_at(position),
            HouseKind::Col(col) => col.cell_at(position),
            HouseKind::Block(block) => block.cell_at(position),
        }
    }
}
