use std::num::NonZeroU8;

// defined apart from the position types because it is 1-based
/// A digit that can be entered into a cell of a sudoku.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panic
    /// Panics, if the digit is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).expect("digit outside 1..=9")
    }

    /// Constructs a new `Digit`. Returns `None`, if the digit is not in the
    /// range of `1..=9`.
    pub fn new_checked(digit: u8) -> Option<Self> {
        if digit > 9 {
            return None;
        }
        NonZeroU8::new(digit).map(Digit)
    }

    /// Constructs a new `Digit` from an index, i.e. `digit - 1`.
    pub(crate) fn from_index(index: u8) -> Self {
        debug_assert!(index < 9);
        Digit(NonZeroU8::new(index + 1).unwrap())
    }

    /// Returns an iterator over all nine digits.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..10).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the digit offset by `-1`, so that numbering starts from `0`.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}
