use crate::direction::Direction;
use crate::location::{Dimension, Location};

/// A word to be hidden on the board, bound to the one [`Direction`] it must run in.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct WordSpec {
    /// The word, upper case.
    pub word: String,
    /// The direction the word is read in.
    pub direction: Direction,
}

impl WordSpec {
    /// Bind `word` to `direction`.
    pub fn new(direction: Direction, word: impl Into<String>) -> Self {
        Self { word: word.into(), direction }
    }
}

/// Where and how one word was embedded in a board.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Placement {
    /// The word that was placed.
    pub word: String,
    /// The direction it runs in.
    pub direction: Direction,
    /// The cell holding the word's first letter.
    pub anchor: Location,
    /// The number of letters in the word.
    pub length: usize,
    /// Whether this placement came from the forcing fallback rather than from the random search, in which case
    /// its letters may have overwritten (or been overwritten by) another word's letters.
    pub forced: bool,
}

impl Placement {
    pub(crate) fn new(spec: &WordSpec, anchor: Location, forced: bool) -> Self {
        Self {
            word: spec.word.clone(),
            direction: spec.direction,
            anchor,
            length: spec.word.chars().count(),
            forced,
        }
    }

    /// The cells this placement covers on a board of size `dims`, paired with the letter each should hold.
    ///
    /// Cells that would fall off the board are skipped; only a forced placement can have any.
    pub fn cells(&self, dims: (Dimension, Dimension)) -> impl Iterator<Item = (Location, char)> + '_ {
        self.word.chars()
            .enumerate()
            .filter_map(move |(index, letter)| Some((self.direction.cell_at(self.anchor, index, dims)?, letter)))
    }

    /// Which letter of the word lies on `location`, if the placement covers it.
    pub fn offset_of(&self, location: Location) -> Option<usize> {
        self.direction.offset_of(self.anchor, self.length, location)
    }

    /// Whether this placement covers `location`.
    pub fn covers(&self, location: Location) -> bool {
        self.offset_of(location).is_some()
    }

    /// The word's own letter at `location`, regardless of what the board currently holds there.
    pub fn letter_at(&self, location: Location) -> Option<char> {
        self.word.chars().nth(self.offset_of(location)?)
    }
}
