use std::fmt::{Display, Formatter};

/// A single board cell: either still empty or holding one letter.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Cell {
    /// A letter, upper case.
    Letter(char),
    /// Nothing written here yet.
    #[default]
    Empty,
}

impl Cell {
    /// The letter in this cell, if any.
    pub fn letter(&self) -> Option<char> {
        match self {
            Cell::Letter(letter) => Some(*letter),
            Cell::Empty => None,
        }
    }

    /// Whether `letter` may be written here without disturbing what is already present.
    pub(crate) fn accepts(&self, letter: char) -> bool {
        match self {
            Cell::Letter(existing) => *existing == letter,
            Cell::Empty => true,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter().unwrap_or('.'))
    }
}
