//! Deciding, cell by cell, what a renderer should highlight.

use crate::direction::Direction;
use crate::location::Location;
use crate::placement::Placement;

/// What the viewer has asked to see.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HighlightMode<'a> {
    /// Highlight nothing.
    #[default]
    Off,
    /// Highlight only the cells of this word.
    Word(&'a str),
    /// Highlight the cells of every placed word.
    Solutions,
}

impl<'a> HighlightMode<'a> {
    /// The mode for a viewer who may have `selected` a word and may have asked to `show_solution`.
    ///
    /// A selected word wins over the solution overlay; an empty selection counts as no selection.
    pub fn from_selection(selected: Option<&'a str>, show_solution: bool) -> Self {
        match (selected.filter(|word| !word.is_empty()), show_solution) {
            (Some(word), _) => Self::Word(word),
            (None, true) => Self::Solutions,
            (None, false) => Self::Off,
        }
    }
}

/// How a single cell should be drawn.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CellHighlight {
    /// Not part of anything highlighted; show the grid's own letter.
    Plain,
    /// Part of the word the viewer selected.
    Selected {
        /// The direction of the selected word.
        direction: Direction,
    },
    /// Part of some word while all solutions are shown.
    Solution {
        /// The direction of the word covering this cell.
        direction: Direction,
        /// That word's letter at this cell, which a forced placement may have overwritten on the grid itself.
        letter: char,
    },
}

impl CellHighlight {
    /// Whether the cell is highlighted at all.
    pub fn is_highlighted(&self) -> bool {
        !matches!(self, Self::Plain)
    }

    /// Whether the cell belongs to the word the viewer explicitly selected.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }

    /// The presentation tag for a highlighted cell, derived from its word's direction.
    pub fn style_class(&self) -> Option<&'static str> {
        match self {
            Self::Plain => None,
            Self::Selected { direction } | Self::Solution { direction, .. } => Some(direction.style_class()),
        }
    }

    /// The letter to draw, given the letter the grid holds at this cell.
    pub fn display_letter(&self, grid_letter: char) -> char {
        match self {
            Self::Solution { letter, .. } => *letter,
            _ => grid_letter,
        }
    }
}

/// Decide how the cell at `location` should be highlighted under `mode`.
///
/// In [`Word`](HighlightMode::Word) mode only the first placement of that word is considered; a word with no placement
/// highlights nothing. In [`Solutions`](HighlightMode::Solutions) mode the first placement covering the cell wins.
/// This reads only from `placements`, so it is safe to call for every cell in any order.
pub fn resolve_cell(location: Location, placements: &[Placement], mode: HighlightMode<'_>) -> CellHighlight {
    match mode {
        HighlightMode::Off => CellHighlight::Plain,
        HighlightMode::Word(word) => placements.iter()
            .find(|placement| placement.word == word)
            .filter(|placement| placement.covers(location))
            .map_or(CellHighlight::Plain, |placement| CellHighlight::Selected { direction: placement.direction }),
        HighlightMode::Solutions => placements.iter()
            .find_map(|placement| Some(CellHighlight::Solution {
                direction: placement.direction,
                letter: placement.letter_at(location)?,
            }))
            .unwrap_or(CellHighlight::Plain),
    }
}
