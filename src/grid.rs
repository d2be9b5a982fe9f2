use std::fmt::{Display, Formatter};

use ndarray::Array2;
use rand::Rng;

use crate::cell::Cell;
use crate::location::{Dimension, Location};
use crate::placement::Placement;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A fixed-size board of letters, indexed by [`Location`]s in `(row, col)` order.
///
/// Cloning a grid yields a fully independent copy, which is how placement attempts are trialled without disturbing
/// the grid they started from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    pub(crate) cells: Array2<Cell>,
    pub(crate) dims: (Dimension, Dimension),
}

impl Grid {
    /// A grid of size `(rows, cols)` with every cell [`Empty`](Cell::Empty).
    pub fn empty(dims: (Dimension, Dimension)) -> Self {
        Self {
            cells: Array2::from_shape_simple_fn((dims.0.get(), dims.1.get()), Cell::default),
            dims,
        }
    }

    /// The `(rows, cols)` size of this grid.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.dims.0.get()
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.dims.1.get()
    }

    /// The cell at `location`, or [`None`] if it lies off the grid.
    pub fn get(&self, location: Location) -> Option<Cell> {
        self.cells.get(location.as_index()).copied()
    }

    /// The letter at `location`, if the cell exists and is not empty.
    pub fn letter(&self, location: Location) -> Option<char> {
        self.get(location).and_then(|cell| cell.letter())
    }

    /// Write `letter` to `location`. Locations off the grid are ignored.
    pub fn set(&mut self, location: Location, letter: char) {
        if let Some(cell) = self.cells.get_mut(location.as_index()) {
            *cell = Cell::Letter(letter);
        }
    }

    /// Whether every cell holds a letter.
    pub fn is_filled(&self) -> bool {
        self.cells.iter().all(|cell| *cell != Cell::Empty)
    }

    /// Give every empty cell a letter drawn uniformly from `A` to `Z`. Cells which already hold a letter are kept.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells.map_inplace(|cell| {
            if *cell == Cell::Empty {
                *cell = Cell::Letter(char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]));
            }
        });
    }

    /// Whether `placement` could be written without changing any letter already on the grid.
    ///
    /// A placement running off the grid never fits.
    pub(crate) fn fits(&self, placement: &Placement) -> bool {
        let mut covered = 0;
        for (location, letter) in placement.cells(self.dims) {
            match self.get(location) {
                Some(cell) if cell.accepts(letter) => covered += 1,
                _ => return false,
            }
        }

        covered == placement.length
    }

    /// Write every in-bounds letter of `placement`, overwriting whatever was there.
    pub(crate) fn write(&mut self, placement: &Placement) {
        for (location, letter) in placement.cells(self.dims) {
            self.set(location, letter);
        }
    }

    /// Read the cells covered by `placement` back off the grid, using `.` for empty cells.
    pub fn read(&self, placement: &Placement) -> String {
        placement.cells(self.dims)
            .map(|(location, _)| self.letter(location).unwrap_or('.'))
            .collect()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
