use std::ops::RangeInclusive;

use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::location::{Coord, Dimension, Location};

/// The five directions a word may run in.
///
/// Every direction is described by a single `(row, col)` step, see [`Direction::delta`].
/// The anchor of a placed word is always the cell holding its first letter; for [`BottomUp`](Direction::BottomUp)
/// and [`TopDown`](Direction::TopDown) that is the bottom-most and right-most end respectively.
#[derive(Copy, Clone, VariantArray, Display, EnumString, AsRefStr, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
#[strum(serialize_all = "camelCase")]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Down and to the right.
    Diagonal,
    /// Bottom to top.
    BottomUp,
    /// Down and to the left.
    TopDown,
}

impl Direction {
    /// The `(row, col)` step taken from one letter of a word to the next.
    pub const fn delta(&self) -> (isize, isize) {
        match self {
            Self::Horizontal => (0, 1),
            Self::Vertical => (1, 0),
            Self::Diagonal => (1, 1),
            Self::BottomUp => (-1, 0),
            Self::TopDown => (1, -1),
        }
    }

    /// The presentation tag used for cells highlighted as part of a word in this direction.
    pub const fn style_class(&self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal-highlighted",
            Self::Vertical => "vertical-highlighted",
            Self::Diagonal => "diagonal-highlighted",
            Self::BottomUp => "bottomup-highlighted",
            Self::TopDown => "topdown-highlighted",
        }
    }

    /// The rows and columns an anchor may take so that a word of `len` letters stays on a board of size `dims`.
    ///
    /// Returns [`None`] if the word cannot fit at all.
    pub fn anchor_ranges(&self, dims: (Dimension, Dimension), len: usize) -> Option<(RangeInclusive<Coord>, RangeInclusive<Coord>)> {
        let (row_step, col_step) = self.delta();
        Some((
            axis_range(row_step, dims.0.get(), len)?,
            axis_range(col_step, dims.1.get(), len)?,
        ))
    }

    /// The cell holding letter `index` of a word anchored at `anchor`, or [`None`] if it falls off the board.
    pub fn cell_at(&self, anchor: Location, index: usize, dims: (Dimension, Dimension)) -> Option<Location> {
        anchor.step(self.delta(), index, dims)
    }

    /// The inverse of [`cell_at`](Self::cell_at): which letter of a `len`-letter word anchored at `anchor` sits at
    /// `location`, if any.
    pub fn offset_of(&self, anchor: Location, len: usize, location: Location) -> Option<usize> {
        let (row_step, col_step) = self.delta();
        let row_offset = axis_offset(row_step, anchor.0, location.0)?;
        let col_offset = axis_offset(col_step, anchor.1, location.1)?;

        let offset = match (row_offset, col_offset) {
            (Some(a), Some(b)) if a == b => a,
            (Some(a), None) | (None, Some(a)) => a,
            _ => return None,
        };
        (offset < len).then_some(offset)
    }
}

fn axis_range(step: isize, extent: Coord, len: usize) -> Option<RangeInclusive<Coord>> {
    let span = step.unsigned_abs() * len.saturating_sub(1);
    if span >= extent {
        return None;
    }

    Some(match step {
        s if s < 0 => span..=extent - 1,
        _ => 0..=extent - 1 - span,
    })
}

// Some(None): the axis is fixed and matches, so any offset works along it.
fn axis_offset(step: isize, anchor: Coord, at: Coord) -> Option<Option<usize>> {
    match step {
        0 => (anchor == at).then_some(None),
        1 => at.checked_sub(anchor).map(Some),
        -1 => anchor.checked_sub(at).map(Some),
        _ => unreachable!(),
    }
}
