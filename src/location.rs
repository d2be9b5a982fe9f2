use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
/// The extent of one board axis.
pub type Dimension = NonZero<Coord>;

/// The smallest number of rows or columns a board may have.
pub const MIN_DIMENSION: Coord = 5;
/// The largest number of rows or columns a board may have.
pub const MAX_DIMENSION: Coord = 20;

#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug)]
/// A location `(row, col)` on a board. The top left corner is `Location(0, 0)`.
pub struct Location(pub Coord, pub Coord);

impl Location {
    pub(crate) fn as_index(&self) -> (Ix, Ix) {
        (self.0, self.1)
    }

    /// Step `times` times by `delta` (in `(row, col)` order), returning [`None`] if any coordinate would leave a
    /// board of size `dims`.
    pub fn step(self, delta: (isize, isize), times: usize, dims: (Dimension, Dimension)) -> Option<Self> {
        let times = isize::try_from(times).ok()?;
        let row = self.0.checked_add_signed(delta.0.checked_mul(times)?)?;
        let col = self.1.checked_add_signed(delta.1.checked_mul(times)?)?;

        (row < dims.0.get() && col < dims.1.get()).then_some(Self(row, col))
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self(value.0, value.1)
    }
}

fn clamp_dimension(value: Coord) -> Dimension {
    // the clamp keeps this nonzero
    NonZero::new(value.clamp(MIN_DIMENSION, MAX_DIMENSION)).unwrap_or(NonZero::<Coord>::MIN)
}

/// Clamp raw `(rows, cols)` input into the supported range of [`MIN_DIMENSION`]..=[`MAX_DIMENSION`].
pub fn clamp_dims(rows: Coord, cols: Coord) -> (Dimension, Dimension) {
    (clamp_dimension(rows), clamp_dimension(cols))
}
