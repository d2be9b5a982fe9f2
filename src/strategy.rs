use rand::Rng;

use crate::direction::Direction;
use crate::grid::Grid;
use crate::location::Location;
use crate::placement::{Placement, WordSpec};

/// Try up to `tries` uniformly random anchors for `spec` on `grid`.
///
/// A try fails if any covered cell already holds a different letter; identical letters may be shared.
/// On success the word is written to `grid` and its [`Placement`] returned.
/// [`None`] is an ordinary outcome, including when the word is too long to fit in its direction at all.
pub(crate) fn place_random<R: Rng + ?Sized>(spec: &WordSpec, grid: &mut Grid, rng: &mut R, tries: usize) -> Option<Placement> {
    let (rows, cols) = spec.direction.anchor_ranges(grid.dims(), spec.word.chars().count())?;

    for _ in 0..tries {
        let anchor = Location(rng.gen_range(rows.clone()), rng.gen_range(cols.clone()));
        let placement = Placement::new(spec, anchor, false);

        if grid.fits(&placement) {
            grid.write(&placement);
            return Some(placement);
        }
    }

    None
}

/// Place `spec` on `grid` at a deterministic anchor derived from how many words are already placed, without checking
/// for conflicts.
///
/// Letters already on the grid are overwritten. Letters that would fall off the grid are dropped, so a word too long
/// for the board still gets a [`Placement`].
pub(crate) fn place_forced(spec: &WordSpec, grid: &mut Grid, placed_count: usize) -> Placement {
    let (rows, cols) = (grid.rows(), grid.cols());
    let len = spec.word.chars().count();

    let anchor = match spec.direction {
        Direction::Horizontal => Location(placed_count % rows, 0),
        Direction::Vertical => Location(0, placed_count % cols),
        Direction::Diagonal => {
            let offset = placed_count % (rows.min(cols).saturating_sub(len) + 1);
            Location(offset, offset)
        }
        Direction::BottomUp => Location((rows - 1).min(len + 2), (placed_count + 1) % cols),
        Direction::TopDown => Location(placed_count % (rows.saturating_sub(len) + 1), (cols - 1).min(len + 2)),
    };

    let placement = Placement::new(spec, anchor, true);
    grid.write(&placement);
    placement
}
