#![warn(missing_docs)]

//! # `wordgrid`
//!
//! A generator for word search boards in which every hidden word is bound to one of five directions:
//! left to right, top to bottom, diagonally down-right, bottom to top, and diagonally down-left.
//! Collect a board size and word lists with a [`PuzzleBuilder`], then run a [`Generator`] over the resulting request,
//! yielding a [`Puzzle`]: the filled [`Grid`] plus one [`Placement`] per word.
//! Use [`resolve_cell`] (or [`Puzzle::resolve_cell`]) to decide, per cell, what a renderer should highlight.
//!
//! # Internals
//! Placement is randomized search with bounded budgets rather than a constraint solver.
//!
//! 1. Words are sorted longest first, since long words are the hardest to fit into a crowded board.
//! 2. Each word in turn tries random anchors on a scratch copy of the board, accepting an anchor if every cell it
//! covers is either empty or already holds the same letter. Words may therefore cross where their letters agree.
//! 3. If a pass over the whole list leaves any word out, the board is cleared and the pass starts over, since an
//! unlucky early word can block later ones.
//! 4. Once the passes are used up, remaining words are written at fixed anchors without any conflict checking, so
//! that every word appears somewhere. This may overwrite letters of other words; [`CellHighlight::Solution`]
//! carries each word's own letter so that the solution overlay stays correct regardless.
//! 5. Every cell still empty receives a random letter.
//!
//! When step 4 was needed, [`Puzzle::recommended_dims`] suggests a slightly larger board for next time.

pub use builder::{BuilderInvalidReason, PuzzleBuilder, PuzzleRequest};
pub use cell::Cell;
pub use direction::Direction;
pub use generator::{ConfigError, Generator, GeneratorConfig, Puzzle};
pub use grid::Grid;
pub use highlight::{resolve_cell, CellHighlight, HighlightMode};
pub use location::{clamp_dims, Dimension, Location, MAX_DIMENSION, MIN_DIMENSION};
pub use placement::{Placement, WordSpec};

pub mod builder;
pub(crate) mod cell;
pub(crate) mod direction;
pub(crate) mod generator;
pub(crate) mod grid;
pub mod highlight;
pub(crate) mod location;
pub(crate) mod placement;
pub(crate) mod strategy;
mod tests;
#[cfg(feature = "wasm")]
pub mod wasm;
