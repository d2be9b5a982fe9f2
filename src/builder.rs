//! Collecting a board size and word lists before generation.

use rand::Rng;
use thiserror::Error;

use crate::direction::Direction;
use crate::generator::{Generator, Puzzle};
use crate::location::{clamp_dims, Dimension};
use crate::placement::WordSpec;

/// Reasons a builder may become invalid while building.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum BuilderInvalidReason {
    /// A word with no letters was added.
    #[error("word is empty")]
    EmptyWord,
    /// A word contained something other than the letters `A` to `Z`.
    #[error("word contains characters other than the letters A to Z")]
    NotAlphabetic,
    /// A word is longer than the shorter side of the board and so cannot be guaranteed to fit.
    #[error("word is too long for the board (at most {max} letters)")]
    WordTooLong {
        /// The longest word the board accepts.
        max: usize,
    },
    /// The same word was added twice in the same direction.
    #[error("word is already in this direction's list")]
    DuplicateWord,
}

/// The board size and word list for one generation pass, as produced by [`PuzzleBuilder::build`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PuzzleRequest {
    /// `(rows, cols)`.
    pub dims: (Dimension, Dimension),
    /// Every word to hide, in the order added.
    pub words: Vec<WordSpec>,
}

impl PuzzleRequest {
    /// Run `generator` over this request.
    pub fn generate<R: Rng>(&self, generator: &mut Generator<R>) -> Puzzle {
        generator.generate(self.dims, &self.words)
    }
}

/// Collects a board size and the words for each [`Direction`].
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
/// Once an invalid word is added the builder stops accepting changes and [`build`](Self::build) reports why.
#[derive(Clone, Debug)]
pub struct PuzzleBuilder {
    dims: (Dimension, Dimension),
    words: Vec<WordSpec>,
    invalid_reasons: Vec<BuilderInvalidReason>,
}

impl Default for PuzzleBuilder {
    fn default() -> Self {
        Self::with_dims(15, 15)
    }
}

impl PuzzleBuilder {
    /// Construct a new builder with `(rows, cols)` clamped into the supported range.
    pub fn with_dims(rows: usize, cols: usize) -> Self {
        Self {
            dims: clamp_dims(rows, cols),
            words: Default::default(),
            invalid_reasons: Default::default(),
        }
    }

    /// A 15x15 board with five words in every direction.
    pub fn sample() -> Self {
        let mut builder = Self::with_dims(15, 15);
        for (direction, words) in [
            (Direction::Horizontal, ["FUERZA", "CONFIANZA", "SUPERACION", "TEMPLANZA", "VOLUNTAD"]),
            (Direction::Vertical, ["CORAJE", "TENACIDAD", "FIRMEZA", "FORTALEZA", "POTENCIAL"]),
            (Direction::Diagonal, ["RESILIENCIA", "PODER", "CAPACIDAD", "ESPERANZA", "ANIMO"]),
            (Direction::BottomUp, ["VALOR", "VIRTUD", "ADAPTACION", "CONSTANCIA", "RENOVACION"]),
            (Direction::TopDown, ["PACIENCIA", "ENTEREZA", "OPTIMISMO", "RESISTENCIA", "TRANSFORMACION"]),
        ] {
            for word in words {
                builder.add_word(direction, word);
            }
        }

        builder
    }

    /// The current `(rows, cols)`.
    pub fn dims(&self) -> (Dimension, Dimension) {
        self.dims
    }

    /// The words added so far, in order.
    pub fn words(&self) -> &[WordSpec] {
        &self.words
    }

    /// The words added so far for `direction`, in order.
    pub fn words_in(&self, direction: Direction) -> impl Iterator<Item = &str> + '_ {
        self.words.iter()
            .filter(move |spec| spec.direction == direction)
            .map(|spec| spec.word.as_str())
    }

    /// Add `word`, upper-cased, to the list for `direction`.
    ///
    /// Puts the builder into an invalid state if the word is empty, not made of the letters `A` to `Z`, longer than the shorter side
    /// of the board, or already listed for `direction`. If the builder is already invalid, this does nothing.
    pub fn add_word(&mut self, direction: Direction, word: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let word = word.trim().to_uppercase();
        let max = self.dims.0.min(self.dims.1).get();

        let reason = if word.is_empty() {
            Some(BuilderInvalidReason::EmptyWord)
        } else if !word.chars().all(|letter| letter.is_ascii_alphabetic()) {
            Some(BuilderInvalidReason::NotAlphabetic)
        } else if word.chars().count() > max {
            Some(BuilderInvalidReason::WordTooLong { max })
        } else if self.words_in(direction).any(|existing| existing == word) {
            Some(BuilderInvalidReason::DuplicateWord)
        } else {
            None
        };

        match reason {
            Some(reason) => self.invalid_reasons.push(reason),
            None => self.words.push(WordSpec::new(direction, word)),
        }

        self
    }

    /// Remove `word` from the list for `direction`, if present.
    ///
    /// If the builder is in an invalid state, this does nothing.
    pub fn remove_word(&mut self, direction: Direction, word: &str) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        let word = word.trim().to_uppercase();
        self.words.retain(|spec| !(spec.direction == direction && spec.word == word));

        self
    }

    /// Remove the most recently added word.
    ///
    /// If the builder is in an invalid state or no words are present, this does nothing.
    pub fn pop_word(&mut self) -> &mut Self {
        if self.invalid_reasons.is_empty() {
            self.words.pop();
        }

        self
    }

    /// Convert the state of this builder into a [`PuzzleRequest`].
    pub fn build(&self) -> Result<PuzzleRequest, Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(self.invalid_reasons.clone());
        }

        Ok(PuzzleRequest {
            dims: self.dims,
            words: self.words.clone(),
        })
    }
}
