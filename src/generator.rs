use itertools::Itertools;
use rand::rngs::ThreadRng;
use rand::Rng;
use thiserror::Error;

use crate::grid::Grid;
use crate::highlight::{resolve_cell, CellHighlight, HighlightMode};
use crate::location::{clamp_dims, Dimension, Location, MAX_DIMENSION, MIN_DIMENSION};
use crate::placement::{Placement, WordSpec};
use crate::strategy::{place_forced, place_random};

/// Budgets bounding how hard a [`Generator`] searches before falling back to forced placement.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GeneratorConfig {
    /// Full passes over the word list, each starting again from an empty board.
    pub batch_attempts: usize,
    /// How many fresh trial copies of the board each word gets per pass.
    pub strategy_calls_per_word: usize,
    /// Random anchors tried against each trial copy.
    pub tries_per_strategy: usize,
    /// The cap applied when recommending larger dimensions for the next board.
    pub max_dimension: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            batch_attempts: 5,
            strategy_calls_per_word: 200,
            tries_per_strategy: 100,
            max_dimension: MAX_DIMENSION,
        }
    }
}

/// Reasons a [`GeneratorConfig`] is unusable.
#[derive(Copy, Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigError {
    /// One of the search budgets is zero.
    #[error("search budget `{0}` must be at least 1")]
    ZeroBudget(&'static str),
    /// `max_dimension` lies outside the supported board sizes.
    #[error("maximum dimension {0} is outside {min}..={max}", min = MIN_DIMENSION, max = MAX_DIMENSION)]
    MaxDimensionOutOfRange(usize),
}

impl GeneratorConfig {
    /// Check that every budget allows at least one attempt and that the dimension cap is a supported board size.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, budget) in [
            ("batch_attempts", self.batch_attempts),
            ("strategy_calls_per_word", self.strategy_calls_per_word),
            ("tries_per_strategy", self.tries_per_strategy),
        ] {
            if budget == 0 {
                return Err(ConfigError::ZeroBudget(name));
            }
        }

        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&self.max_dimension) {
            return Err(ConfigError::MaxDimensionOutOfRange(self.max_dimension));
        }

        Ok(())
    }
}

/// A finished board together with where every requested word ended up.
#[derive(Clone, Debug)]
pub struct Puzzle {
    /// The board, with every cell holding a letter.
    pub grid: Grid,
    /// One entry per requested word: random-phase placements in the order they were made, then forced ones.
    pub placements: Vec<Placement>,
    /// Suggested `(rows, cols)` for the next board. Larger than the current board only if some word had to be forced.
    pub recommended_dims: (Dimension, Dimension),
    /// How many full passes the random search ran before stopping.
    pub passes: usize,
}

impl Puzzle {
    /// How many words had to be force-placed.
    pub fn forced_count(&self) -> usize {
        self.placements.iter().filter(|placement| placement.forced).count()
    }

    /// Whether the random search placed every word without forcing.
    pub fn is_fully_placed(&self) -> bool {
        self.forced_count() == 0
    }

    /// Find the placement of `word`, if it was requested.
    pub fn placement_of(&self, word: &str) -> Option<&Placement> {
        self.placements.iter().find(|placement| placement.word == word)
    }

    /// Decide how the cell at `location` should be highlighted; see [`resolve_cell`].
    pub fn resolve_cell(&self, location: Location, mode: HighlightMode<'_>) -> CellHighlight {
        resolve_cell(location, &self.placements, mode)
    }
}

/// Generates [`Puzzle`]s, drawing randomness from `R`.
pub struct Generator<R: Rng = ThreadRng> {
    config: GeneratorConfig,
    rng: R,
}

impl Generator<ThreadRng> {
    /// A generator with the default budgets and the thread-local random number generator.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: rand::thread_rng(),
        }
    }
}

impl Default for Generator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Generator<R> {
    /// A generator with the given budgets and source of randomness. Seed `rng` for reproducible boards.
    ///
    /// Fails if `config` does not pass [`GeneratorConfig::validate`].
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config, rng })
    }

    /// The budgets this generator searches with.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Build a board of size `dims` hiding every word in `words`.
    ///
    /// Words are placed longest first. If a full pass leaves some word unplaced, the pass is thrown away and retried
    /// from an empty board, up to [`batch_attempts`](GeneratorConfig::batch_attempts) passes in total. Whatever is
    /// still missing after that is force-placed, possibly overwriting letters of earlier words. This never fails:
    /// the result always has exactly one [`Placement`] per entry of `words`.
    pub fn generate(&mut self, dims: (Dimension, Dimension), words: &[WordSpec]) -> Puzzle {
        // stable, so equal lengths keep their input order
        let order = (0..words.len())
            .sorted_by_key(|index| std::cmp::Reverse(words[*index].word.chars().count()))
            .collect_vec();

        let mut working = Grid::empty(dims);
        let mut placed: Vec<(usize, Placement)> = Vec::new();
        let mut passes = 0;

        while passes < self.config.batch_attempts {
            (working, placed) = self.pass(dims, words, &order);
            passes += 1;

            log::debug!("batch attempt {} placed {} of {} words", passes, placed.len(), words.len());
            if placed.len() == words.len() {
                break;
            }
        }

        let random_count = placed.len();
        let recommended_dims = match random_count < words.len() {
            true => self.grown(dims),
            false => dims,
        };

        let mut placements = placed.iter().map(|(_, placement)| placement.clone()).collect_vec();
        // forced in input order, so the rotating anchors depend on how the words were listed
        let missing = (0..words.len())
            .filter(|index| !placed.iter().any(|(placed_index, _)| placed_index == index))
            .collect_vec();
        for index in missing {
            let placement = place_forced(&words[index], &mut working, placements.len());
            log::debug!("forced {:?} {} at {:?}", placement.word, placement.direction, placement.anchor);
            placements.push(placement);
        }

        if random_count < words.len() {
            log::warn!(
                "could only place {} of {} words without forcing; consider a {}x{} board",
                random_count,
                words.len(),
                recommended_dims.0,
                recommended_dims.1,
            );
        }
        log::info!("placed {} of {} words in {} pass(es)", placements.len(), words.len(), passes);

        working.fill_random(&mut self.rng);

        Puzzle {
            grid: working,
            placements,
            recommended_dims,
            passes,
        }
    }

    /// One pass over `words` in `order`, starting from an empty board.
    ///
    /// Returns the board as the pass left it, empty cells included, and the placements it made paired with each
    /// word's index in `words`.
    pub(crate) fn pass(&mut self, dims: (Dimension, Dimension), words: &[WordSpec], order: &[usize]) -> (Grid, Vec<(usize, Placement)>) {
        let mut working = Grid::empty(dims);
        let mut placed = Vec::with_capacity(order.len());

        for index in order.iter().copied() {
            if let Some(placement) = self.place_one(&words[index], &working) {
                working.write(&placement);
                placed.push((index, placement));
            }
        }

        (working, placed)
    }

    fn place_one(&mut self, spec: &WordSpec, working: &Grid) -> Option<Placement> {
        for _ in 0..self.config.strategy_calls_per_word {
            let mut trial = working.clone();
            if let Some(placement) = place_random(spec, &mut trial, &mut self.rng, self.config.tries_per_strategy) {
                return Some(placement);
            }
        }

        None
    }

    fn grown(&self, dims: (Dimension, Dimension)) -> (Dimension, Dimension) {
        let cap = self.config.max_dimension;
        let grow = |dim: Dimension| match dim.get() < cap {
            true => (dim.get() + 1).min(cap),
            false => dim.get(),
        };

        clamp_dims(grow(dims.0), grow(dims.1))
    }
}
