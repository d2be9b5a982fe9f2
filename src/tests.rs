#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::num::NonZero;

    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use strum::VariantArray;

    use crate::builder::{BuilderInvalidReason, PuzzleBuilder};
    use crate::direction::Direction;
    use crate::generator::{ConfigError, Generator, GeneratorConfig, Puzzle};
    use crate::grid::Grid;
    use crate::highlight::{resolve_cell, CellHighlight, HighlightMode};
    use crate::location::{clamp_dims, Location};
    use crate::placement::{Placement, WordSpec};

    fn seeded(seed: u64) -> Generator<ChaCha8Rng> {
        Generator::with_rng(GeneratorConfig::default(), ChaCha8Rng::seed_from_u64(seed)).unwrap()
    }

    fn every_location(puzzle: &Puzzle) -> impl Iterator<Item = Location> {
        (0..puzzle.grid.rows()).cartesian_product(0..puzzle.grid.cols()).map(|(row, col)| Location(row, col))
    }

    #[test]
    fn empty_grid_display() {
        let grid = Grid::empty((NonZero::new(3).unwrap(), NonZero::new(5).unwrap()));
        assert_eq!(format!("{}", grid), ".....
.....
.....
");
        assert!(!grid.is_filled());
    }

    #[test]
    fn fill_random_keeps_letters() {
        let mut grid = Grid::empty(clamp_dims(5, 5));
        grid.set(Location(2, 3), 'Q');
        grid.fill_random(&mut ChaCha8Rng::seed_from_u64(0));

        assert!(grid.is_filled());
        assert_eq!(grid.letter(Location(2, 3)), Some('Q'));
        assert!(grid.cells.iter().all(|cell| cell.letter().is_some_and(|letter| letter.is_ascii_uppercase())));
    }

    #[test]
    fn single_horizontal_word() {
        let puzzle = seeded(1).generate(clamp_dims(5, 5), &[WordSpec::new(Direction::Horizontal, "CAT")]);

        assert_eq!(puzzle.placements.len(), 1);
        let placement = &puzzle.placements[0];
        assert_eq!(placement.word, "CAT");
        assert_eq!(placement.direction, Direction::Horizontal);
        assert_eq!(placement.length, 3);
        assert!(!placement.forced);
        assert!(placement.anchor.1 <= 2);

        let Location(row, col) = placement.anchor;
        for (offset, letter) in "CAT".chars().enumerate() {
            assert_eq!(puzzle.grid.letter(Location(row, col + offset)), Some(letter));
        }
        assert!(puzzle.grid.is_filled());
        assert_eq!(puzzle.recommended_dims, clamp_dims(5, 5));
    }

    #[test]
    fn unplaceable_word_is_forced() {
        let puzzle = seeded(2).generate(clamp_dims(5, 5), &[WordSpec::new(Direction::Diagonal, "SIXSIX")]);

        assert_eq!(puzzle.placements.len(), 1);
        let placement = &puzzle.placements[0];
        assert!(placement.forced);
        assert_eq!(placement.anchor, Location(0, 0));
        assert_eq!(puzzle.grid.read(placement), "SIXSI");
        assert_eq!(puzzle.forced_count(), 1);
        assert!(!puzzle.is_fully_placed());
        assert_eq!(puzzle.recommended_dims, clamp_dims(6, 6));
    }

    #[test]
    fn recommended_dims_are_capped() {
        let puzzle = seeded(2).generate(clamp_dims(20, 12), &[WordSpec::new(Direction::Vertical, "ABCDEFGHIJKLMNOPQRSTUV")]);

        assert!(puzzle.placements[0].forced);
        assert_eq!(puzzle.recommended_dims, clamp_dims(20, 13));
    }

    #[test]
    fn no_words() {
        let puzzle = seeded(3).generate(clamp_dims(5, 5), &[]);

        assert!(puzzle.placements.is_empty());
        assert!(puzzle.grid.is_filled());
        for location in every_location(&puzzle).collect_vec() {
            for mode in [HighlightMode::Off, HighlightMode::Solutions, HighlightMode::Word("CAT")] {
                assert_eq!(puzzle.resolve_cell(location, mode), CellHighlight::Plain);
            }
        }
    }

    #[test]
    fn every_direction_reads_back() {
        for direction in Direction::VARIANTS {
            let puzzle = seeded(4).generate(clamp_dims(7, 7), &[WordSpec::new(*direction, "RUST")]);
            let placement = &puzzle.placements[0];

            assert!(!placement.forced, "{direction}");
            assert_eq!(puzzle.grid.read(placement), "RUST", "{direction}");
        }
    }

    #[test]
    fn sample_board_properties() {
        let request = PuzzleBuilder::sample().build().unwrap();

        for seed in 0..4 {
            let puzzle = request.generate(&mut seeded(seed));
            let placements = &puzzle.placements;

            // exactly one placement per requested word
            assert_eq!(
                placements.iter().map(|p| (p.word.as_str(), p.direction)).sorted().collect_vec(),
                request.words.iter().map(|spec| (spec.word.as_str(), spec.direction)).sorted().collect_vec(),
            );
            assert!(puzzle.grid.is_filled());

            // random-phase placements first, longest first, forced ones after
            let random = placements.iter().take_while(|p| !p.forced).collect_vec();
            assert!(placements[random.len()..].iter().all(|p| p.forced));
            assert!(random.iter().tuple_windows().all(|(a, b)| a.length >= b.length));

            let forced_cells = placements.iter()
                .filter(|p| p.forced)
                .flat_map(|p| p.cells(puzzle.grid.dims()).map(|(location, _)| location))
                .collect_vec();

            // random-phase placements agree wherever they cross, and survive on the grid unless forced over
            let mut claimed: HashMap<Location, char> = HashMap::new();
            for placement in &random {
                for (location, letter) in placement.cells(puzzle.grid.dims()) {
                    assert_eq!(*claimed.entry(location).or_insert(letter), letter);
                    if !forced_cells.contains(&location) {
                        assert_eq!(puzzle.grid.letter(location), Some(letter));
                    }
                }
            }
        }
    }

    #[test]
    fn same_seed_same_board() {
        let request = PuzzleBuilder::sample().build().unwrap();
        let a = request.generate(&mut seeded(9));
        let b = request.generate(&mut seeded(9));

        assert_eq!(a.grid, b.grid);
        assert_eq!(a.placements, b.placements);
    }

    #[test]
    fn repeated_words_each_get_a_placement() {
        let words = [
            WordSpec::new(Direction::Horizontal, "ECHO"),
            WordSpec::new(Direction::Vertical, "ECHO"),
            WordSpec::new(Direction::Horizontal, "ECHO"),
        ];
        let puzzle = seeded(5).generate(clamp_dims(8, 8), &words);

        assert_eq!(puzzle.placements.len(), 3);
        assert_eq!(puzzle.placements.iter().filter(|p| p.direction == Direction::Horizontal).count(), 2);
    }

    #[test]
    fn resolve_single_word() {
        let puzzle = seeded(6).generate(clamp_dims(6, 6), &[
            WordSpec::new(Direction::BottomUp, "WOLF"),
            WordSpec::new(Direction::TopDown, "BEAR"),
        ]);
        let wolf = puzzle.placement_of("WOLF").unwrap().clone();

        for location in every_location(&puzzle).collect_vec() {
            let highlight = puzzle.resolve_cell(location, HighlightMode::Word("WOLF"));
            match wolf.covers(location) {
                true => {
                    assert_eq!(highlight, CellHighlight::Selected { direction: Direction::BottomUp });
                    assert!(highlight.is_selected());
                    assert_eq!(highlight.style_class(), Some("bottomup-highlighted"));
                }
                false => assert!(!highlight.is_highlighted()),
            }

            assert_eq!(puzzle.resolve_cell(location, HighlightMode::Word("MOOSE")), CellHighlight::Plain);
            assert_eq!(puzzle.resolve_cell(location, HighlightMode::Off), CellHighlight::Plain);
        }

        assert_eq!(every_location(&puzzle).filter(|l| wolf.covers(*l)).count(), 4);
    }

    #[test]
    fn solutions_show_each_words_own_letter() {
        let dims = clamp_dims(5, 5);
        let horizontal = Placement {
            word: "ABC".into(),
            direction: Direction::Horizontal,
            anchor: Location(0, 0),
            length: 3,
            forced: false,
        };
        let vertical = Placement {
            word: "XYZ".into(),
            direction: Direction::Vertical,
            anchor: Location(0, 0),
            length: 3,
            forced: true,
        };
        let mut grid = Grid::empty(dims);
        grid.write(&horizontal);
        grid.write(&vertical);
        let placements = vec![horizontal, vertical];

        // the forced word overwrote the shared corner, the overlay still shows the first word's letter
        assert_eq!(grid.letter(Location(0, 0)), Some('X'));
        let corner = resolve_cell(Location(0, 0), &placements, HighlightMode::Solutions);
        assert_eq!(corner, CellHighlight::Solution { direction: Direction::Horizontal, letter: 'A' });
        assert_eq!(corner.display_letter('X'), 'A');

        let below = resolve_cell(Location(2, 0), &placements, HighlightMode::Solutions);
        assert_eq!(below, CellHighlight::Solution { direction: Direction::Vertical, letter: 'Z' });
        assert_eq!(below.style_class(), Some("vertical-highlighted"));

        let plain = resolve_cell(Location(4, 4), &placements, HighlightMode::Solutions);
        assert_eq!(plain, CellHighlight::Plain);
        assert_eq!(plain.display_letter('K'), 'K');

        // idempotent and side-effect free
        let before = placements.clone();
        assert_eq!(resolve_cell(Location(0, 0), &placements, HighlightMode::Solutions), corner);
        assert_eq!(placements, before);
    }

    #[test]
    fn builder_validation() {
        let mut builder = PuzzleBuilder::with_dims(5, 8);
        builder.add_word(Direction::Horizontal, "cat")
            .add_word(Direction::Vertical, "cat")
            .add_word(Direction::Diagonal, "dog");
        assert_eq!(builder.words_in(Direction::Horizontal).collect_vec(), ["CAT"]);
        assert_eq!(builder.build().unwrap().words.len(), 3);

        builder.remove_word(Direction::Vertical, "CAT").pop_word();
        assert_eq!(builder.build().unwrap().words, [WordSpec::new(Direction::Horizontal, "CAT")]);

        let mut too_long = builder.clone();
        too_long.add_word(Direction::Vertical, "ZEBRAS").add_word(Direction::Vertical, "OK");
        assert_eq!(too_long.build(), Err(vec![BuilderInvalidReason::WordTooLong { max: 5 }]));
        assert_eq!(too_long.words().len(), 1);

        let mut duplicate = builder.clone();
        duplicate.add_word(Direction::Horizontal, "Cat");
        assert_eq!(duplicate.build(), Err(vec![BuilderInvalidReason::DuplicateWord]));

        let mut junk = builder.clone();
        junk.add_word(Direction::TopDown, "A-1");
        assert_eq!(junk.build(), Err(vec![BuilderInvalidReason::NotAlphabetic]));

        let mut accented = builder.clone();
        accented.add_word(Direction::Horizontal, "ñandú");
        assert_eq!(accented.build(), Err(vec![BuilderInvalidReason::NotAlphabetic]));

        let mut empty = builder.clone();
        empty.add_word(Direction::TopDown, "  ");
        assert_eq!(empty.build(), Err(vec![BuilderInvalidReason::EmptyWord]));
    }

    #[test]
    fn builder_clamps_dims() {
        assert_eq!(PuzzleBuilder::with_dims(2, 40).dims(), clamp_dims(5, 20));
        assert_eq!(PuzzleBuilder::sample().build().unwrap().words.len(), 25);
    }

    #[test]
    fn config_validation() {
        assert_eq!(GeneratorConfig::default().validate(), Ok(()));

        let config = GeneratorConfig { tries_per_strategy: 0, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::ZeroBudget("tries_per_strategy")));

        let config = GeneratorConfig { max_dimension: 30, ..Default::default() };
        assert_eq!(config.validate(), Err(ConfigError::MaxDimensionOutOfRange(30)));

        let config = GeneratorConfig { strategy_calls_per_word: 0, ..Default::default() };
        assert_eq!(
            Generator::with_rng(config, ChaCha8Rng::seed_from_u64(0)).err(),
            Some(ConfigError::ZeroBudget("strategy_calls_per_word")),
        );
        let config = GeneratorConfig { batch_attempts: 0, ..Default::default() };
        assert!(Generator::with_rng(config, ChaCha8Rng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn passes_follow_config() {
        let dims = clamp_dims(5, 5);
        let words = [
            WordSpec::new(Direction::Diagonal, "SIXSIX"),
            WordSpec::new(Direction::Horizontal, "CAT"),
        ];

        let puzzle = seeded(7).generate(dims, &words);
        assert_eq!(puzzle.passes, 5);
        assert_eq!(puzzle.forced_count(), 1);

        let config = GeneratorConfig { batch_attempts: 1, ..Default::default() };
        let mut generator = Generator::with_rng(config, ChaCha8Rng::seed_from_u64(7)).unwrap();
        let puzzle = generator.generate(dims, &words);
        assert_eq!(puzzle.passes, 1);
        assert_eq!(puzzle.placements.len(), 2);

        // nothing left to retry once every word fits
        let puzzle = seeded(7).generate(dims, &words[1..]);
        assert_eq!(puzzle.passes, 1);
    }

    #[test]
    fn each_pass_starts_from_an_empty_board() {
        let dims = clamp_dims(6, 6);
        let words = [
            WordSpec::new(Direction::Diagonal, "SEVENTH"),
            WordSpec::new(Direction::Vertical, "MOTH"),
            WordSpec::new(Direction::BottomUp, "OWL"),
            WordSpec::new(Direction::TopDown, "BEE"),
        ];
        let order = [0, 1, 2, 3];
        let mut generator = seeded(8);

        for _ in 0..3 {
            let (grid, placed) = generator.pass(dims, &words, &order);
            assert_eq!(placed.iter().map(|(index, _)| *index).collect_vec(), [1, 2, 3]);

            let mut expected = Grid::empty(dims);
            for (_, placement) in &placed {
                expected.write(placement);
            }
            // only this pass's letters are on the board
            assert_eq!(grid, expected);
        }
    }

    #[test]
    fn forced_words_follow_input_order() {
        let words = [
            WordSpec::new(Direction::Horizontal, "ABCDEFG"),
            WordSpec::new(Direction::Horizontal, "ABCDEFGHI"),
        ];
        let puzzle = seeded(10).generate(clamp_dims(5, 5), &words);

        assert_eq!(puzzle.placements[0].word, "ABCDEFG");
        assert_eq!(puzzle.placements[0].anchor, Location(0, 0));
        assert_eq!(puzzle.placements[1].word, "ABCDEFGHI");
        assert_eq!(puzzle.placements[1].anchor, Location(1, 0));
        assert_eq!(puzzle.grid.read(&puzzle.placements[1]), "ABCDE");
    }

    #[test]
    fn selection_modes() {
        assert_eq!(HighlightMode::from_selection(Some("CAT"), true), HighlightMode::Word("CAT"));
        assert_eq!(HighlightMode::from_selection(Some(""), true), HighlightMode::Solutions);
        assert_eq!(HighlightMode::from_selection(Some(""), false), HighlightMode::Off);
        assert_eq!(HighlightMode::from_selection(None, false), HighlightMode::Off);
    }
}
