use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wordgrid::{Direction, Generator, GeneratorConfig, HighlightMode, Location, Puzzle, PuzzleBuilder};

/// Generate a word search board and print it.
#[derive(Parser, Debug)]
#[command(name = "generator", version)]
struct Args {
    /// Number of rows (5 to 20)
    #[arg(long, default_value_t = 15)]
    rows: usize,

    /// Number of columns (5 to 20)
    #[arg(long, default_value_t = 15)]
    cols: usize,

    /// Words read left to right
    #[arg(long, value_delimiter = ',')]
    horizontal: Vec<String>,

    /// Words read top to bottom
    #[arg(long, value_delimiter = ',')]
    vertical: Vec<String>,

    /// Words read diagonally down and to the right
    #[arg(long, value_delimiter = ',')]
    diagonal: Vec<String>,

    /// Words read bottom to top
    #[arg(long, value_delimiter = ',')]
    bottom_up: Vec<String>,

    /// Words read diagonally down and to the left
    #[arg(long, value_delimiter = ',')]
    top_down: Vec<String>,

    /// Start from the built-in 15x15 word lists
    #[arg(long, conflicts_with_all = ["rows", "cols"])]
    sample: bool,

    /// Seed for a reproducible board
    #[arg(long)]
    seed: Option<u64>,

    /// Print the solution overlay below the board
    #[arg(long)]
    solution: bool,

    /// Print only this word's cells below the board
    #[arg(long)]
    select: Option<String>,
}

fn render(puzzle: &Puzzle, mode: HighlightMode<'_>) -> String {
    let mut out = String::with_capacity(puzzle.grid.rows() * (puzzle.grid.cols() + 1));

    for row in 0..puzzle.grid.rows() {
        for col in 0..puzzle.grid.cols() {
            let location = Location(row, col);
            let highlight = puzzle.resolve_cell(location, mode);
            out.push(match highlight.is_highlighted() {
                true => highlight.display_letter(puzzle.grid.letter(location).unwrap_or('.')),
                false => '.',
            });
        }
        out.push('\n');
    }

    out
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut builder = match args.sample {
        true => PuzzleBuilder::sample(),
        false => PuzzleBuilder::with_dims(args.rows, args.cols),
    };
    for (direction, words) in [
        (Direction::Horizontal, &args.horizontal),
        (Direction::Vertical, &args.vertical),
        (Direction::Diagonal, &args.diagonal),
        (Direction::BottomUp, &args.bottom_up),
        (Direction::TopDown, &args.top_down),
    ] {
        for word in words {
            builder.add_word(direction, word);
        }
    }

    let request = match builder.build() {
        Ok(request) => request,
        Err(reasons) => {
            for reason in reasons {
                eprintln!("error: {reason}");
            }
            std::process::exit(2);
        }
    };

    let config = GeneratorConfig::default();
    let puzzle = match args.seed {
        Some(seed) => Generator::with_rng(config, ChaCha8Rng::seed_from_u64(seed))
            .map(|mut generator| request.generate(&mut generator)),
        None => Generator::with_rng(config, rand::thread_rng())
            .map(|mut generator| request.generate(&mut generator)),
    };
    let puzzle = match puzzle {
        Ok(puzzle) => puzzle,
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(2);
        }
    };

    print!("{}", puzzle.grid);
    println!();
    for placement in &puzzle.placements {
        let Location(row, col) = placement.anchor;
        println!(
            "{:<16} {:<10} row {:>2} col {:>2}{}",
            placement.word,
            placement.direction.as_ref(),
            row,
            col,
            if placement.forced { " (forced)" } else { "" },
        );
    }

    if let Some(word) = args.select.as_deref() {
        println!();
        print!("{}", render(&puzzle, HighlightMode::Word(&word.to_uppercase())));
    } else if args.solution {
        println!();
        print!("{}", render(&puzzle, HighlightMode::Solutions));
    }

    if !puzzle.is_fully_placed() {
        let (rows, cols) = puzzle.recommended_dims;
        log::warn!("{} word(s) were forced; try --rows {rows} --cols {cols}", puzzle.forced_count());
    }
}
