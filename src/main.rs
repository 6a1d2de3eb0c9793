//! Boggle Solver
//!
//! Loads a word list, builds the prefix tree once, and prints every word that
//! can be traced on the given board.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use rustc_hash::FxHashSet;

use boggle::grid::{format_board, Board};
use boggle::{dictionary, Solver, SolverConfig, MIN_WORD_LENGTH};

/// Finds all dictionary words on a Boggle board.
#[derive(Parser)]
#[command(name = "boggle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list with one word per line.
    #[arg(short, long, value_name = "FILE")]
    dictionary: PathBuf,

    /// Board width; defaults to the square root of the letter count.
    #[arg(long)]
    width: Option<i64>,

    /// Board height; defaults to the square root of the letter count.
    #[arg(long)]
    height: Option<i64>,

    /// Shortest word to report.
    #[arg(long, default_value_t = MIN_WORD_LENGTH)]
    min_length: usize,

    /// Search starting cells on all cores.
    #[arg(long)]
    parallel: bool,

    /// Log debug output (overrides RUST_LOG).
    #[arg(short, long)]
    verbose: bool,

    /// Board letters, row by row.
    letters: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    println!("{}", run(&cli)?);
    Ok(())
}

/// Sets up env_logger, defaulting to warnings unless `RUST_LOG` says otherwise.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

/// Loads the dictionary, solves the board and returns the printable report.
///
/// Board letters are upper-cased to match the normalized dictionary.
fn run(cli: &Cli) -> Result<String> {
    let letters = cli.letters.to_uppercase();
    let (width, height) = board_dimensions(cli.width, cli.height, letters.chars().count())?;
    let board = Board::new(width, height, &letters)?;

    let config = SolverConfig {
        min_word_length: cli.min_length,
    };
    let solver = build_solver(&cli.dictionary, config)?;

    let started = Instant::now();
    let words = if cli.parallel {
        solver.solve_parallel(&board)
    } else {
        solver.solve(&board)
    };
    info!("solved board in {:?}", started.elapsed());

    Ok(format_report(&board, &words))
}

/// Fills in missing dimensions, assuming a square board.
fn board_dimensions(
    width: Option<i64>,
    height: Option<i64>,
    letter_count: usize,
) -> Result<(i64, i64)> {
    match (width, height) {
        (Some(width), Some(height)) => Ok((width, height)),
        (Some(width), None) => Ok((width, width)),
        (None, Some(height)) => Ok((height, height)),
        (None, None) => {
            let side = (letter_count as f64).sqrt().round() as i64;
            if side * side != letter_count as i64 {
                bail!("{letter_count} letters do not form a square board; pass --width and --height");
            }
            Ok((side, side))
        }
    }
}

/// Loads the word list and builds the solver, logging how long each took.
fn build_solver(path: &Path, config: SolverConfig) -> Result<Solver> {
    let started = Instant::now();
    let words = dictionary::load(path)
        .with_context(|| format!("could not load dictionary {}", path.display()))?;
    info!("loaded {} words in {:?}", words.len(), started.elapsed());

    let started = Instant::now();
    let solver = Solver::with_config(&words, config);
    info!("built trie in {:?}", started.elapsed());

    Ok(solver)
}

/// Formats the board followed by the words found, longest first.
fn format_report(board: &Board, words: &FxHashSet<String>) -> String {
    let mut sorted: Vec<&String> = words.iter().collect();
    sorted.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });

    let mut output = format_board(board);
    output.push_str("---\n");
    for word in &sorted {
        output.push_str(word);
        output.push('\n');
    }
    output.push_str(&format!("Found {} words", sorted.len()));
    output
}
