//! Command-line front end for mathgrid puzzles.
//!
//! # Usage
//!
//! Print a new puzzle and its bank:
//!
//! ```sh
//! mathgrid generate --difficulty hard
//! ```
//!
//! Reprint the same puzzle with its solution:
//!
//! ```sh
//! mathgrid generate --difficulty hard --seed <SEED> --show-solution
//! ```
//!
//! Play in the terminal; type `help` for the commands:
//!
//! ```sh
//! mathgrid play --difficulty easy
//! ```
//!
//! Keep the score between runs in a session file:
//!
//! ```sh
//! mathgrid play --session ~/.mathgrid.json
//! ```
//!
//! Measure generation over many seeds in parallel:
//!
//! ```sh
//! mathgrid stats --difficulty expert --samples 1000
//! ```
//!
//! Set `RUST_LOG=debug` to see generator and carver logs.

use std::{io, path::PathBuf, process};

use clap::{Parser, Subcommand};
use mathgrid_core::Difficulty;
use mathgrid_generator::{PuzzleGenerator, PuzzleSeed};

use crate::{error::CliError, stats::Summary};

mod command;
mod error;
mod play;
mod render;
mod stats;
mod store;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Generate a puzzle and print it.
    Generate {
        /// Difficulty tier: easy, medium, hard, or expert.
        #[arg(short, long, value_name = "TIER", default_value = "easy")]
        difficulty: Difficulty,

        /// Seed as 64 hex digits; a random seed is used if omitted.
        #[arg(short, long, value_name = "SEED")]
        seed: Option<PuzzleSeed>,

        /// Also print the solved grid and its equations.
        #[arg(long)]
        show_solution: bool,
    },
    /// Play puzzles interactively on stdin.
    Play {
        /// Difficulty tier to start with [default: easy, or the saved tier].
        #[arg(short, long, value_name = "TIER")]
        difficulty: Option<Difficulty>,

        /// Seed for the first puzzle.
        #[arg(short, long, value_name = "SEED")]
        seed: Option<PuzzleSeed>,

        /// Load the score from FILE and save it back on exit.
        #[arg(long, value_name = "FILE")]
        session: Option<PathBuf>,
    },
    /// Generate many puzzles in parallel and report statistics.
    Stats {
        /// Difficulty tier to sample.
        #[arg(short, long, value_name = "TIER", default_value = "easy")]
        difficulty: Difficulty,

        /// Number of puzzles to generate.
        #[arg(short = 'n', long, value_name = "COUNT", default_value_t = 100)]
        samples: usize,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let result = match args.command {
        Cmd::Generate {
            difficulty,
            seed,
            show_solution,
        } => generate(difficulty, seed, show_solution),
        Cmd::Play {
            difficulty,
            seed,
            session,
        } => play(difficulty, seed, session),
        Cmd::Stats {
            difficulty,
            samples,
        } => {
            if samples == 0 {
                eprintln!("--samples must be at least 1.");
                process::exit(2);
            }
            print_stats(difficulty, samples);
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn generate(
    difficulty: Difficulty,
    seed: Option<PuzzleSeed>,
    show_solution: bool,
) -> Result<(), CliError> {
    let generator = PuzzleGenerator::new(difficulty);
    let puzzle = generator.generate_with_seed(seed.unwrap_or_else(PuzzleSeed::random))?;
    let carved = generator.carve(&puzzle);

    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Difficulty:");
    println!("  {difficulty}");
    println!();
    println!("Puzzle:");
    println!("{}", render::board(&carved.grid, None));
    println!();
    println!("Bank:");
    println!("  {}", render::bank(&carved.bank));

    if show_solution {
        println!();
        println!("Solution:");
        println!("{}", render::board(&puzzle.solution.cells, None));
        println!();
        println!("Equations:");
        for equation in &puzzle.solution.equations {
            println!("  {equation}");
        }
    }
    Ok(())
}

fn play(
    difficulty: Option<Difficulty>,
    seed: Option<PuzzleSeed>,
    path: Option<PathBuf>,
) -> Result<(), CliError> {
    let saved = match &path {
        Some(path) => store::load(path)?,
        None => None,
    };
    let mut session = saved.unwrap_or_default();
    if let Some(difficulty) = difficulty {
        session = session.with_difficulty(difficulty);
    }

    let stdin = io::stdin().lock();
    let mut stdout = io::stdout().lock();
    let session = play::run(session, seed, stdin, &mut stdout)?;
    if let Some(path) = &path {
        store::save(path, &session)?;
    }
    Ok(())
}

fn print_stats(difficulty: Difficulty, samples: usize) {
    let generator = PuzzleGenerator::new(difficulty);
    let results = stats::sample(&generator, samples);
    let Some(summary) = Summary::from_samples(&results) else {
        return;
    };

    println!("Difficulty: {difficulty}");
    println!("Samples: {}", summary.samples);
    println!("Failures: {}", summary.failures);
    println!(
        "Holes: min {}, max {}, mean {:.2}",
        summary.min_holes, summary.max_holes, summary.mean_holes
    );
    println!(
        "Time: mean {:?}, max {:?}",
        summary.mean_elapsed, summary.max_elapsed
    );
}
