//! Puzzle generation for arithmetic crosswords.
//!
//! [`PuzzleGenerator`] builds a fully solved grid of crossing equations for a
//! difficulty tier, and [`carve`] turns a solved grid into a playable grid and
//! the bank of removed values.
//!
//! Both steps are driven by a [`PuzzleSeed`], so a seed reproduces the same
//! puzzle and the same holes.
//!
//! # Examples
//!
//! ```
//! use mathgrid_core::Difficulty;
//! use mathgrid_generator::PuzzleGenerator;
//!
//! let generator = PuzzleGenerator::new(Difficulty::Medium);
//! let puzzle = generator.generate()?;
//! let carved = generator.carve(&puzzle);
//!
//! let holes = carved.grid.iter().filter(|(_, cell)| cell.is_hole()).count();
//! assert_eq!(holes, carved.bank.len());
//! # Ok::<(), mathgrid_generator::GenerateError>(())
//! ```

pub use self::{
    carver::{CarvedPuzzle, carve},
    generator::{DEFAULT_MAX_ATTEMPTS, GenerateError, GeneratedPuzzle, PuzzleGenerator},
    layout::{Layout, Slot},
    seed::{ParseSeedError, PuzzleSeed},
};

mod carver;
mod generator;
mod layout;
mod seed;
