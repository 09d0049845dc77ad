use std::time::{Duration, Instant};

use mathgrid_generator::{GenerateError, PuzzleGenerator};
use rayon::prelude::*;

/// The outcome of one sampled generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Number of holes carved, or `None` if generation gave up.
    pub holes: Option<usize>,
    /// Wall time spent generating and carving.
    pub elapsed: Duration,
}

/// Aggregated statistics over many samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub samples: usize,
    pub failures: usize,
    pub min_holes: usize,
    pub max_holes: usize,
    pub mean_holes: f64,
    pub mean_elapsed: Duration,
    pub max_elapsed: Duration,
}

/// Generates `samples` puzzles in parallel, each from a fresh seed.
pub fn sample(generator: &PuzzleGenerator, samples: usize) -> Vec<Sample> {
    (0..samples)
        .into_par_iter()
        .map(|_| {
            let start = Instant::now();
            let holes = match generator.generate() {
                Ok(puzzle) => Some(generator.carve(&puzzle).bank.len()),
                Err(GenerateError::Exhausted { attempts }) => {
                    log::debug!("sample gave up after {attempts} attempts");
                    None
                }
                Err(err) => {
                    log::warn!("sample failed: {err}");
                    None
                }
            };
            Sample {
                holes,
                elapsed: start.elapsed(),
            }
        })
        .collect()
}

impl Summary {
    /// Summarizes samples; returns `None` for an empty slice.
    #[expect(clippy::cast_precision_loss)]
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let holes: Vec<usize> = samples.iter().filter_map(|s| s.holes).collect();
        let total_elapsed: Duration = samples.iter().map(|s| s.elapsed).sum();
        let count = u32::try_from(samples.len()).unwrap_or(u32::MAX);

        Some(Self {
            samples: samples.len(),
            failures: samples.len() - holes.len(),
            min_holes: holes.iter().copied().min().unwrap_or(0),
            max_holes: holes.iter().copied().max().unwrap_or(0),
            mean_holes: if holes.is_empty() {
                0.0
            } else {
                holes.iter().sum::<usize>() as f64 / holes.len() as f64
            },
            mean_elapsed: total_elapsed / count,
            max_elapsed: samples.iter().map(|s| s.elapsed).max().unwrap_or_default(),
        })
    }
}
