//! Benchmarks for puzzle generation.
//!
//! - **`generate_<tier>`**: Generates a solved grid for each difficulty tier,
//!   including every restart the seed needs.
//! - **`carve_<tier>`**: Carves holes into a pre-generated grid.
//!
//! Each benchmark runs on three fixed seeds so results stay reproducible.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use mathgrid_core::Difficulty;
use mathgrid_generator::{PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn seeds() -> impl Iterator<Item = (usize, PuzzleSeed)> {
    SEEDS
        .into_iter()
        .map(|s| PuzzleSeed::from_str(s).unwrap())
        .enumerate()
}

fn bench_generate(c: &mut Criterion) {
    for difficulty in Difficulty::ALL {
        let generator = PuzzleGenerator::new(difficulty);
        for (i, seed) in seeds() {
            c.bench_with_input(
                BenchmarkId::new(format!("generate_{difficulty}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

fn bench_carve(c: &mut Criterion) {
    for difficulty in Difficulty::ALL {
        let generator = PuzzleGenerator::new(difficulty);
        for (i, seed) in seeds() {
            let puzzle = generator.generate_with_seed(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("carve_{difficulty}"), format!("seed_{i}")),
                &puzzle,
                |b, puzzle| b.iter(|| generator.carve(hint::black_box(puzzle))),
            );
        }
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(6));
    targets =
        bench_generate,
        bench_carve
);
criterion_main!(benches);
