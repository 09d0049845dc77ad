use mathgrid_core::{
    Cell, Difficulty, DifficultyParams, Equation, Grid, Operator, ParamsError, SolvedGrid,
    evaluate_exact,
};
use rand::{RngExt as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;

use crate::{CarvedPuzzle, Layout, PuzzleSeed, Slot, carve};

/// Default number of whole-grid attempts before generation gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Number of random draws tried for a slot with free operands.
const SLOT_RETRIES: usize = 64;

/// A generated puzzle: the solved grid and how it was produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPuzzle {
    /// The seed the puzzle was generated from.
    pub seed: PuzzleSeed,
    /// The parameters the puzzle was generated with.
    pub params: DifficultyParams,
    /// The fully solved grid.
    pub solution: SolvedGrid,
}

/// Errors returned by [`PuzzleGenerator`].
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GenerateError {
    /// The parameters cannot describe a puzzle.
    #[display("invalid difficulty parameters: {_0}")]
    InvalidParameters(#[from] ParamsError),
    /// No consistent grid was found within the attempt budget.
    ///
    /// This is not fatal; generating again with a different seed may succeed.
    #[display("could not produce a puzzle after {attempts} attempts")]
    Exhausted {
        /// Number of attempts made.
        attempts: usize,
    },
}

/// Generates solved arithmetic crossword grids.
///
/// Equations are filled slot by slot in [`Layout`] order. Cells written by an
/// earlier slot are fixed for later ones: a slot whose operands are all
/// fixed tries every operator combination, and a slot with free operands
/// draws random operands and operators. If a slot cannot be satisfied, the
/// whole attempt is discarded and generation restarts, up to the attempt
/// budget.
///
/// # Examples
///
/// ```
/// use mathgrid_core::Difficulty;
/// use mathgrid_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new(Difficulty::Easy);
/// let puzzle = generator.generate()?;
/// assert_eq!(puzzle.solution.verify(), Ok(()));
///
/// let carved = generator.carve(&puzzle);
/// assert!(!carved.bank.is_empty());
/// # Ok::<(), mathgrid_generator::GenerateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PuzzleGenerator {
    params: DifficultyParams,
    max_attempts: usize,
}

impl PuzzleGenerator {
    /// Creates a generator for a difficulty tier.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_params(difficulty.params())
    }

    /// Creates a generator with explicit parameters.
    ///
    /// The parameters are validated when generating.
    #[must_use]
    pub fn with_params(params: DifficultyParams) -> Self {
        Self {
            params,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the number of whole-grid attempts before giving up.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns the generation parameters.
    #[must_use]
    pub fn params(&self) -> &DifficultyParams {
        &self.params
    }

    /// Generates a puzzle from a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`PuzzleGenerator::generate_with_seed`].
    pub fn generate(&self) -> Result<GeneratedPuzzle, GenerateError> {
        self.generate_with_seed(PuzzleSeed::random())
    }

    /// Generates a puzzle deterministically from `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::InvalidParameters`] if the parameters are
    /// rejected, or [`GenerateError::Exhausted`] if no grid was found within
    /// the attempt budget.
    pub fn generate_with_seed(&self, seed: PuzzleSeed) -> Result<GeneratedPuzzle, GenerateError> {
        self.params.validate()?;
        let layout = Layout::new(self.params.operand_count, self.params.totals);
        let mut rng = seed.rng("generate", &self.params);

        for attempt in 1..=self.max_attempts {
            if let Some(solution) = self.try_generate(&layout, &mut rng) {
                log::debug!("generated {}x{} grid on attempt {attempt}", layout.size(), layout.size());
                return Ok(GeneratedPuzzle {
                    seed,
                    params: self.params.clone(),
                    solution,
                });
            }
        }

        log::warn!(
            "gave up generating after {} attempts (seed {seed})",
            self.max_attempts
        );
        Err(GenerateError::Exhausted {
            attempts: self.max_attempts,
        })
    }

    /// Carves holes into a generated puzzle.
    ///
    /// The carving stream is derived from the puzzle seed, so the same puzzle
    /// always yields the same holes.
    #[must_use]
    pub fn carve(&self, puzzle: &GeneratedPuzzle) -> CarvedPuzzle {
        let mut rng = puzzle.seed.rng("carve", &puzzle.params);
        carve(&puzzle.solution, &puzzle.params, &mut rng)
    }

    fn try_generate(&self, layout: &Layout, rng: &mut Pcg64) -> Option<SolvedGrid> {
        let mut cells = Grid::new(layout.size(), Cell::Blank);
        let mut equations = Vec::with_capacity(layout.slots().len());

        for (index, &slot) in layout.slots().iter().enumerate() {
            let Some(equation) = self.fill_slot(layout, slot, &cells, rng) else {
                log::trace!("slot {index} at {} has no solution, restarting", slot.start);
                return None;
            };
            let positions = equation
                .positions(layout.size())
                .expect("layout slots fit the grid");
            for (pos, token) in positions.into_iter().zip(equation.tokens()) {
                debug_assert!(
                    cells[pos].is_blank() || cells[pos].token() == Some(token),
                    "slot {index} overwrites {pos}"
                );
                cells[pos] = token.into();
            }
            equations.push(equation);
        }

        Some(SolvedGrid { cells, equations })
    }

    fn fill_slot(
        &self,
        layout: &Layout,
        slot: Slot,
        cells: &Grid<Cell>,
        rng: &mut Pcg64,
    ) -> Option<Equation> {
        let (operand_positions, result_position) = layout.slot_cells(slot);
        let fixed: Vec<Option<i64>> = operand_positions
            .iter()
            .map(|&pos| cells[pos].as_number())
            .collect();
        let target = cells[result_position].as_number();

        let (first, steps, result) = if fixed.iter().all(Option::is_some) {
            let operands: Vec<i64> = fixed.into_iter().flatten().collect();
            self.search_operators(&operands, target, rng)?
        } else {
            self.search_random(&fixed, target, rng)?
        };
        Some(Equation::from_steps(
            first,
            &steps,
            result,
            slot.start,
            slot.direction,
        ))
    }

    /// Tries every operator combination in random order over fixed operands.
    fn search_operators(
        &self,
        operands: &[i64],
        target: Option<i64>,
        rng: &mut Pcg64,
    ) -> Option<(i64, Vec<(Operator, i64)>, i64)> {
        let operators = &self.params.operators;
        let gaps = operands.len() - 1;
        let gaps_u32 = u32::try_from(gaps).ok()?;
        let combinations = operators.len().checked_pow(gaps_u32)?;

        let mut order: Vec<usize> = (0..combinations).collect();
        order.shuffle(rng);

        order.into_iter().find_map(|mut code| {
            let steps: Vec<(Operator, i64)> = operands[1..]
                .iter()
                .map(|&operand| {
                    let op = operators[code % operators.len()];
                    code /= operators.len();
                    (op, operand)
                })
                .collect();
            let result = self.accept(operands[0], &steps, target)?;
            Some((operands[0], steps, result))
        })
    }

    /// Draws random operators and free operands, keeping fixed operands.
    fn search_random(
        &self,
        fixed: &[Option<i64>],
        target: Option<i64>,
        rng: &mut Pcg64,
    ) -> Option<(i64, Vec<(Operator, i64)>, i64)> {
        let draw = |rng: &mut Pcg64, fixed: Option<i64>| {
            fixed.unwrap_or_else(|| rng.random_range(self.params.operand_range.clone()))
        };

        for _ in 0..SLOT_RETRIES {
            let first = draw(rng, fixed[0]);
            let steps: Vec<(Operator, i64)> = fixed[1..]
                .iter()
                .map(|&operand| {
                    let op = self.params.operators[rng.random_range(0..self.params.operators.len())];
                    (op, draw(rng, operand))
                })
                .collect();
            if let Some(result) = self.accept(first, &steps, target) {
                return Some((first, steps, result));
            }
        }
        None
    }

    /// Returns the exact result if it is displayable and matches `target`.
    fn accept(&self, first: i64, steps: &[(Operator, i64)], target: Option<i64>) -> Option<i64> {
        let result = evaluate_exact(first, steps)?;
        let in_range = (0..=self.params.max_result).contains(&result);
        (in_range && target.is_none_or(|t| t == result)).then_some(result)
    }
}
