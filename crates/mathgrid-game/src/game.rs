use mathgrid_core::{Bank, CellState, Difficulty, DifficultyParams, Grid, Position, SolvedGrid};
use mathgrid_generator::{CarvedPuzzle, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};

use crate::{GameError, SolutionCheck, check_solution};

/// An arithmetic crossword in play.
///
/// Holds the playable grid, the bank of values still to place, and the
/// solved grid the equations are read from. Every value removed by carving
/// is always in exactly one place: in the bank or in a filled hole.
///
/// # Example
///
/// ```
/// use mathgrid_core::Difficulty;
/// use mathgrid_game::Game;
/// use mathgrid_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new(Difficulty::Easy);
/// let puzzle = generator.generate()?;
/// let mut game = Game::from_puzzle(&generator, &puzzle);
///
/// let hole = game.holes().next().unwrap();
/// let value = game.bank().to_vec()[0];
/// game.place(hole, value)?;
/// assert_eq!(game.cell(hole), Some(&mathgrid_core::CellState::Filled(value)));
///
/// game.clear(hole)?;
/// assert!(game.bank().contains(value));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    grid: Grid<CellState>,
    bank: Bank,
    solution: SolvedGrid,
    params: DifficultyParams,
    seed: PuzzleSeed,
}

impl Game {
    /// Creates a game from a generated puzzle and its carved grid.
    #[must_use]
    pub fn new(puzzle: &GeneratedPuzzle, carved: CarvedPuzzle) -> Self {
        let CarvedPuzzle { grid, bank } = carved;
        Self {
            grid,
            bank,
            solution: puzzle.solution.clone(),
            params: puzzle.params.clone(),
            seed: puzzle.seed,
        }
    }

    /// Carves `puzzle` with `generator` and starts a game on it.
    #[must_use]
    pub fn from_puzzle(generator: &PuzzleGenerator, puzzle: &GeneratedPuzzle) -> Self {
        Self::new(puzzle, generator.carve(puzzle))
    }

    /// Returns the state of the cell at `pos`, or `None` outside the grid.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&CellState> {
        self.grid.get(pos)
    }

    /// Returns the playable grid.
    #[must_use]
    pub fn grid(&self) -> &Grid<CellState> {
        &self.grid
    }

    /// Returns the values not yet placed.
    #[must_use]
    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    /// Returns the solved grid.
    #[must_use]
    pub fn solution(&self) -> &SolvedGrid {
        &self.solution
    }

    /// Returns the seed the puzzle was generated from.
    #[must_use]
    pub fn seed(&self) -> PuzzleSeed {
        self.seed
    }

    /// Returns the parameters the puzzle was generated with.
    #[must_use]
    pub fn params(&self) -> &DifficultyParams {
        &self.params
    }

    /// Returns the tier the puzzle was generated for, if it used a tier's
    /// parameters.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.params() == self.params)
    }

    /// Returns the positions of every hole, filled or not.
    pub fn holes(&self) -> impl Iterator<Item = Position> + '_ {
        self.grid
            .iter()
            .filter(|(_, state)| state.is_mutable())
            .map(|(pos, _)| pos)
    }

    /// Places `value` from the bank into the hole at `pos`.
    ///
    /// A value already in the hole goes back to the bank and is returned.
    /// Placing the value a hole already holds changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the grid,
    /// [`GameError::NotAHole`] if the cell is part of the puzzle, or
    /// [`GameError::NotInBank`] if the bank holds no copy of `value`. The
    /// game is unchanged on error.
    pub fn place(&mut self, pos: Position, value: i64) -> Result<Option<i64>, GameError> {
        let previous = match *self.mutable_cell(pos)? {
            CellState::Filled(current) if current == value => return Ok(Some(current)),
            CellState::Filled(current) => Some(current),
            _ => None,
        };

        self.bank
            .take(value)
            .map_err(|_| GameError::NotInBank { value })?;
        if let Some(previous) = previous {
            self.bank.insert(previous);
        }
        self.grid[pos] = CellState::Filled(value);

        log::trace!("placed {value} at {pos} (previous: {previous:?})");
        Ok(previous)
    }

    /// Clears the hole at `pos`, returning its value to the bank.
    ///
    /// Clearing an unset hole changes nothing and returns `None`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if `pos` is outside the grid, or
    /// [`GameError::NotAHole`] if the cell is part of the puzzle.
    pub fn clear(&mut self, pos: Position) -> Result<Option<i64>, GameError> {
        let cell = self.mutable_cell(pos)?;
        let CellState::Filled(value) = *cell else {
            return Ok(None);
        };
        *cell = CellState::Hole;
        self.bank.insert(value);

        log::trace!("cleared {value} from {pos}");
        Ok(Some(value))
    }

    /// Checks the current grid against the puzzle's equations.
    #[must_use]
    pub fn check(&self) -> SolutionCheck {
        check_solution(&self.grid, &self.solution.equations)
    }

    /// Returns `true` if every equation is complete and correct.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.check().is_solved()
    }

    fn mutable_cell(&mut self, pos: Position) -> Result<&mut CellState, GameError> {
        let cell = self
            .grid
            .get_mut(pos)
            .ok_or(GameError::OutOfBounds { pos })?;
        if cell.is_mutable() {
            Ok(cell)
        } else {
            Err(GameError::NotAHole { pos })
        }
    }
}
