use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

use mathgrid_core::{CellState, Equation, Grid, Position, Token, approx_eq, evaluate};

/// What a caller knows about one cell when checking a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEntry {
    /// The current value, or `None` for an unfilled hole.
    pub value: Option<Token>,
    /// Whether the player may change the cell.
    pub mutable: bool,
}

/// Read access to the cells of a playable grid.
///
/// The checker only reads through this trait, so a front end can check the
/// cells it owns without building a [`Grid`].
pub trait CellSource {
    /// Returns the cell at `pos`, or `None` if no cell is known there.
    fn entry(&self, pos: Position) -> Option<CellEntry>;

    /// Returns every mutable position.
    fn mutable_positions(&self) -> Vec<Position>;
}

impl CellSource for Grid<CellState> {
    fn entry(&self, pos: Position) -> Option<CellEntry> {
        match self.get(pos)? {
            CellState::Blank => None,
            &state => Some(CellEntry {
                value: state.token(),
                mutable: state.is_mutable(),
            }),
        }
    }

    fn mutable_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, state)| state.is_mutable())
            .map(|(pos, _)| pos)
            .collect()
    }
}

impl<S: BuildHasher> CellSource for HashMap<Position, CellEntry, S> {
    fn entry(&self, pos: Position) -> Option<CellEntry> {
        self.get(&pos).copied()
    }

    fn mutable_positions(&self) -> Vec<Position> {
        self.iter()
            .filter(|(_, entry)| entry.mutable)
            .map(|(&pos, _)| pos)
            .collect()
    }
}

/// Correctness of a mutable cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum CellStatus {
    /// Not part of any complete equation yet.
    #[default]
    Neutral,
    /// Every complete equation through the cell is correct.
    Valid,
    /// At least one complete equation through the cell is wrong.
    Invalid,
}

/// The outcome of [`check_solution`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionCheck {
    statuses: BTreeMap<Position, CellStatus>,
    solved: bool,
}

impl SolutionCheck {
    /// Returns the status of the mutable cell at `pos`.
    #[must_use]
    pub fn status(&self, pos: Position) -> Option<CellStatus> {
        self.statuses.get(&pos).copied()
    }

    /// Returns every mutable cell with its status, in row-major order.
    #[must_use]
    pub fn statuses(&self) -> &BTreeMap<Position, CellStatus> {
        &self.statuses
    }

    /// Returns `true` if every equation is complete and correct.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns the positions marked invalid.
    pub fn invalid_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.statuses
            .iter()
            .filter(|(_, status)| status.is_invalid())
            .map(|(&pos, _)| pos)
    }
}

/// Checks the current cells against the equations of the solved grid.
///
/// Every mutable cell starts [`CellStatus::Neutral`]. For each equation:
///
/// - if a cell of its span is unknown or has no value, the equation is
///   incomplete: the puzzle is not solved and no status changes;
/// - otherwise the expression left of the equals cell is evaluated and
///   compared with the result cell within [`mathgrid_core::TOLERANCE`]; a
///   malformed expression or a division by zero counts as incorrect;
/// - a correct equation marks its mutable cells valid unless they are
///   already invalid; an incorrect one marks them invalid.
///
/// Invalid is sticky: once any equation marks a cell invalid, no other
/// equation turns it valid again.
///
/// # Examples
///
/// ```
/// use mathgrid_core::{CellState, Difficulty};
/// use mathgrid_game::check_solution;
/// use mathgrid_generator::PuzzleGenerator;
///
/// let generator = PuzzleGenerator::new(Difficulty::Easy);
/// let puzzle = generator.generate()?;
/// let mut grid = generator.carve(&puzzle).grid;
///
/// assert!(!check_solution(&grid, &puzzle.solution.equations).is_solved());
///
/// for pos in grid.positions() {
///     if grid[pos].is_hole() {
///         let value = puzzle.solution.cells[pos].as_number().unwrap();
///         grid[pos] = CellState::Filled(value);
///     }
/// }
/// assert!(check_solution(&grid, &puzzle.solution.equations).is_solved());
/// # Ok::<(), mathgrid_generator::GenerateError>(())
/// ```
pub fn check_solution<S>(cells: &S, equations: &[Equation]) -> SolutionCheck
where
    S: CellSource + ?Sized,
{
    let mut statuses: BTreeMap<Position, CellStatus> = cells
        .mutable_positions()
        .into_iter()
        .map(|pos| (pos, CellStatus::Neutral))
        .collect();
    let mut solved = true;

    for equation in equations {
        let Some(reading) = read_equation(cells, equation) else {
            solved = false;
            continue;
        };

        let correct = reading.is_correct();
        if !correct {
            solved = false;
        }
        for pos in reading.mutable {
            let status = statuses.entry(pos).or_default();
            if !correct {
                *status = CellStatus::Invalid;
            } else if !status.is_invalid() {
                *status = CellStatus::Valid;
            }
        }
    }

    SolutionCheck { statuses, solved }
}

/// The current values along one complete equation.
struct Reading {
    lhs: Vec<Token>,
    rhs: Option<i64>,
    mutable: Vec<Position>,
}

impl Reading {
    fn is_correct(&self) -> bool {
        match (evaluate(&self.lhs), self.rhs) {
            (Ok(value), Some(result)) => approx_eq(value, result),
            _ => false,
        }
    }
}

/// Reads an equation's span, or `None` if it is incomplete.
fn read_equation<S>(cells: &S, equation: &Equation) -> Option<Reading>
where
    S: CellSource + ?Sized,
{
    let mut lhs = Vec::with_capacity(equation.parts.len());
    let mut rhs = None;
    let mut mutable = Vec::new();

    for offset in 0..equation.span_len() {
        let pos = equation.start.step(equation.direction, offset, usize::MAX)?;
        let entry = cells.entry(pos)?;
        let value = entry.value?;
        if entry.mutable {
            mutable.push(pos);
        }
        if offset < equation.equals_offset() {
            lhs.push(value);
        } else if offset == equation.result_offset() {
            rhs = value.as_number();
        }
    }

    Some(Reading { lhs, rhs, mutable })
}
