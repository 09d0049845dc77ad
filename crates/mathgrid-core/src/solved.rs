//! Fully solved grids and their invariants.

use std::fmt::{self, Display};

use crate::{Cell, Equation, Grid, Position, SlotKind, Token};

/// A fully solved grid with the equations used to build it.
///
/// The solved grid is the ground truth for checking a playable grid and is
/// never mutated after generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedGrid {
    /// The cells, one token per equation cell and [`Cell::Blank`] elsewhere.
    pub cells: Grid<Cell>,
    /// Every equation written into `cells`.
    pub equations: Vec<Equation>,
}

/// An invariant violation found by [`SolvedGrid::verify`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridError {
    /// The equation leaves the grid.
    #[display("equation {index} leaves the grid")]
    OutOfBounds {
        /// Index of the equation.
        index: usize,
    },
    /// The equation's parts do not alternate numbers and operators.
    #[display("equation {index} has malformed parts")]
    MalformedParts {
        /// Index of the equation.
        index: usize,
    },
    /// A cell does not read as the token the equation expects.
    #[display("equation {index} expects {expected} at {pos}, found {found}")]
    CellMismatch {
        /// Index of the equation.
        index: usize,
        /// Position of the mismatching cell.
        pos: Position,
        /// The token the equation expects.
        expected: Token,
        /// What the cell holds.
        found: Cell,
    },
    /// The equation does not evaluate to its result.
    #[display("equation {index} does not evaluate to its result")]
    WrongResult {
        /// Index of the equation.
        index: usize,
    },
}

impl SolvedGrid {
    /// Returns the side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.size()
    }

    /// Checks every invariant of a solved grid.
    ///
    /// Each equation must lie within bounds, alternate numbers and
    /// operators, evaluate to its result, and read back exactly from the
    /// cells. Because each equation is compared against the shared cell
    /// contents, two intersecting equations that pass agree on their shared
    /// cells.
    ///
    /// # Errors
    ///
    /// Returns the first [`GridError`] found.
    pub fn verify(&self) -> Result<(), GridError> {
        for (index, equation) in self.equations.iter().enumerate() {
            let positions = equation
                .positions(self.size())
                .ok_or(GridError::OutOfBounds { index })?;

            let well_formed = equation.parts.len() % 2 == 1
                && equation
                    .parts
                    .iter()
                    .enumerate()
                    .all(|(offset, token)| match equation.slot_kind(offset) {
                        Some(SlotKind::Operand) => token.is_number(),
                        Some(SlotKind::Operator) => token.is_operator(),
                        _ => false,
                    });
            if !well_formed {
                return Err(GridError::MalformedParts { index });
            }
            if !equation.is_consistent() {
                return Err(GridError::WrongResult { index });
            }

            for (pos, expected) in positions.into_iter().zip(equation.tokens()) {
                let found = self.cells[pos];
                if found.token() != Some(expected) {
                    return Err(GridError::CellMismatch {
                        index,
                        pos,
                        expected,
                        found,
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns every numeric cell together with the indices of the equations through it.
    #[must_use]
    pub fn numeric_cells(&self) -> Vec<(Position, Vec<usize>)> {
        let mut cells: Vec<(Position, Vec<usize>)> = self
            .cells
            .iter()
            .filter(|(_, cell)| cell.is_number())
            .map(|(pos, _)| (pos, Vec::new()))
            .collect();
        for (index, equation) in self.equations.iter().enumerate() {
            let Some(positions) = equation.positions(self.size()) else {
                continue;
            };
            for pos in positions {
                if let Ok(i) = cells.binary_search_by_key(&pos, |(p, _)| *p) {
                    cells[i].1.push(index);
                }
            }
        }
        cells
    }
}

impl Display for SolvedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.cells, f)
    }
}
