//! Cell variants of solved and playable grids.

use std::fmt::{self, Display};

use crate::{Operator, Token};

/// A cell of a solved grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Cell {
    /// Not part of any equation.
    #[default]
    Blank,
    /// An operand or a result.
    Number(i64),
    /// An operator between two operands.
    Operator(Operator),
    /// The equals sign of an equation.
    Equals,
}

impl Cell {
    /// Returns the token this cell reads as, or `None` for a blank cell.
    #[must_use]
    pub const fn token(self) -> Option<Token> {
        match self {
            Self::Blank => None,
            Self::Number(n) => Some(Token::Number(n)),
            Self::Operator(op) => Some(Token::Operator(op)),
            Self::Equals => Some(Token::Equals),
        }
    }

    /// Returns the number held by the cell, if any.
    #[must_use]
    pub const fn as_number(self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }
}

impl From<Token> for Cell {
    fn from(token: Token) -> Self {
        match token {
            Token::Number(n) => Self::Number(n),
            Token::Operator(op) => Self::Operator(op),
            Token::Equals => Self::Equals,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token() {
            Some(token) => Display::fmt(&token, f),
            None => f.pad("."),
        }
    }
}

/// A cell of a playable grid.
///
/// Only [`CellState::Hole`] and [`CellState::Filled`] are mutable; play moves
/// a cell between those two states and never changes any other cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum CellState {
    /// Not part of any equation.
    #[default]
    Blank,
    /// A revealed number that cannot be edited.
    Given(i64),
    /// A revealed operator.
    Operator(Operator),
    /// A revealed equals sign.
    Equals,
    /// A hidden number that has not been filled yet.
    Hole,
    /// A hidden number currently holding a value from the bank.
    Filled(i64),
}

impl CellState {
    /// Returns `true` for cells the player may fill or clear.
    #[must_use]
    pub const fn is_mutable(self) -> bool {
        matches!(self, Self::Hole | Self::Filled(_))
    }

    /// Returns the token this cell currently reads as.
    ///
    /// Blank cells and unfilled holes read as `None`.
    #[must_use]
    pub const fn token(self) -> Option<Token> {
        match self {
            Self::Blank | Self::Hole => None,
            Self::Given(n) | Self::Filled(n) => Some(Token::Number(n)),
            Self::Operator(op) => Some(Token::Operator(op)),
            Self::Equals => Some(Token::Equals),
        }
    }
}

impl Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.pad("."),
            Self::Hole => f.pad("_"),
            Self::Filled(n) => f.pad(&format!("[{n}]")),
            Self::Given(n) => Display::fmt(n, f),
            Self::Operator(op) => Display::fmt(op, f),
            Self::Equals => f.pad("="),
        }
    }
}
