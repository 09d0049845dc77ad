//! Core data structures for arithmetic crossword puzzles.
//!
//! A puzzle is a square grid of equations (`operand operator operand … = result`)
//! running across and down, where crossing equations share numeric cells.
//! This crate provides the building blocks shared by generation, carving, and
//! checking.
//!
//! # Overview
//!
//! 1. **Tokens** - What a cell reads as
//!    - [`Operator`]: `+ - * /`, with float and exact integer application
//!    - [`Token`]: a number, an operator, or the equals sign
//!
//! 2. **Evaluation** - [`evaluate`] folds a token sequence strictly from left to
//!    right, without precedence, and reports malformed input as an [`EvalError`]
//!
//! 3. **Grids** - [`Grid`] stores cells by [`Position`]
//!    - [`Cell`]: a cell of the solved grid
//!    - [`CellState`]: a cell of the playable grid, with holes
//!    - [`Equation`]: parts, result, start, and [`Direction`] of one equation
//!    - [`SolvedGrid`]: cells plus equations, with invariant checks
//!
//! 4. **Play support** - [`Difficulty`] tiers, their [`DifficultyParams`], and
//!    the [`Bank`] of hidden values
//!
//! # Examples
//!
//! ```
//! use mathgrid_core::{Operator, Token, evaluate};
//!
//! // 2 + 3 * 2 reads left to right: (2 + 3) * 2
//! let parts: Vec<Token> = ["2", "+", "3", "*", "2"]
//!     .iter()
//!     .map(|s| s.parse().unwrap())
//!     .collect();
//! assert_eq!(evaluate(&parts), Ok(10.0));
//! assert_eq!(parts[1], Token::Operator(Operator::Add));
//! ```

pub mod bank;
pub mod cell;
pub mod difficulty;
pub mod equation;
pub mod evaluate;
pub mod grid;
pub mod position;
pub mod solved;
pub mod token;

pub use self::{
    bank::{Bank, BankError},
    cell::{Cell, CellState},
    difficulty::{Difficulty, DifficultyParams, ParamsError, ParseDifficultyError},
    equation::{Equation, SlotKind, TOLERANCE, approx_eq},
    evaluate::{EvalError, evaluate, evaluate_exact},
    grid::Grid,
    position::{Direction, Position},
    solved::{GridError, SolvedGrid},
    token::{Operator, ParseTokenError, Token},
};
