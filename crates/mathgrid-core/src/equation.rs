//! Equations placed along one grid axis.

use std::fmt::{self, Display};

use crate::{Direction, EvalError, Operator, Position, Token, evaluate};

/// One equation of the crossword.
///
/// The equation occupies `parts.len() + 2` cells starting at `start` and
/// moving along `direction`: the parts, an equals cell, and the result cell.
/// Parts alternate numbers and operators and start and end with a number.
///
/// # Examples
///
/// ```
/// use mathgrid_core::{Direction, Equation, Operator, Position, Token};
///
/// let equation = Equation::new(
///     vec![Token::Number(4), Token::Operator(Operator::Mul), Token::Number(3)],
///     12,
///     Position::new(0, 0),
///     Direction::Right,
/// );
/// assert_eq!(equation.span_len(), 5);
/// assert_eq!(equation.result_offset(), 4);
/// assert!(equation.is_consistent());
/// assert_eq!(equation.to_string(), "4 * 3 = 12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    /// Operands and operators in reading order.
    pub parts: Vec<Token>,
    /// The value the parts evaluate to.
    pub result: i64,
    /// Position of the first operand.
    pub start: Position,
    /// Reading direction.
    pub direction: Direction,
}

/// The role of a cell within an equation span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum SlotKind {
    /// An operand slot (even offsets before the equals sign).
    Operand,
    /// An operator slot (odd offsets before the equals sign).
    Operator,
    /// The equals sign.
    Equals,
    /// The result slot.
    Result,
}

impl Equation {
    /// Creates an equation.
    #[must_use]
    pub fn new(parts: Vec<Token>, result: i64, start: Position, direction: Direction) -> Self {
        Self {
            parts,
            result,
            start,
            direction,
        }
    }

    /// Builds an equation from its first operand and `(operator, operand)` steps.
    #[must_use]
    pub fn from_steps(
        first: i64,
        steps: &[(Operator, i64)],
        result: i64,
        start: Position,
        direction: Direction,
    ) -> Self {
        let mut parts = Vec::with_capacity(1 + steps.len() * 2);
        parts.push(Token::Number(first));
        for &(op, operand) in steps {
            parts.push(Token::Operator(op));
            parts.push(Token::Number(operand));
        }
        Self::new(parts, result, start, direction)
    }

    /// Returns the number of cells the equation occupies.
    #[must_use]
    pub fn span_len(&self) -> usize {
        self.parts.len() + 2
    }

    /// Returns the offset of the equals cell within the span.
    #[must_use]
    pub fn equals_offset(&self) -> usize {
        self.parts.len()
    }

    /// Returns the offset of the result cell within the span.
    #[must_use]
    pub fn result_offset(&self) -> usize {
        self.parts.len() + 1
    }

    /// Returns the number of operands.
    #[must_use]
    pub fn operand_count(&self) -> usize {
        self.parts.len().div_ceil(2)
    }

    /// Returns the role of the cell at `offset` within the span.
    #[must_use]
    pub fn slot_kind(&self, offset: usize) -> Option<SlotKind> {
        slot_kind(self.parts.len(), offset)
    }

    /// Returns the positions of the span, or `None` if it leaves a grid of side `size`.
    #[must_use]
    pub fn positions(&self, size: usize) -> Option<Vec<Position>> {
        (0..self.span_len())
            .map(|offset| self.start.step(self.direction, offset, size))
            .collect()
    }

    /// Returns the position of the result cell in a grid of side `size`.
    #[must_use]
    pub fn result_position(&self, size: usize) -> Option<Position> {
        self.start.step(self.direction, self.result_offset(), size)
    }

    /// Returns every token of the span: parts, `=`, and the result.
    #[must_use]
    pub fn tokens(&self) -> Vec<Token> {
        let mut tokens = self.parts.clone();
        tokens.push(Token::Equals);
        tokens.push(Token::Number(self.result));
        tokens
    }

    /// Evaluates the parts from left to right.
    ///
    /// # Errors
    ///
    /// Returns an [`EvalError`] if the parts are malformed or divide by zero.
    pub fn evaluate(&self) -> Result<f64, EvalError> {
        evaluate(&self.parts)
    }

    /// Returns `true` if the parts evaluate to the stored result.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.evaluate()
            .is_ok_and(|value| approx_eq(value, self.result))
    }
}

/// Returns the role of `offset` in a span whose parts have length `parts_len`.
#[must_use]
pub fn slot_kind(parts_len: usize, offset: usize) -> Option<SlotKind> {
    use std::cmp::Ordering;
    match offset.cmp(&parts_len) {
        Ordering::Less if offset % 2 == 0 => Some(SlotKind::Operand),
        Ordering::Less => Some(SlotKind::Operator),
        Ordering::Equal => Some(SlotKind::Equals),
        Ordering::Greater if offset == parts_len + 1 => Some(SlotKind::Result),
        Ordering::Greater => None,
    }
}

/// Tolerance used when comparing an evaluated expression with a result.
pub const TOLERANCE: f64 = 0.001;

/// Compares an evaluated value with an integer result within [`TOLERANCE`].
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn approx_eq(value: f64, result: i64) -> bool {
    (value - result as f64).abs() < TOLERANCE
}

impl Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.parts {
            write!(f, "{token} ")?;
        }
        write!(f, "= {}", self.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_kinds() {
        let equation = Equation::from_steps(
            1,
            &[(Operator::Add, 2), (Operator::Sub, 3)],
            0,
            Position::new(0, 0),
            Direction::Down,
        );
        let kinds: Vec<_> = (0..=equation.span_len())
            .map(|offset| equation.slot_kind(offset))
            .collect();
        assert_eq!(
            kinds,
            [
                Some(SlotKind::Operand),
                Some(SlotKind::Operator),
                Some(SlotKind::Operand),
                Some(SlotKind::Operator),
                Some(SlotKind::Operand),
                Some(SlotKind::Equals),
                Some(SlotKind::Result),
                None,
            ]
        );
        assert_eq!(equation.operand_count(), 3);
        assert!(equation.is_consistent());
    }

    #[test]
    fn test_positions_respect_bounds() {
        let equation = Equation::from_steps(
            6,
            &[(Operator::Div, 2)],
            3,
            Position::new(4, 0),
            Direction::Up,
        );
        assert_eq!(
            equation.positions(5),
            Some(vec![
                Position::new(4, 0),
                Position::new(3, 0),
                Position::new(2, 0),
                Position::new(1, 0),
                Position::new(0, 0),
            ])
        );
        assert_eq!(equation.result_position(5), Some(Position::new(0, 0)));

        let shifted = Equation {
            start: Position::new(3, 0),
            ..equation
        };
        assert_eq!(shifted.positions(5), None);
    }

    #[test]
    fn test_inconsistent_equation() {
        let equation = Equation::from_steps(
            5,
            &[(Operator::Div, 0)],
            0,
            Position::new(0, 0),
            Direction::Right,
        );
        assert!(!equation.is_consistent());
        assert_eq!(
            equation.tokens().last().copied(),
            Some(Token::Number(0))
        );
    }
}
