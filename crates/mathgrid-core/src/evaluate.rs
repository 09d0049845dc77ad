//! Left-to-right evaluation of operand/operator sequences.

use crate::{Operator, Token};

/// Reasons an expression has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EvalError {
    /// The sequence has no tokens.
    #[display("empty expression")]
    Empty,
    /// A number was expected at `index`.
    #[display("expected a number at index {index}")]
    ExpectedNumber {
        /// Index of the offending token.
        index: usize,
    },
    /// An operator was expected at `index`.
    #[display("expected an operator at index {index}")]
    ExpectedOperator {
        /// Index of the offending token.
        index: usize,
    },
    /// The sequence ends with an operator.
    #[display("expression ends with an operator")]
    MissingOperand,
    /// The divisor at `index` is zero.
    #[display("division by zero at index {index}")]
    DivisionByZero {
        /// Index of the zero divisor.
        index: usize,
    },
}

/// Evaluates `number (operator number)*` strictly from left to right.
///
/// There is no operator precedence: `2 + 3 * 2` is `(2 + 3) * 2`.
///
/// # Errors
///
/// Returns an [`EvalError`] if the sequence is empty, malformed, or divides
/// by zero.
///
/// # Examples
///
/// ```
/// use mathgrid_core::{EvalError, Operator, Token, evaluate};
///
/// let parts = [
///     Token::Number(2),
///     Token::Operator(Operator::Add),
///     Token::Number(3),
///     Token::Operator(Operator::Mul),
///     Token::Number(2),
/// ];
/// assert_eq!(evaluate(&parts), Ok(10.0));
///
/// let parts = [Token::Number(5), Token::Operator(Operator::Div), Token::Number(0)];
/// assert_eq!(evaluate(&parts), Err(EvalError::DivisionByZero { index: 2 }));
/// assert_eq!(evaluate(&[]), Err(EvalError::Empty));
/// ```
#[expect(clippy::cast_precision_loss)]
pub fn evaluate(parts: &[Token]) -> Result<f64, EvalError> {
    let (first, rest) = parts.split_first().ok_or(EvalError::Empty)?;
    let mut acc = first
        .as_number()
        .ok_or(EvalError::ExpectedNumber { index: 0 })? as f64;

    for (pair_index, pair) in rest.chunks(2).enumerate() {
        let op_index = 1 + pair_index * 2;
        let op = pair[0]
            .as_operator()
            .ok_or(EvalError::ExpectedOperator { index: op_index })?;
        let operand = pair
            .get(1)
            .ok_or(EvalError::MissingOperand)?
            .as_number()
            .ok_or(EvalError::ExpectedNumber {
                index: op_index + 1,
            })? as f64;
        acc = op
            .apply(acc, operand)
            .ok_or(EvalError::DivisionByZero {
                index: op_index + 1,
            })?;
    }

    Ok(acc)
}

/// Evaluates with exact integer arithmetic.
///
/// Returns `None` where [`evaluate`] would fail, and also on overflow or on a
/// division with a remainder. The generator relies on this so that every
/// displayed number is an integer.
#[must_use]
pub fn evaluate_exact(first: i64, steps: &[(Operator, i64)]) -> Option<i64> {
    steps
        .iter()
        .try_fold(first, |acc, &(op, operand)| op.apply_exact(acc, operand))
}
