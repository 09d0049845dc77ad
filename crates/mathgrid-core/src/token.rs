//! Operators and the tokens a grid cell can read as.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// An arithmetic operator placed between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Operator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
}

impl Operator {
    /// Array containing all operators.
    pub const ALL: [Self; 4] = [Self::Add, Self::Sub, Self::Mul, Self::Div];

    /// Returns the ASCII symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }

    /// Parses an operator symbol, accepting `×` and `÷` as well.
    #[must_use]
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Sub),
            '*' | '×' | 'x' => Some(Self::Mul),
            '/' | '÷' => Some(Self::Div),
            _ => None,
        }
    }

    /// Applies the operator to floating-point operands.
    ///
    /// Returns `None` for a zero divisor.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathgrid_core::Operator;
    ///
    /// assert_eq!(Operator::Div.apply(7.0, 2.0), Some(3.5));
    /// assert_eq!(Operator::Div.apply(7.0, 0.0), None);
    /// ```
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Self::Add => Some(lhs + rhs),
            Self::Sub => Some(lhs - rhs),
            Self::Mul => Some(lhs * rhs),
            Self::Div => (rhs != 0.0).then(|| lhs / rhs),
        }
    }

    /// Applies the operator to integers, failing on overflow, a zero divisor,
    /// or a division that leaves a remainder.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathgrid_core::Operator;
    ///
    /// assert_eq!(Operator::Div.apply_exact(12, 4), Some(3));
    /// assert_eq!(Operator::Div.apply_exact(12, 5), None);
    /// assert_eq!(Operator::Sub.apply_exact(3, 5), Some(-2));
    /// ```
    #[must_use]
    pub fn apply_exact(self, lhs: i64, rhs: i64) -> Option<i64> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Sub => lhs.checked_sub(rhs),
            Self::Mul => lhs.checked_mul(rhs),
            Self::Div => {
                if rhs == 0 || lhs.checked_rem(rhs)? != 0 {
                    None
                } else {
                    lhs.checked_div(rhs)
                }
            }
        }
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = [0; 4];
        f.pad(self.symbol().encode_utf8(&mut buf))
    }
}

/// The content a non-blank cell reads as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Token {
    /// A number, either an operand or a result.
    Number(i64),
    /// An operator between two operands.
    Operator(Operator),
    /// The equals sign separating an expression from its result.
    Equals,
}

impl Token {
    /// Returns the number held by the token, if any.
    #[must_use]
    pub const fn as_number(self) -> Option<i64> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the operator held by the token, if any.
    #[must_use]
    pub const fn as_operator(self) -> Option<Operator> {
        match self {
            Self::Operator(op) => Some(op),
            _ => None,
        }
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl From<i64> for Token {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => Display::fmt(n, f),
            Self::Operator(op) => Display::fmt(op, f),
            Self::Equals => f.pad("="),
        }
    }
}

/// Error returned when a string is not a number, an operator, or `=`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid token: {text:?}")]
pub struct ParseTokenError {
    /// The rejected input.
    pub text: String,
}

impl FromStr for Token {
    type Err = ParseTokenError;

    /// Parses a token.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathgrid_core::{Operator, Token};
    ///
    /// assert_eq!("12".parse(), Ok(Token::Number(12)));
    /// assert_eq!("÷".parse(), Ok(Token::Operator(Operator::Div)));
    /// assert_eq!("=".parse(), Ok(Token::Equals));
    /// assert!("twelve".parse::<Token>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        if text == "=" {
            return Ok(Self::Equals);
        }
        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && let Some(op) = Operator::from_symbol(c)
        {
            return Ok(Self::Operator(op));
        }
        text.parse::<i64>()
            .map(Self::Number)
            .map_err(|_| ParseTokenError {
                text: text.to_owned(),
            })
    }
}
