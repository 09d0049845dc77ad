//! Difficulty tiers and the generation parameters they select.

use std::{
    fmt::{self, Display},
    ops::RangeInclusive,
    str::FromStr,
};

use crate::Operator;

/// A difficulty tier.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    derive_more::IsVariant,
    serde::Serialize,
    serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Two operands, addition and subtraction only.
    #[default]
    Easy,
    /// Two operands with multiplication and a totals row and column.
    Medium,
    /// Three operands with all four operators.
    Hard,
    /// Three operands, all operators, larger numbers, and totals.
    Expert,
}

impl Difficulty {
    /// Array containing all tiers from easiest to hardest.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the lowercase name of the tier.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }

    /// Returns the generation parameters for this tier.
    ///
    /// # Examples
    ///
    /// ```
    /// use mathgrid_core::{Difficulty, Operator};
    ///
    /// let params = Difficulty::Easy.params();
    /// assert_eq!(params.operand_count, 2);
    /// assert_eq!(params.operators, [Operator::Add, Operator::Sub]);
    /// assert_eq!(params.grid_size(), 5);
    /// assert!(params.validate().is_ok());
    /// ```
    #[must_use]
    pub fn params(self) -> DifficultyParams {
        match self {
            Self::Easy => DifficultyParams {
                operand_count: 2,
                operators: vec![Operator::Add, Operator::Sub],
                operand_range: 1..=9,
                max_result: 20,
                totals: false,
                hole_ratio: 0.3,
            },
            Self::Medium => DifficultyParams {
                operand_count: 2,
                operators: vec![Operator::Add, Operator::Sub, Operator::Mul],
                operand_range: 1..=12,
                max_result: 60,
                totals: true,
                hole_ratio: 0.4,
            },
            Self::Hard => DifficultyParams {
                operand_count: 3,
                operators: Operator::ALL.to_vec(),
                operand_range: 1..=12,
                max_result: 99,
                totals: false,
                hole_ratio: 0.5,
            },
            Self::Expert => DifficultyParams {
                operand_count: 3,
                operators: Operator::ALL.to_vec(),
                operand_range: 1..=15,
                max_result: 150,
                totals: true,
                hole_ratio: 0.6,
            },
        }
    }

    /// Returns the points awarded for solving a puzzle of this tier.
    #[must_use]
    pub const fn win_points(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 20,
            Self::Hard => 30,
            Self::Expert => 50,
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty: {name:?} (expected easy, medium, hard, or expert)")]
pub struct ParseDifficultyError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseDifficultyError { name: s.to_owned() })
    }
}

/// Parameters controlling generation and carving.
#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyParams {
    /// Number of operands in every equation.
    pub operand_count: usize,
    /// Operators the generator may place.
    pub operators: Vec<Operator>,
    /// Range free operands are drawn from.
    pub operand_range: RangeInclusive<i64>,
    /// Largest result allowed; results are never negative.
    pub max_result: i64,
    /// Whether to add the totals row and column over the lattice results.
    pub totals: bool,
    /// Fraction of numeric cells turned into holes.
    pub hole_ratio: f64,
}

/// A rejected [`DifficultyParams`] value.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ParamsError {
    /// Equations need at least two operands.
    #[display("operand count must be at least 2, got {count}")]
    TooFewOperands {
        /// The rejected count.
        count: usize,
    },
    /// No operator is allowed.
    #[display("operator set is empty")]
    NoOperators,
    /// The operand range contains no value.
    #[display("operand range {start}..={end} is empty")]
    EmptyOperandRange {
        /// Start of the range.
        start: i64,
        /// End of the range.
        end: i64,
    },
    /// The maximum result is negative.
    #[display("maximum result must not be negative, got {max_result}")]
    NegativeMaxResult {
        /// The rejected maximum.
        max_result: i64,
    },
    /// The hole ratio is outside `(0, 1]`.
    #[display("hole ratio must be in (0, 1], got {ratio}")]
    InvalidHoleRatio {
        /// The rejected ratio.
        ratio: f64,
    },
}

impl DifficultyParams {
    /// Returns the side of the grid these parameters lay out.
    #[must_use]
    pub fn grid_size(&self) -> usize {
        2 * self.operand_count + 1
    }

    /// Checks that the parameters describe a puzzle that can be generated.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParamsError`] found.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.operand_count < 2 {
            return Err(ParamsError::TooFewOperands {
                count: self.operand_count,
            });
        }
        if self.operators.is_empty() {
            return Err(ParamsError::NoOperators);
        }
        if self.operand_range.is_empty() {
            return Err(ParamsError::EmptyOperandRange {
                start: *self.operand_range.start(),
                end: *self.operand_range.end(),
            });
        }
        if self.max_result < 0 {
            return Err(ParamsError::NegativeMaxResult {
                max_result: self.max_result,
            });
        }
        if !(self.hole_ratio > 0.0 && self.hole_ratio <= 1.0) {
            return Err(ParamsError::InvalidHoleRatio {
                ratio: self.hole_ratio,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tier_is_valid() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.params().validate(), Ok(()), "{difficulty}");
        }
    }

    #[test]
    fn test_serializes_as_lowercase_name() {
        for difficulty in Difficulty::ALL {
            let json = serde_json::to_string(&difficulty).unwrap();
            assert_eq!(json, format!("\"{difficulty}\""));
            assert_eq!(serde_json::from_str::<Difficulty>(&json).unwrap(), difficulty);
        }
        assert!(serde_json::from_str::<Difficulty>("\"Hard\"").is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Hard".parse(), Ok(Difficulty::Hard));
        assert_eq!(" expert ".parse(), Ok(Difficulty::Expert));
        assert!("legendary".parse::<Difficulty>().is_err());
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse(), Ok(difficulty));
        }
    }

    #[test]
    fn test_tiers_grow_harder() {
        let points: Vec<_> = Difficulty::ALL.iter().map(|d| d.win_points()).collect();
        assert_eq!(points, [10, 20, 30, 50]);
        assert!(Difficulty::Easy.params().hole_ratio < Difficulty::Expert.params().hole_ratio);
    }

    #[test]
    fn test_validate_rejects_bad_params() {
        let base = Difficulty::Easy.params();
        assert_eq!(
            DifficultyParams {
                operand_count: 1,
                ..base.clone()
            }
            .validate(),
            Err(ParamsError::TooFewOperands { count: 1 })
        );
        assert_eq!(
            DifficultyParams {
                operators: vec![],
                ..base.clone()
            }
            .validate(),
            Err(ParamsError::NoOperators)
        );
        let empty = RangeInclusive::new(5, 1);
        assert_eq!(
            DifficultyParams {
                operand_range: empty,
                ..base.clone()
            }
            .validate(),
            Err(ParamsError::EmptyOperandRange { start: 5, end: 1 })
        );
        assert!(
            DifficultyParams {
                hole_ratio: 0.0,
                ..base
            }
            .validate()
            .is_err()
        );
    }
}
