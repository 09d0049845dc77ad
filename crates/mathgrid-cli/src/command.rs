use std::str::FromStr;

use mathgrid_core::{Difficulty, Position};

/// A line of input during `mathgrid play`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place { pos: Position, value: i64 },
    Clear { pos: Position },
    Check,
    Bank,
    Show,
    New,
    Difficulty(Difficulty),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  place R C V      put V from the bank into the hole at row R, column C
  clear R C        return the value at row R, column C to the bank
  check            mark cells in wrong equations with '!'
  bank             list the values still to place
  show             print the board
  new              start a new game
  difficulty D     switch to easy, medium, hard, or expert and start a new game
  help             print this message
  quit             leave";

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCommandError {
    #[display("empty command")]
    Empty,
    #[display("unknown command {name:?}, try `help`")]
    Unknown { name: String },
    #[display("usage: {usage}")]
    Usage { usage: &'static str },
    #[display("{text:?} is not a number")]
    InvalidNumber { text: String },
    #[display("{text:?} is not a difficulty")]
    InvalidDifficulty { text: String },
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Err(ParseCommandError::Empty);
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "place" | "p" => {
                let [row, col, value] = expect_args::<3>(args, "place R C V")?;
                Self::Place {
                    pos: Position::new(number(row)?, number(col)?),
                    value: number(value)?,
                }
            }
            "clear" | "c" => {
                let [row, col] = expect_args::<2>(args, "clear R C")?;
                Self::Clear {
                    pos: Position::new(number(row)?, number(col)?),
                }
            }
            "difficulty" | "d" => {
                let [text] = expect_args::<1>(args, "difficulty D")?;
                let difficulty = text
                    .parse()
                    .map_err(|_| ParseCommandError::InvalidDifficulty { text: text.into() })?;
                Self::Difficulty(difficulty)
            }
            "check" => no_args(args, "check", Self::Check)?,
            "bank" => no_args(args, "bank", Self::Bank)?,
            "show" => no_args(args, "show", Self::Show)?,
            "new" => no_args(args, "new", Self::New)?,
            "help" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => {
                return Err(ParseCommandError::Unknown {
                    name: name.to_owned(),
                });
            }
        };
        Ok(command)
    }
}

fn expect_args<'a, const N: usize>(
    args: &[&'a str],
    usage: &'static str,
) -> Result<[&'a str; N], ParseCommandError> {
    args.try_into()
        .map_err(|_| ParseCommandError::Usage { usage })
}

fn no_args(
    args: &[&str],
    usage: &'static str,
    command: Command,
) -> Result<Command, ParseCommandError> {
    expect_args::<0>(args, usage)?;
    Ok(command)
}

fn number<T: FromStr>(text: &str) -> Result<T, ParseCommandError> {
    text.parse().map_err(|_| ParseCommandError::InvalidNumber {
        text: text.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "place 2 4 7".parse::<Command>(),
            Ok(Command::Place {
                pos: Position::new(2, 4),
                value: 7
            })
        );
        assert_eq!(
            "  CLEAR 0 6 ".parse::<Command>(),
            Ok(Command::Clear {
                pos: Position::new(0, 6)
            })
        );
        assert_eq!(
            "difficulty Hard".parse::<Command>(),
            Ok(Command::Difficulty(Difficulty::Hard))
        );
        assert_eq!("check".parse::<Command>(), Ok(Command::Check));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "jump 1".parse::<Command>(),
            Err(ParseCommandError::Unknown {
                name: "jump".into()
            })
        );
        assert_eq!(
            "place 1 2".parse::<Command>(),
            Err(ParseCommandError::Usage {
                usage: "place R C V"
            })
        );
        assert_eq!(
            "place 1 -2 3".parse::<Command>(),
            Err(ParseCommandError::InvalidNumber { text: "-2".into() })
        );
        assert_eq!(
            "check now".parse::<Command>(),
            Err(ParseCommandError::Usage { usage: "check" })
        );
        assert_eq!(
            "d impossible".parse::<Command>(),
            Err(ParseCommandError::InvalidDifficulty {
                text: "impossible".into()
            })
        );
    }
}
