use std::io::{BufRead, Write};

use mathgrid_game::{Game, Session};
use mathgrid_generator::{GenerateError, PuzzleSeed};

use crate::{
    command::{Command, HELP, ParseCommandError},
    error::CliError,
    render,
};

/// Runs an interactive game loop until `quit` or end of input.
///
/// The first game uses `seed` when given. Solving a game records the win on
/// the session and starts the next game. Returns the final session.
pub fn run<R, W>(
    session: Session,
    seed: Option<PuzzleSeed>,
    input: R,
    out: &mut W,
) -> Result<Session, CliError>
where
    R: BufRead,
    W: Write,
{
    run_with(session, seed, input, out, |session, seed| match seed {
        Some(seed) => session.start_game_with_seed(seed),
        None => session.start_game(),
    })
}

/// Like [`run`], with games produced by `new_game`.
///
/// Only a failure to produce the first game ends the loop. Later failures are
/// reported and the current game and session are kept.
fn run_with<R, W, F>(
    mut session: Session,
    seed: Option<PuzzleSeed>,
    input: R,
    out: &mut W,
    mut new_game: F,
) -> Result<Session, CliError>
where
    R: BufRead,
    W: Write,
    F: FnMut(&Session, Option<PuzzleSeed>) -> Result<Game, GenerateError>,
{
    let mut game = start(&mut new_game, &session, seed, out)?;
    prompt(out)?;

    for line in input.lines() {
        let command = match line?.parse::<Command>() {
            Ok(command) => command,
            Err(ParseCommandError::Empty) => {
                prompt(out)?;
                continue;
            }
            Err(err) => {
                writeln!(out, "{err}")?;
                prompt(out)?;
                continue;
            }
        };

        match command {
            Command::Place { pos, value } => match game.place(pos, value) {
                Ok(_) if game.is_solved() => {
                    writeln!(out, "{}", render::board(game.grid(), None))?;
                    let (next, points) = session.apply_win();
                    session = next;
                    writeln!(
                        out,
                        "Solved! +{points} points (score {}, {} won)",
                        session.score, session.games_won
                    )?;
                    if let Some(next) = restart(&mut new_game, &session, out)? {
                        game = next;
                    }
                }
                Ok(_) => show(&game, out)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Clear { pos } => match game.clear(pos) {
                Ok(_) => show(&game, out)?,
                Err(err) => writeln!(out, "{err}")?,
            },
            Command::Check => {
                let check = game.check();
                writeln!(out, "{}", render::board(game.grid(), Some(&check)))?;
                let invalid = check.invalid_positions().count();
                if invalid > 0 {
                    writeln!(out, "{invalid} cell(s) in wrong equations")?;
                } else {
                    writeln!(out, "no mistakes so far")?;
                }
            }
            Command::Bank => writeln!(out, "bank: {}", render::bank(game.bank()))?,
            Command::Show => show(&game, out)?,
            Command::New => {
                if let Some(next) = restart(&mut new_game, &session, out)? {
                    game = next;
                }
            }
            Command::Difficulty(difficulty) => {
                let switched = session.with_difficulty(difficulty);
                if let Some(next) = restart(&mut new_game, &switched, out)? {
                    session = switched;
                    game = next;
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
        }
        prompt(out)?;
    }

    writeln!(
        out,
        "\nFinal score: {} ({} games won)",
        session.score, session.games_won
    )?;
    Ok(session)
}

fn start<W, F>(
    new_game: &mut F,
    session: &Session,
    seed: Option<PuzzleSeed>,
    out: &mut W,
) -> Result<Game, CliError>
where
    W: Write,
    F: FnMut(&Session, Option<PuzzleSeed>) -> Result<Game, GenerateError>,
{
    let game = new_game(session, seed)?;
    log::info!("new {} game, seed {}", session.difficulty, game.seed());
    writeln!(
        out,
        "\nNew {} game (seed {})",
        session.difficulty,
        game.seed()
    )?;
    show(&game, out)?;
    Ok(game)
}

/// Starts a fresh game, or reports why none could be made.
fn restart<W, F>(
    new_game: &mut F,
    session: &Session,
    out: &mut W,
) -> Result<Option<Game>, CliError>
where
    W: Write,
    F: FnMut(&Session, Option<PuzzleSeed>) -> Result<Game, GenerateError>,
{
    match start(new_game, session, None, out) {
        Ok(game) => Ok(Some(game)),
        Err(CliError::Generate(err)) => {
            log::warn!("could not start a {} game: {err}", session.difficulty);
            writeln!(
                out,
                "could not start a new {} game: {err}; the current game is kept",
                session.difficulty
            )?;
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn show<W: Write>(game: &Game, out: &mut W) -> Result<(), CliError> {
    writeln!(out, "{}", render::board(game.grid(), None))?;
    writeln!(out, "bank: {}", render::bank(game.bank()))?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> Result<(), CliError> {
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}
