//! Play state for arithmetic crosswords.
//!
//! [`Game`] tracks a carved puzzle in play: the playable grid, the bank of
//! values still to place, and the solved grid. [`check_solution`] validates
//! any set of cells exposed through [`CellSource`] against a puzzle's
//! equations. [`Session`] carries score and tier across games.
//!
//! # Examples
//!
//! ```
//! use mathgrid_core::Difficulty;
//! use mathgrid_game::Session;
//!
//! let session = Session::new(Difficulty::Easy);
//! let mut game = session.start_game()?;
//!
//! let holes: Vec<_> = game.holes().collect();
//! for pos in holes {
//!     let value = game.solution().cells[pos].as_number().unwrap();
//!     game.place(pos, value)?;
//! }
//!
//! if game.is_solved() {
//!     let (session, points) = session.apply_win();
//!     assert_eq!(session.score, points);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    check::{CellEntry, CellSource, CellStatus, SolutionCheck, check_solution},
    error::GameError,
    game::Game,
    session::Session,
};

mod check;
mod error;
mod game;
mod session;
