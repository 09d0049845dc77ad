use mathgrid_core::Position;

/// Errors returned by [`Game`](crate::Game) operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    /// The position is outside the grid.
    #[display("{pos} is outside the grid")]
    OutOfBounds {
        /// The rejected position.
        pos: Position,
    },
    /// The cell is part of the puzzle and cannot be changed.
    #[display("{pos} is not a hole")]
    NotAHole {
        /// The rejected position.
        pos: Position,
    },
    /// The bank holds no copy of the value.
    #[display("{value} is not in the bank")]
    NotInBank {
        /// The requested value.
        value: i64,
    },
}
