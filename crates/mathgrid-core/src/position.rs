//! Grid positions and axis directions.

use std::fmt::{self, Display};

/// A cell position on a square grid, zero-based.
///
/// # Examples
///
/// ```
/// use mathgrid_core::{Direction, Position};
///
/// let pos = Position::new(2, 3);
/// assert_eq!(pos.step(Direction::Down, 2, 5), Some(Position::new(4, 3)));
/// assert_eq!(pos.step(Direction::Up, 3, 5), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Moves `distance` cells along `direction`.
    ///
    /// Returns `None` if the resulting position leaves a grid of side `size`.
    #[must_use]
    pub fn step(self, direction: Direction, distance: usize, size: usize) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let row = offset(self.row, d_row, distance)?;
        let col = offset(self.col, d_col, distance)?;
        (row < size && col < size).then_some(Self { row, col })
    }

    /// Returns `true` if the position lies inside a grid of side `size`.
    #[must_use]
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

fn offset(base: usize, delta: isize, distance: usize) -> Option<usize> {
    match delta {
        0 => Some(base),
        1 => base.checked_add(distance),
        _ => base.checked_sub(distance),
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four axis directions an equation can run in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    derive_more::IsVariant,
)]
pub enum Direction {
    /// Left to right along a row.
    Right,
    /// Top to bottom along a column.
    Down,
    /// Right to left along a row.
    Left,
    /// Bottom to top along a column.
    Up,
}

impl Direction {
    /// Array containing all directions.
    pub const ALL: [Self; 4] = [Self::Right, Self::Down, Self::Left, Self::Up];

    /// Returns the `(d_row, d_col)` unit step of this direction.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Up => (-1, 0),
        }
    }

    /// Returns `true` for [`Direction::Right`] and [`Direction::Left`].
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Right | Self::Left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_stays_within_bounds() {
        let pos = Position::new(0, 0);
        assert_eq!(pos.step(Direction::Right, 4, 5), Some(Position::new(0, 4)));
        assert_eq!(pos.step(Direction::Right, 5, 5), None);
        assert_eq!(pos.step(Direction::Left, 1, 5), None);
        assert_eq!(pos.step(Direction::Up, 0, 5), Some(pos));

        let corner = Position::new(4, 4);
        assert_eq!(corner.step(Direction::Left, 4, 5), Some(Position::new(4, 0)));
        assert_eq!(corner.step(Direction::Up, 2, 5), Some(Position::new(2, 4)));
        assert_eq!(corner.step(Direction::Down, 1, 5), None);
    }

    #[test]
    fn test_direction_axes() {
        let horizontal: Vec<_> = Direction::ALL
            .into_iter()
            .filter(|d| d.is_horizontal())
            .collect();
        assert_eq!(horizontal, [Direction::Right, Direction::Left]);
        assert!(Direction::Down.is_down());
    }
}
