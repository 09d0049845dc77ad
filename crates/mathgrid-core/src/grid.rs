//! Square grid container.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

use crate::Position;

/// An N×N grid stored in row-major order.
///
/// # Examples
///
/// ```
/// use mathgrid_core::{Cell, Grid, Position};
///
/// let mut grid = Grid::new(3, Cell::Blank);
/// grid[Position::new(1, 2)] = Cell::Number(7);
/// assert_eq!(grid.get(Position::new(1, 2)), Some(&Cell::Number(7)));
/// assert_eq!(grid.get(Position::new(3, 0)), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Grid<T> {
    /// Creates a grid of side `size` with every cell set to `fill`.
    #[must_use]
    pub fn new(size: usize, fill: T) -> Self {
        Self {
            size,
            cells: vec![fill; size * size],
        }
    }
}

impl<T> Grid<T> {
    /// Returns the side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the cell at `pos`, or `None` if it is out of bounds.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        pos.is_within(self.size)
            .then(|| &self.cells[pos.row * self.size + pos.col])
    }

    /// Returns the cell at `pos` mutably, or `None` if it is out of bounds.
    #[must_use]
    pub fn get_mut(&mut self, pos: Position) -> Option<&mut T> {
        if pos.is_within(self.size) {
            Some(&mut self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    /// Returns an iterator over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        let size = self.size;
        (0..size * size).map(move |i| Position::new(i / size, i % size))
    }

    /// Returns an iterator over `(position, cell)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.positions().zip(&self.cells)
    }

    /// Builds a new grid by mapping every cell.
    #[must_use]
    pub fn map<U, F>(&self, mut f: F) -> Grid<U>
    where
        F: FnMut(Position, &T) -> U,
    {
        Grid {
            size: self.size,
            cells: self.iter().map(|(pos, cell)| f(pos, cell)).collect(),
        }
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        assert!(pos.is_within(self.size), "position {pos} out of bounds");
        &self.cells[pos.row * self.size + pos.col]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        assert!(pos.is_within(self.size), "position {pos} out of bounds");
        &mut self.cells[pos.row * self.size + pos.col]
    }
}

impl<T: Display> Display for Grid<T> {
    /// Prints one row per line with right-aligned cells.
    ///
    /// The width of each cell is taken from the formatter (`{:4}`), and
    /// defaults to the widest rendered cell.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self.cells.iter().map(ToString::to_string).collect();
        let width = f
            .width()
            .unwrap_or_else(|| rendered.iter().map(|s| s.chars().count()).max().unwrap_or(1));
        for (row, chunk) in rendered.chunks(self.size.max(1)).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, cell) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{cell:>width$}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_positions_are_row_major() {
        let grid = Grid::new(2, 0_u8);
        let positions: Vec<_> = grid.positions().collect();
        assert_eq!(
            positions,
            [
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(1, 0),
                Position::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_display_aligns_cells() {
        let mut grid = Grid::new(2, Cell::Blank);
        grid[Position::new(0, 0)] = Cell::Number(12);
        grid[Position::new(1, 1)] = Cell::Equals;
        assert_eq!(grid.to_string(), "12  .\n .  =");
    }

    #[test]
    fn test_map_preserves_shape() {
        let grid = Grid::new(3, 1_i64);
        let mapped = grid.map(|pos, v| v + i64::try_from(pos.row).unwrap());
        assert_eq!(mapped.size(), 3);
        assert_eq!(mapped[Position::new(2, 0)], 3);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds_panics() {
        let grid = Grid::new(2, 0_u8);
        let _ = grid[Position::new(2, 0)];
    }
}
