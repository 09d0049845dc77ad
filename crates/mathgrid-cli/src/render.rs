use std::fmt;

use mathgrid_core::{Bank, Grid};
use mathgrid_game::SolutionCheck;

/// Renders a grid with row and column numbers.
///
/// With a check, cells in a wrong equation get a trailing `!`.
pub fn board<T: std::fmt::Display>(grid: &Grid<T>, check: Option<&SolutionCheck>) -> String {
    let cells: Vec<String> = grid
        .iter()
        .map(|(pos, cell)| {
            let invalid = check
                .and_then(|check| check.status(pos))
                .is_some_and(|status| status.is_invalid());
            if invalid {
                format!("{cell}!")
            } else {
                cell.to_string()
            }
        })
        .collect();

    let size = grid.size();
    let label_width = size.saturating_sub(1).to_string().len();
    let width = cells
        .iter()
        .map(|s| s.chars().count())
        .chain([label_width])
        .max()
        .unwrap_or(1);

    let mut out = String::new();
    // Writing to a `String` cannot fail.
    if write_rows(&mut out, &cells, size, width, label_width).is_err() {
        log::error!("failed to render a {size}x{size} board");
    }
    out
}

fn write_rows(
    out: &mut impl fmt::Write,
    cells: &[String],
    size: usize,
    width: usize,
    label_width: usize,
) -> fmt::Result {
    write!(out, "{:label_width$} ", "")?;
    for col in 0..size {
        write!(out, " {col:>width$}")?;
    }
    for (row, chunk) in cells.chunks(size.max(1)).enumerate() {
        write!(out, "\n{row:>label_width$} ")?;
        for cell in chunk {
            write!(out, " {cell:>width$}")?;
        }
    }
    Ok(())
}

/// Renders the bank as a sorted list of values.
pub fn bank(bank: &Bank) -> String {
    if bank.is_empty() {
        return "(empty)".to_owned();
    }
    bank.to_vec()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use mathgrid_core::{CellState, Operator, Position};

    use super::*;

    #[test]
    fn test_board_labels_rows_and_columns() {
        let mut grid = Grid::new(3, CellState::Blank);
        grid[Position::new(0, 0)] = CellState::Given(12);
        grid[Position::new(0, 1)] = CellState::Operator(Operator::Add);
        grid[Position::new(2, 2)] = CellState::Filled(4);
        assert_eq!(
            board(&grid, None),
            "     0   1   2\n0   12   +   .\n1    .   .   .\n2    .   . [4]"
        );
    }

    /// A sink that accepts a fixed number of writes.
    struct Limited(usize);

    impl fmt::Write for Limited {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            self.0 = self.0.checked_sub(1).ok_or(fmt::Error)?;
            Ok(())
        }
    }

    #[test]
    fn test_row_writer_propagates_errors() {
        let cells = vec![".".to_owned(); 4];
        assert!(write_rows(&mut Limited(usize::MAX), &cells, 2, 1, 1).is_ok());
        assert_eq!(write_rows(&mut Limited(2), &cells, 2, 1, 1), Err(fmt::Error));

        let mut out = String::new();
        write_rows(&mut out, &cells, 2, 1, 1).unwrap();
        assert_eq!(out, "   0 1\n0  . .\n1  . .");
    }

    #[test]
    fn test_bank_lists_repeats() {
        let bank: Bank = [5, 2, 5].into_iter().collect();
        assert_eq!(super::bank(&bank), "2 5 5");
        assert_eq!(super::bank(&Bank::new()), "(empty)");
    }
}
