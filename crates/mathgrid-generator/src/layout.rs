use mathgrid_core::{Direction, Position};

/// Where one equation goes on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    /// Position of the first operand.
    pub start: Position,
    /// Reading direction.
    pub direction: Direction,
}

/// The skeleton of equation slots for a given equation length.
///
/// With `k` operands per equation the grid side is `2k + 1`. Horizontal
/// equations run along rows `0, 2, …, 2k - 2` and vertical equations down
/// columns `0, 2, …, 2k - 2`, so every operand cell is shared by one
/// horizontal and one vertical equation. Horizontal results fill column
/// `2k` and vertical results fill row `2k`.
///
/// With totals enabled, an extra horizontal equation along row `2k` combines
/// the vertical results and an extra vertical equation down column `2k`
/// combines the horizontal results. Both end in the corner cell, which is
/// the only result cell shared by two equations.
///
/// Slots are listed in fill order: lattice rows, lattice columns, totals
/// row, totals column.
///
/// # Examples
///
/// ```
/// use mathgrid_generator::Layout;
///
/// let layout = Layout::new(2, true);
/// assert_eq!(layout.size(), 5);
/// assert_eq!(layout.slots().len(), 6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    operand_count: usize,
    slots: Vec<Slot>,
}

impl Layout {
    /// Builds the skeleton for equations of `operand_count` operands.
    #[must_use]
    pub fn new(operand_count: usize, totals: bool) -> Self {
        let last = 2 * operand_count;
        let lattice = (0..operand_count).map(|i| 2 * i);

        let mut slots: Vec<Slot> = lattice
            .clone()
            .map(|row| Slot {
                start: Position::new(row, 0),
                direction: Direction::Right,
            })
            .collect();
        slots.extend(lattice.map(|col| Slot {
            start: Position::new(0, col),
            direction: Direction::Down,
        }));
        if totals {
            slots.push(Slot {
                start: Position::new(last, 0),
                direction: Direction::Right,
            });
            slots.push(Slot {
                start: Position::new(0, last),
                direction: Direction::Down,
            });
        }

        Self {
            operand_count,
            slots,
        }
    }

    /// Returns the grid side.
    #[must_use]
    pub fn size(&self) -> usize {
        2 * self.operand_count + 1
    }

    /// Returns the number of operands per equation.
    #[must_use]
    pub fn operand_count(&self) -> usize {
        self.operand_count
    }

    /// Returns the slots in fill order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the operand positions and the result position of `slot`.
    #[must_use]
    pub(crate) fn slot_cells(&self, slot: Slot) -> (Vec<Position>, Position) {
        let size = self.size();
        let step = |offset| {
            slot.start
                .step(slot.direction, offset, size)
                .expect("layout slots fit the grid")
        };
        let operands = (0..self.operand_count).map(|i| step(2 * i)).collect();
        (operands, step(2 * self.operand_count))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_lattice_operands_are_shared_once() {
        let layout = Layout::new(3, false);
        assert_eq!(layout.size(), 7);
        assert_eq!(layout.slots().len(), 6);

        let mut uses: HashMap<Position, usize> = HashMap::new();
        for &slot in layout.slots() {
            let (operands, _) = layout.slot_cells(slot);
            for pos in operands {
                *uses.entry(pos).or_default() += 1;
            }
        }
        assert_eq!(uses.len(), 9);
        assert!(uses.values().all(|&n| n == 2));
    }

    #[test]
    fn test_totals_share_corner_result() {
        let layout = Layout::new(2, true);
        let slots = layout.slots();
        let (row_operands, row_result) = layout.slot_cells(slots[4]);
        let (col_operands, col_result) = layout.slot_cells(slots[5]);
        assert_eq!(row_result, Position::new(4, 4));
        assert_eq!(col_result, Position::new(4, 4));

        // Totals operands are the lattice results.
        assert_eq!(row_operands, [Position::new(4, 0), Position::new(4, 2)]);
        assert_eq!(col_operands, [Position::new(0, 4), Position::new(2, 4)]);
        let (_, first_down_result) = layout.slot_cells(slots[2]);
        assert_eq!(first_down_result, Position::new(4, 0));
    }
}
