use mathgrid_core::{
    Bank, Cell, CellState, DifficultyParams, Equation, Grid, Position, SlotKind, SolvedGrid,
};
use rand::RngExt as _;
use rand_pcg::Pcg64;

/// A playable grid and the values removed to make it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarvedPuzzle {
    /// The playable grid; hidden numbers are [`CellState::Hole`].
    pub grid: Grid<CellState>,
    /// The removed values, one per hole.
    pub bank: Bank,
}

/// Hides a share of the numeric cells of `solution`.
///
/// `round(numeric cells × hole_ratio)` cells are hidden, at least one. Only
/// numbers are hidden; operators and equals signs stay visible.
///
/// Holes are spread across equations: each pick is drawn uniformly from the
/// remaining cells with the lowest load, where the load of a cell is the
/// number of holes already carved in the equations through it. Cells whose
/// removal would leave one of their equations without any visible operand are
/// only picked once no other cell remains.
#[must_use]
pub fn carve(solution: &SolvedGrid, params: &DifficultyParams, rng: &mut Pcg64) -> CarvedPuzzle {
    let numeric = solution.numeric_cells();
    let target = hole_count(numeric.len(), params.hole_ratio);
    let operand_of = operand_equations(solution, &numeric);

    let operands_per_equation: Vec<usize> = solution
        .equations
        .iter()
        .map(Equation::operand_count)
        .collect();
    let mut holes_per_equation = vec![0_usize; solution.equations.len()];
    let mut hidden_operands = vec![0_usize; solution.equations.len()];
    let mut remaining: Vec<usize> = (0..numeric.len()).collect();
    let mut chosen = Vec::with_capacity(target);

    for _ in 0..target {
        let load = |i: usize| -> usize {
            numeric[i].1.iter().map(|&eq| holes_per_equation[eq]).sum()
        };
        let keeps_operand = |i: usize| {
            operand_of[i]
                .iter()
                .all(|&eq| hidden_operands[eq] + 1 < operands_per_equation[eq])
        };

        let mut pool: Vec<usize> = remaining.iter().copied().filter(|&i| keeps_operand(i)).collect();
        if pool.is_empty() {
            log::debug!("every remaining cell is the last visible operand of an equation");
            pool.clone_from(&remaining);
        }
        let Some(min_load) = pool.iter().map(|&i| load(i)).min() else {
            break;
        };
        pool.retain(|&i| load(i) == min_load);

        let pick = pool[rng.random_range(0..pool.len())];
        remaining.retain(|&i| i != pick);
        for &eq in &numeric[pick].1 {
            holes_per_equation[eq] += 1;
        }
        for &eq in &operand_of[pick] {
            hidden_operands[eq] += 1;
        }
        chosen.push(numeric[pick].0);
    }

    let mut grid = solution.cells.map(|_, cell| match *cell {
        Cell::Blank => CellState::Blank,
        Cell::Number(n) => CellState::Given(n),
        Cell::Operator(op) => CellState::Operator(op),
        Cell::Equals => CellState::Equals,
    });
    let mut bank = Bank::new();
    for pos in chosen {
        if let Cell::Number(n) = solution.cells[pos] {
            bank.insert(n);
            grid[pos] = CellState::Hole;
        }
    }

    log::debug!(
        "carved {} holes out of {} numeric cells",
        bank.len(),
        numeric.len()
    );
    CarvedPuzzle { grid, bank }
}

/// Lists, for each numeric cell, the equations it is an operand of.
fn operand_equations(solution: &SolvedGrid, numeric: &[(Position, Vec<usize>)]) -> Vec<Vec<usize>> {
    let mut operand_of = vec![Vec::new(); numeric.len()];
    for (index, equation) in solution.equations.iter().enumerate() {
        let Some(positions) = equation.positions(solution.size()) else {
            continue;
        };
        for (offset, pos) in positions.into_iter().enumerate() {
            if equation.slot_kind(offset) != Some(SlotKind::Operand) {
                continue;
            }
            if let Ok(i) = numeric.binary_search_by_key(&pos, |(p, _)| *p) {
                operand_of[i].push(index);
            }
        }
    }
    operand_of
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn hole_count(candidates: usize, ratio: f64) -> usize {
    if candidates == 0 {
        return 0;
    }
    let count = (candidates as f64 * ratio).round() as usize;
    count.clamp(1, candidates)
}

#[cfg(test)]
mod tests {
    use mathgrid_core::Difficulty;
    use proptest::prelude::*;

    use super::*;
    use crate::{PuzzleGenerator, PuzzleSeed};

    fn generated(difficulty: Difficulty, bytes: [u8; 32]) -> (SolvedGrid, CarvedPuzzle) {
        let generator = PuzzleGenerator::new(difficulty);
        let puzzle = generator
            .generate_with_seed(PuzzleSeed::from_bytes(bytes))
            .unwrap();
        let carved = generator.carve(&puzzle);
        (puzzle.solution, carved)
    }

    fn holes(grid: &Grid<CellState>) -> Vec<Position> {
        grid.iter()
            .filter(|(_, cell)| cell.is_hole())
            .map(|(pos, _)| pos)
            .collect()
    }

    #[test]
    fn test_hole_count() {
        assert_eq!(hole_count(0, 0.5), 0);
        assert_eq!(hole_count(10, 0.3), 3);
        assert_eq!(hole_count(10, 0.01), 1);
        assert_eq!(hole_count(10, 1.0), 10);
        assert_eq!(hole_count(15, 0.5), 8);
    }

    #[test]
    fn test_only_numbers_are_hidden() {
        let (solution, carved) = generated(Difficulty::Expert, [3; 32]);
        for (pos, cell) in carved.grid.iter() {
            match (*cell, solution.cells[pos]) {
                (CellState::Hole, Cell::Number(_))
                | (CellState::Blank, Cell::Blank)
                | (CellState::Equals, Cell::Equals) => {}
                (CellState::Given(a), Cell::Number(b)) => assert_eq!(a, b),
                (CellState::Operator(a), Cell::Operator(b)) => assert_eq!(a, b),
                (state, cell) => panic!("{pos}: {state:?} carved from {cell:?}"),
            }
        }
    }

    fn visible_operands(equation: &Equation, size: usize, holes: &[Position]) -> usize {
        equation
            .positions(size)
            .unwrap()
            .into_iter()
            .enumerate()
            .filter(|&(offset, pos)| {
                equation.slot_kind(offset) == Some(SlotKind::Operand) && !holes.contains(&pos)
            })
            .count()
    }

    #[test]
    fn test_hole_count_per_tier() {
        // Numeric cells: easy 8, medium 9, hard 15, expert 16.
        let expected = [2, 4, 8, 10];
        for (difficulty, count) in Difficulty::ALL.into_iter().zip(expected) {
            let (_, carved) = generated(difficulty, [9; 32]);
            assert_eq!(holes(&carved.grid).len(), count, "{difficulty}");
        }
    }

    #[test]
    fn test_every_equation_keeps_a_visible_operand() {
        for difficulty in Difficulty::ALL {
            for byte in 0..24 {
                let (solution, carved) = generated(difficulty, [byte; 32]);
                let size = solution.size();
                let holes = holes(&carved.grid);
                for equation in &solution.equations {
                    assert!(
                        visible_operands(equation, size, &holes) >= 1,
                        "{difficulty} seed {byte}: every operand of {equation} hidden"
                    );
                }
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn bank_matches_hidden_values(bytes in any::<[u8; 32]>(), tier in 0_usize..4) {
            let difficulty = Difficulty::ALL[tier];
            let (solution, carved) = generated(difficulty, bytes);
            let holes = holes(&carved.grid);
            prop_assert_eq!(holes.len(), carved.bank.len());

            let mut hidden: Vec<i64> = holes
                .iter()
                .map(|&pos| solution.cells[pos].as_number().unwrap())
                .collect();
            hidden.sort_unstable();
            prop_assert_eq!(carved.bank.to_vec(), hidden);

            let mut refilled = carved.grid.clone();
            for &pos in &holes {
                refilled[pos] = CellState::Given(solution.cells[pos].as_number().unwrap());
            }
            let restored = refilled.map(|_, state| match *state {
                CellState::Given(n) | CellState::Filled(n) => Cell::Number(n),
                CellState::Operator(op) => Cell::Operator(op),
                CellState::Equals => Cell::Equals,
                CellState::Blank | CellState::Hole => Cell::Blank,
            });
            prop_assert_eq!(&restored, &solution.cells);

            for equation in &solution.equations {
                prop_assert!(visible_operands(equation, solution.size(), &holes) >= 1);
            }
        }
    }
}
