//! One randomized pass over the grid.
//!
//! Each sweep reshuffles the visit order, then evaluates the rule at every
//! cell and writes the result straight back into the grid. Updates are
//! sequential, not double-buffered: a cell visited late in the sweep sees the
//! new values of cells visited earlier. Parallelizing the loop would change
//! the result for a given seed.

use tracing::debug;

use super::params::SimParams;
use super::rng::{shuffle_with_rng, CaRng};
use super::rule::compute_new_value;
use super::{Cell, SkinGrid};

/// Owns the visit order, which is built once and reshuffled every sweep.
#[derive(Debug, Clone)]
pub struct Sweeper {
    order: Vec<Cell>,
}

impl Sweeper {
    /// Create a sweeper covering every cell of `grid`.
    pub fn new(grid: &SkinGrid) -> Self {
        Self {
            order: grid.cells().collect(),
        }
    }

    /// Visit order used by the most recent sweep.
    pub fn order(&self) -> &[Cell] {
        &self.order
    }

    /// Run one sweep and return the number of cells that flipped.
    pub fn sweep(
        &mut self,
        grid: &mut SkinGrid,
        params: &SimParams,
        rng: &mut dyn CaRng,
    ) -> usize {
        debug_assert_eq!(self.order.len(), grid.len());

        shuffle_with_rng(&mut self.order, rng);

        let mut changes = 0;
        for &cell in &self.order {
            let update = compute_new_value(grid, cell, params);
            if update.changed {
                grid.set(cell, update.value);
                changes += 1;
            }
        }

        debug!(changes, cells = self.order.len(), "sweep finished");
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::rng::StdRandom;

    #[test]
    fn test_sweep_turns_all_cells_on() {
        let mut grid = SkinGrid::new(4);
        let params = SimParams::default()
            .with_bias(1.0)
            .with_weights(0.0, 0.0)
            .with_radii(1, 2);
        let mut sweeper = Sweeper::new(&grid);
        let mut rng = StdRandom::from_u64_seed(1);

        assert_eq!(sweeper.sweep(&mut grid, &params, &mut rng), 16);
        assert_eq!(grid.count_ones(), 16);
        assert_eq!(sweeper.sweep(&mut grid, &params, &mut rng), 0);
    }

    #[test]
    fn test_sweep_visits_every_cell_once() {
        let grid = SkinGrid::new(6);
        let mut g = grid.clone();
        let mut sweeper = Sweeper::new(&grid);
        let mut rng = StdRandom::from_u64_seed(3);
        sweeper.sweep(&mut g, &SimParams::default(), &mut rng);

        let mut visited: Vec<Cell> = sweeper.order().to_vec();
        visited.sort_by_key(|c| (c.row, c.col));
        let expected: Vec<Cell> = grid.cells().collect();
        assert_eq!(visited, expected);
    }

    #[test]
    fn test_change_count_matches_grid_diff() {
        let mut rng = StdRandom::from_u64_seed(77);
        let mut grid = SkinGrid::random(12, &mut rng);
        let params = SimParams::default().with_radii(2, 4);
        let mut sweeper = Sweeper::new(&grid);

        for _ in 0..4 {
            let before = grid.clone();
            let changes = sweeper.sweep(&mut grid, &params, &mut rng);
            assert_eq!(changes, before.diff_count(&grid));
        }
    }

    /// Fisher-Yates with `j == i` at every draw leaves the order untouched,
    /// so sweeps visit cells in row-major order.
    struct RowMajorOrder;

    impl CaRng for RowMajorOrder {
        fn next_double(&mut self) -> f64 {
            0.0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn next_usize_max(&mut self, max: usize) -> usize {
            max.saturating_sub(1)
        }
    }

    #[test]
    fn test_updates_are_visible_within_a_sweep() {
        // 3x3 torus, R1 = 2 covers the cell and its 4 orthogonal neighbors.
        // A lone live center with h = -0.5, J1 = 1: any cell with a live
        // disc neighbor turns on.
        let params = SimParams::default()
            .with_bias(-0.5)
            .with_weights(1.0, 0.0)
            .with_radii(2, 3);

        let mut grid = SkinGrid::new(3);
        grid.set(Cell::new(1, 1), 1);
        let mut sweeper = Sweeper::new(&grid);

        let changes = sweeper.sweep(&mut grid, &params, &mut RowMajorOrder);

        let expected_order: Vec<Cell> = grid.cells().collect();
        assert_eq!(sweeper.order(), expected_order.as_slice());

        // Evaluated against the pre-sweep grid only the 4 orthogonal
        // neighbors of the center would turn on. In place, (0,2) sees the
        // freshly lit (0,1), and the bottom row sees (1,0) and (1,2).
        // (0,0) is visited first, while its whole disc is still 0.
        assert_eq!(changes, 7);
        assert_eq!(
            grid,
            SkinGrid::from_rows(&[vec![0, 1, 1], vec![1, 1, 1], vec![1, 1, 1]]).unwrap()
        );
    }

    #[test]
    fn test_same_seed_same_result() {
        let params = SimParams::default().with_radii(2, 4);
        let run = |seed: u64| {
            let mut rng = StdRandom::from_u64_seed(seed);
            let mut grid = SkinGrid::random(10, &mut rng);
            let mut sweeper = Sweeper::new(&grid);
            sweeper.sweep(&mut grid, &params, &mut rng);
            grid
        };
        assert_eq!(run(5), run(5));
    }
}
