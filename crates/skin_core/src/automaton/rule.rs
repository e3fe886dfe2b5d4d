//! Activator–inhibitor update rule.
//!
//! For a target cell, every cell of the grid (the target included) is
//! classified by its toroidal distance `d`:
//!
//! ```text
//! d <  R1          activator disc   -> N1
//! R1 <= d < R2     inhibitor ring   -> N2
//! d >= R2          ignored
//! ```
//!
//! `score = h + N1*J1 + N2*J2`; the cell becomes 1 when `score >= 0.0` and 0
//! otherwise. The scan touches all N² cells for every target, so a full sweep
//! is O(N⁴). That is the reference behavior and is kept as is.

use super::distance::distance;
use super::params::SimParams;
use super::{Cell, SkinGrid};

/// Live-cell counts in the two neighborhoods of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeighborSums {
    /// `N1`: live cells at distance `< R1`
    pub activator: u32,
    /// `N2`: live cells at distance in `[R1, R2)`
    pub inhibitor: u32,
}

/// Result of evaluating the rule at one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellUpdate {
    /// Value the cell should hold
    pub value: u8,
    /// Whether `value` differs from the cell's current value
    pub changed: bool,
}

/// Count live cells in the activator disc and inhibitor ring around `cell`.
pub fn neighbor_sums(
    grid: &SkinGrid,
    cell: Cell,
    inner_radius: usize,
    outer_radius: usize,
) -> NeighborSums {
    let size = grid.size();
    let mut sums = NeighborSums::default();

    for other in grid.cells() {
        let value = u32::from(grid.get(other));
        if value == 0 {
            continue;
        }
        let d = distance(cell, other, size);
        if d < inner_radius {
            sums.activator += value;
        } else if d < outer_radius {
            sums.inhibitor += value;
        }
    }

    sums
}

/// `h + N1*J1 + N2*J2`
#[inline]
pub fn score(params: &SimParams, sums: NeighborSums) -> f64 {
    params.bias
        + f64::from(sums.activator) * params.activator_weight
        + f64::from(sums.inhibitor) * params.inhibitor_weight
}

/// Evaluate the rule at `cell` against the current grid.
///
/// Does not modify the grid; the sweep writes the value back.
pub fn compute_new_value(grid: &SkinGrid, cell: Cell, params: &SimParams) -> CellUpdate {
    let sums = neighbor_sums(grid, cell, params.inner_radius, params.outer_radius);
    let value = u8::from(score(params, sums) >= 0.0);
    CellUpdate {
        value,
        changed: value != grid.get(cell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_weights(bias: f64) -> SimParams {
        SimParams::default()
            .with_bias(bias)
            .with_weights(0.0, 0.0)
            .with_radii(1, 2)
    }

    #[test]
    fn test_inner_disc_includes_self() {
        let mut grid = SkinGrid::new(5);
        let center = Cell::new(2, 2);
        grid.set(center, 1);

        let sums = neighbor_sums(&grid, center, 1, 2);
        assert_eq!(sums.activator, 1, "distance 0 < R1 counts the cell itself");
        assert_eq!(sums.inhibitor, 0);
    }

    #[test]
    fn test_ring_boundaries_are_half_open() {
        // 11x11 so no wrap interferes with distances up to 5
        let mut grid = SkinGrid::new(11);
        let center = Cell::new(5, 5);
        grid.set(Cell::new(5, 7), 1); // d = 2 == R1 -> ring
        grid.set(Cell::new(5, 6), 1); // d = 1 < R1 -> disc
        grid.set(Cell::new(8, 5), 1); // d = 3 == R2 -> ignored
        grid.set(Cell::new(6, 6), 1); // d = 2 -> ring

        let sums = neighbor_sums(&grid, center, 2, 3);
        assert_eq!(
            sums,
            NeighborSums {
                activator: 1,
                inhibitor: 2
            }
        );
    }

    #[test]
    fn test_sums_wrap_around_edges() {
        let mut grid = SkinGrid::new(10);
        grid.set(Cell::new(9, 9), 1); // d = 2 from (0,0) via both edges
        grid.set(Cell::new(0, 9), 1); // d = 1

        let sums = neighbor_sums(&grid, Cell::new(0, 0), 2, 3);
        assert_eq!(sums.activator, 1);
        assert_eq!(sums.inhibitor, 1);
    }

    #[test]
    fn test_score_combines_weights() {
        let params = SimParams::default()
            .with_bias(1.5)
            .with_weights(0.5, -0.5);
        let sums = NeighborSums {
            activator: 4,
            inhibitor: 10,
        };
        assert_eq!(score(&params, sums), 1.5 + 2.0 - 5.0);
    }

    #[test]
    fn test_zero_score_turns_cell_on() {
        let grid = SkinGrid::new(4);
        let update = compute_new_value(&grid, Cell::new(0, 0), &zero_weights(0.0));
        assert_eq!(
            update,
            CellUpdate {
                value: 1,
                changed: true
            }
        );
    }

    #[test]
    fn test_negative_score_turns_cell_off() {
        let grid = SkinGrid::filled(4, 1);
        let update = compute_new_value(&grid, Cell::new(1, 1), &zero_weights(-1.0));
        assert_eq!(
            update,
            CellUpdate {
                value: 0,
                changed: true
            }
        );
    }

    #[test]
    fn test_matching_target_is_not_a_change() {
        let on = SkinGrid::filled(4, 1);
        let update = compute_new_value(&on, Cell::new(3, 3), &zero_weights(1.0));
        assert_eq!(update.value, 1);
        assert!(!update.changed);

        let off = SkinGrid::new(4);
        let update = compute_new_value(&off, Cell::new(3, 3), &zero_weights(-1.0));
        assert_eq!(update.value, 0);
        assert!(!update.changed);
    }

    #[test]
    fn test_inhibition_outweighs_activation() {
        // All cells on in a 7x7 grid; R1 = 2 disc has 5 cells, R2 = 4 ring
        // (d in 2..4) has 20 cells.
        let grid = SkinGrid::filled(7, 1);
        let params = SimParams::default()
            .with_bias(0.0)
            .with_weights(1.0, -0.5)
            .with_radii(2, 4);

        let sums = neighbor_sums(&grid, Cell::new(3, 3), 2, 4);
        assert_eq!(sums.activator, 5);
        assert_eq!(sums.inhibitor, 20);

        let update = compute_new_value(&grid, Cell::new(3, 3), &params);
        assert_eq!(update.value, 0);
        assert!(update.changed);
    }

    #[test]
    fn test_does_not_mutate_grid() {
        let grid = SkinGrid::new(4);
        let before = grid.clone();
        let _ = compute_new_value(&grid, Cell::new(0, 0), &zero_weights(1.0));
        assert_eq!(grid, before);
    }
}
