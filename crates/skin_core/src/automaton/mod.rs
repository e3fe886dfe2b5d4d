//! Activator–inhibitor cellular automaton.
//!
//! A square, toroidal grid of binary cells is repeatedly swept in random
//! order. Each cell looks at every other cell: live cells close by (the
//! activator disc) push it towards 1, live cells in the surrounding ring (the
//! inhibitor ring) push it towards 0. Left to settle, the grid forms spots
//! and stripes that look like animal skin.
//!
//! This module provides:
//! - `SkinGrid`: the binary grid state
//! - `distance`: toroidal Manhattan distance
//! - `rule`: the per-cell activation rule
//! - `sweep`: one randomized in-place pass over the grid
//! - `simulation`: the run loop and its stopping policy
//! - `pgm`: plain-text PGM export of the final grid
//!
//! ## Example
//!
//! ```
//! use skin_core::automaton::{SimParams, Simulation};
//!
//! let params = SimParams::default().with_radii(2, 3).with_max_steps(3);
//! let mut sim = Simulation::seeded(params, 12, 42);
//! let summary = sim.run();
//! assert!(summary.steps <= 3);
//! ```

pub mod distance;
pub mod params;
pub mod pgm;
pub mod rng;
pub mod rule;
pub mod simulation;
pub mod sweep;

pub use distance::distance;
pub use params::{SimParams, DEFAULT_MAX_STEPS, GRID_SIZE};
pub use pgm::{export, save_pgm, write_pgm, ExportError, OFF_INTENSITY, ON_INTENSITY};
pub use rng::{shuffle_with_rng, CaRng, StdRandom};
pub use rule::{compute_new_value, neighbor_sums, score, CellUpdate, NeighborSums};
pub use simulation::{RunState, RunSummary, Simulation, StopReason, STABILITY_THRESHOLD};
pub use sweep::Sweeper;

use std::fmt;
use thiserror::Error;

/// Error type for grid construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The grid has no rows.
    #[error("grid must have at least one row")]
    Empty,
    /// A row's length differs from the number of rows.
    #[error("row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// A cell value other than 0 or 1.
    #[error("cell ({row}, {col}) holds {value}, expected 0 or 1")]
    NotBinary { row: usize, col: usize, value: u8 },
}

/// A grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Square grid of binary cells with toroidal topology.
///
/// Wraparound only exists in the distance metric; storage is a plain flat
/// array indexed `col + row * size`.
///
/// # Invariants
///
/// - every entry of `state` is 0 or 1
/// - `size` never changes after construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinGrid {
    state: Vec<u8>,
    size: usize,
}

impl SkinGrid {
    /// Create a `size`×`size` grid with every cell at 0.
    pub fn new(size: usize) -> Self {
        Self::filled(size, 0)
    }

    /// Create a grid with every cell at `value` (any non-zero value means 1).
    pub fn filled(size: usize, value: u8) -> Self {
        Self {
            state: vec![u8::from(value != 0); size * size],
            size,
        }
    }

    /// Create a grid where each cell is independently 0 or 1 with equal odds.
    pub fn random(size: usize, rng: &mut dyn CaRng) -> Self {
        let state = (0..size * size).map(|_| u8::from(rng.next_bool())).collect();
        Self { state, size }
    }

    /// Build a grid from explicit rows.
    ///
    /// ```
    /// use skin_core::automaton::{Cell, SkinGrid};
    ///
    /// let grid = SkinGrid::from_rows(&[vec![1, 0], vec![0, 1]]).unwrap();
    /// assert_eq!(grid.get(Cell::new(0, 0)), 1);
    /// assert_eq!(grid.get(Cell::new(0, 1)), 0);
    /// ```
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut state = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if value > 1 {
                    return Err(GridError::NotBinary { row, col, value });
                }
                state.push(value);
            }
        }

        Ok(Self { state, size })
    }

    /// Side length N.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (N²).
    #[inline]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        debug_assert!(cell.row < self.size && cell.col < self.size);
        cell.col + cell.row * self.size
    }

    /// Value at `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid.
    #[inline]
    pub fn get(&self, cell: Cell) -> u8 {
        self.state[self.index(cell)]
    }

    /// Set the value at `cell`. Non-zero values are stored as 1.
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid.
    #[inline]
    pub fn set(&mut self, cell: Cell, value: u8) {
        let idx = self.index(cell);
        self.state[idx] = u8::from(value != 0);
    }

    /// All coordinates in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let size = self.size;
        (0..size).flat_map(move |row| (0..size).map(move |col| Cell::new(row, col)))
    }

    /// Flat row-major view of the state.
    pub fn state(&self) -> &[u8] {
        &self.state
    }

    /// One row of the grid.
    pub fn row(&self, row: usize) -> &[u8] {
        let start = row * self.size;
        &self.state[start..start + self.size]
    }

    /// Number of cells holding 1.
    pub fn count_ones(&self) -> usize {
        self.state.iter().filter(|&&v| v == 1).count()
    }

    /// Number of cells whose value differs from `other`.
    ///
    /// Grids of different sizes differ everywhere; the larger cell count is
    /// returned.
    pub fn diff_count(&self, other: &SkinGrid) -> usize {
        if self.size != other.size {
            return self.len().max(other.len());
        }
        self.state
            .iter()
            .zip(&other.state)
            .filter(|(a, b)| a != b)
            .count()
    }
}

impl fmt::Display for SkinGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            let line = self
                .row(row)
                .iter()
                .map(|v| v.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
