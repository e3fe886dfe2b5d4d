//! Toroidal Manhattan distance.
//!
//! On an N×N torus each axis wraps, so the gap between two coordinates along
//! one axis is the shorter of the direct gap and the gap going around the
//! edge. The distance is the sum of both axis gaps, which puts it in
//! `[0, N]`.
//!
//! # Examples
//!
//! ```
//! use skin_core::automaton::{distance, Cell};
//!
//! // 0 and 9 are neighbors across the edge of a 10-wide torus.
//! assert_eq!(distance(Cell::new(0, 0), Cell::new(0, 9), 10), 1);
//! assert_eq!(distance(Cell::new(2, 3), Cell::new(5, 1), 10), 5);
//! ```

use super::Cell;

/// Shortest gap between two coordinates on a ring of length `size`.
#[inline]
fn axis_distance(a: usize, b: usize, size: usize) -> usize {
    let d = a.abs_diff(b);
    if d > size / 2 {
        size - d
    } else {
        d
    }
}

/// Toroidal L1 distance between `a` and `b` on a `size`×`size` grid.
///
/// Both coordinates must lie inside the grid.
#[inline]
pub fn distance(a: Cell, b: Cell, size: usize) -> usize {
    axis_distance(a.row, b.row, size) + axis_distance(a.col, b.col, size)
}
