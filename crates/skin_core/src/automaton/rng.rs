//! Random number generator abstraction for the automaton.
//!
//! The simulation never reaches for a global generator. Everything that needs
//! randomness (initial grid, sweep order) takes a `&mut dyn CaRng`, so tests
//! can pin a seed and get bit-identical runs.
//!
//! - `StdRandom`: wraps `rand::rngs::StdRng`, seedable from a `u64`
//!
//! # Example
//!
//! ```
//! use skin_core::automaton::rng::{shuffle_with_rng, CaRng, StdRandom};
//!
//! let mut rng = StdRandom::from_u64_seed(42);
//! let mut order: Vec<usize> = (0..10).collect();
//! shuffle_with_rng(&mut order, &mut rng);
//!
//! let mut sorted = order.clone();
//! sorted.sort();
//! assert_eq!(sorted, (0..10).collect::<Vec<_>>());
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Trait for random number generators driving the automaton.
///
/// Kept object-safe so it can be boxed inside `Simulation` and passed down
/// as `&mut dyn CaRng`.
pub trait CaRng {
    /// Returns a random double in [0.0, 1.0).
    fn next_double(&mut self) -> f64;

    /// Returns a random u64.
    fn next_u64(&mut self) -> u64;

    /// Returns a random usize in [0, max). Returns 0 when `max == 0`.
    fn next_usize_max(&mut self, max: usize) -> usize;

    /// Returns a random boolean.
    fn next_bool(&mut self) -> bool {
        self.next_double() < 0.5
    }
}

/// Shuffle a slice in place using the Fisher-Yates algorithm.
///
/// Every permutation is equally likely provided `next_usize_max` is uniform.
/// This is a free function since generic methods aren't dyn-compatible.
pub fn shuffle_with_rng<T>(slice: &mut [T], rng: &mut dyn CaRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_usize_max(i + 1);
        slice.swap(i, j);
    }
}

/// Standard Rust RNG wrapper using `rand::rngs::StdRng`.
#[derive(Clone, Debug)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Create from a u64 seed.
    pub fn from_u64_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl CaRng for StdRandom {
    fn next_double(&mut self) -> f64 {
        self.rng.gen()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.gen()
    }

    fn next_usize_max(&mut self, max: usize) -> usize {
        if max == 0 {
            return 0;
        }
        // gen_range is unbiased, unlike scaling next_double
        self.rng.gen_range(0..max)
    }
}
