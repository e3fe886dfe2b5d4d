//! Simulation loop for the activator–inhibitor automaton.
//!
//! The simulation owns everything a run needs (grid, parameters, generator,
//! sweep order, counters) and advances a two-state machine:
//!
//! ```text
//! RUNNING --sweep: changes > threshold && step < max_steps--> RUNNING (step += 1)
//! RUNNING --otherwise--------------------------------------> STOPPED
//! ```
//!
//! A run therefore stops when the grid is stable (a sweep flips at most
//! `STABILITY_THRESHOLD` cells) or when the step budget is used up.

use tracing::{debug, info, trace, warn};

use super::params::SimParams;
use super::rng::{CaRng, StdRandom};
use super::sweep::Sweeper;
use super::SkinGrid;

/// A sweep flipping at most this many cells counts as stable.
pub const STABILITY_THRESHOLD: usize = 5;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The last sweep changed no more than the stability threshold.
    Stable,
    /// `max_steps` steps completed without stabilizing.
    StepBudget,
}

/// Simulation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped(StopReason),
}

/// Outcome of `Simulation::run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Completed steps (never exceeds `max_steps`)
    pub steps: usize,
    /// Sweeps executed, including the final one that stopped the run
    pub sweeps: usize,
    /// Flips in the final sweep
    pub last_change_count: usize,
    pub reason: StopReason,
}

/// Runs the automaton on one grid.
///
/// # Example
///
/// ```
/// use skin_core::automaton::{SimParams, Simulation, SkinGrid, StdRandom, StopReason};
///
/// let params = SimParams::default()
///     .with_bias(1.0)
///     .with_weights(0.0, 0.0)
///     .with_radii(1, 2);
/// let grid = SkinGrid::new(4);
/// let mut sim = Simulation::new(grid, params, Box::new(StdRandom::from_u64_seed(0)));
///
/// let summary = sim.run();
/// assert_eq!(summary.reason, StopReason::Stable);
/// assert_eq!(sim.grid().count_ones(), 16);
/// ```
pub struct Simulation {
    grid: SkinGrid,
    params: SimParams,
    random: Box<dyn CaRng>,
    sweeper: Sweeper,
    /// Completed steps
    step: usize,
    /// Sweeps executed so far
    sweeps: usize,
    /// Flips in the most recent sweep
    last_change_count: Option<usize>,
    stability_threshold: usize,
    state: RunState,
}

impl Simulation {
    /// Create a simulation over an existing grid.
    pub fn new(grid: SkinGrid, params: SimParams, random: Box<dyn CaRng>) -> Self {
        if params.inhibitor_ring_is_empty() {
            warn!(
                inner_radius = params.inner_radius,
                outer_radius = params.outer_radius,
                "inner radius is not below outer radius; inhibitor ring is empty"
            );
        }

        let sweeper = Sweeper::new(&grid);
        Self {
            grid,
            params,
            random,
            sweeper,
            step: 0,
            sweeps: 0,
            last_change_count: None,
            stability_threshold: STABILITY_THRESHOLD,
            state: RunState::Running,
        }
    }

    /// Create a simulation on a random `size`×`size` grid.
    ///
    /// The same seed drives the initial grid and every sweep order, so two
    /// simulations built from the same arguments end in the same grid.
    pub fn seeded(params: SimParams, size: usize, seed: u64) -> Self {
        let mut random = StdRandom::from_u64_seed(seed);
        let grid = SkinGrid::random(size, &mut random);
        info!(size, seed, "initialized grid");
        Self::new(grid, params, Box::new(random))
    }

    /// Override the change count at or below which a sweep counts as stable.
    pub fn with_stability_threshold(mut self, threshold: usize) -> Self {
        self.stability_threshold = threshold;
        self
    }

    /// Execute one iteration of the loop: a sweep followed by the
    /// termination check.
    ///
    /// Returns `true` while the simulation keeps running. Once stopped it
    /// returns `false` without sweeping again.
    pub fn step(&mut self) -> bool {
        if self.state != RunState::Running {
            return false;
        }

        let changes = self
            .sweeper
            .sweep(&mut self.grid, &self.params, self.random.as_mut());
        self.sweeps += 1;
        self.last_change_count = Some(changes);

        if changes <= self.stability_threshold {
            info!(step = self.step, changes, "grid stabilized");
            self.state = RunState::Stopped(StopReason::Stable);
        } else if self.step >= self.params.max_steps {
            info!(
                max_steps = self.params.max_steps,
                changes, "max step count reached"
            );
            self.state = RunState::Stopped(StopReason::StepBudget);
        } else {
            self.step += 1;
            info!(step = self.step, changes, "completed step");
        }

        trace!("grid after sweep {}:\n{}", self.sweeps, self.grid);
        self.is_running()
    }

    /// Run until the loop stops.
    pub fn run(&mut self) -> RunSummary {
        info!(
            size = self.grid.size(),
            max_steps = self.params.max_steps,
            "starting system"
        );

        let reason = loop {
            match self.state {
                RunState::Stopped(reason) => break reason,
                RunState::Running => {
                    self.step();
                }
            }
        };

        let summary = self.summary(reason);
        debug!(?summary, "run finished");
        summary
    }

    fn summary(&self, reason: StopReason) -> RunSummary {
        RunSummary {
            steps: self.step,
            sweeps: self.sweeps,
            last_change_count: self.last_change_count.unwrap_or(0),
            reason,
        }
    }

    pub fn grid(&self) -> &SkinGrid {
        &self.grid
    }

    pub fn into_grid(self) -> SkinGrid {
        self.grid
    }

    pub fn params(&self) -> &SimParams {
        &self.params
    }

    /// Completed steps.
    pub fn step_count(&self) -> usize {
        self.step
    }

    /// Flips in the most recent sweep, `None` before the first sweep.
    pub fn last_change_count(&self) -> Option<usize> {
        self.last_change_count
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }
}
