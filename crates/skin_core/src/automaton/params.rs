//! Simulation parameters.

/// Side length of the grid used by the command-line tool.
pub const GRID_SIZE: usize = 100;

/// Step budget when none is given.
pub const DEFAULT_MAX_STEPS: usize = 25;

/// Immutable configuration for one run.
///
/// `inner_radius` bounds the activator disc (distance `< inner_radius`),
/// `outer_radius` bounds the inhibitor ring (`inner_radius <= distance <
/// outer_radius`).
#[derive(Debug, Clone, PartialEq)]
pub struct SimParams {
    /// Bias field `h`
    pub bias: f64,
    /// Activator coupling `J1`
    pub activator_weight: f64,
    /// Inhibitor coupling `J2`
    pub inhibitor_weight: f64,
    /// `R1`
    pub inner_radius: usize,
    /// `R2`
    pub outer_radius: usize,
    /// Maximum number of completed steps
    pub max_steps: usize,
    /// Base name of the output image (without extension)
    pub output_id: String,
}

impl Default for SimParams {
    fn default() -> Self {
        Self {
            bias: 1.5,
            activator_weight: 0.5,
            inhibitor_weight: -0.5,
            inner_radius: 10,
            outer_radius: 14,
            max_steps: DEFAULT_MAX_STEPS,
            output_id: "output".to_string(),
        }
    }
}

impl SimParams {
    /// Set the bias field `h`.
    pub fn with_bias(mut self, bias: f64) -> Self {
        self.bias = bias;
        self
    }

    /// Set the activator and inhibitor couplings `J1`, `J2`.
    pub fn with_weights(mut self, activator: f64, inhibitor: f64) -> Self {
        self.activator_weight = activator;
        self.inhibitor_weight = inhibitor;
        self
    }

    /// Set the radii `R1`, `R2`.
    pub fn with_radii(mut self, inner: usize, outer: usize) -> Self {
        self.inner_radius = inner;
        self.outer_radius = outer;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_output_id(mut self, output_id: impl Into<String>) -> Self {
        self.output_id = output_id.into();
        self
    }

    /// True when `R1 >= R2`, i.e. the inhibitor ring contains no cells.
    pub fn inhibitor_ring_is_empty(&self) -> bool {
        self.inner_radius >= self.outer_radius
    }
}
