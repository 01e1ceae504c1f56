//! Run-time parameters and per-step driver state.

use std::sync::Arc;

use crate::error::{Result, UgksError};
use crate::gas::GasModel;
use crate::reconstruction::StandardLimiter;
use crate::velocity::VelocityGrid;

// =============================================================================
// Simulation Parameters
// =============================================================================

/// Immutable parameters shared by every step of a run.
#[derive(Clone, Debug)]
pub struct SimulationParams {
    /// Discrete velocity grid, shared with the mesh builder.
    pub grid: Arc<VelocityGrid>,
    /// Gas constants.
    pub gas: GasModel,
    /// Slope limiter for the distribution reconstruction.
    pub limiter: StandardLimiter,
    /// CFL number for the time step.
    pub cfl: f64,
}

impl SimulationParams {
    /// Parameters with the Van Leer limiter and CFL 0.8.
    pub fn new(grid: impl Into<Arc<VelocityGrid>>, gas: GasModel) -> Self {
        Self {
            grid: grid.into(),
            gas,
            limiter: StandardLimiter::default(),
            cfl: 0.8,
        }
    }

    /// Set the slope limiter.
    pub fn with_limiter(mut self, limiter: StandardLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    /// Set the CFL number.
    pub fn with_cfl(mut self, cfl: f64) -> Self {
        self.cfl = cfl;
        self
    }

    /// Reject a non-positive CFL number or an empty velocity grid.
    pub fn validate(&self) -> Result<()> {
        if !(self.cfl > 0.0 && self.cfl.is_finite()) {
            return Err(UgksError::invalid_config(format!(
                "CFL number must be positive, got {}",
                self.cfl
            )));
        }
        if self.grid.is_empty() {
            return Err(UgksError::invalid_config("velocity grid has no nodes"));
        }
        Ok(())
    }
}

// =============================================================================
// Run Configuration
// =============================================================================

/// Stopping and reporting criteria of [`Solver::run`](super::Solver::run).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunConfig {
    /// Maximum number of steps.
    pub max_iterations: usize,
    /// Stop once every residual component falls below this value.
    pub residual_tolerance: f64,
    /// Log progress every this many steps (0 disables).
    pub report_interval: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
            residual_tolerance: 1e-8,
            report_interval: 1000,
        }
    }
}

impl RunConfig {
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_residual_tolerance(mut self, residual_tolerance: f64) -> Self {
        self.residual_tolerance = residual_tolerance;
        self
    }

    pub fn with_report_interval(mut self, report_interval: usize) -> Self {
        self.report_interval = report_interval;
        self
    }
}

// =============================================================================
// Step State
// =============================================================================

/// Mutable state of the time march, owned by the driver.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StepState {
    /// Time step of the last step.
    pub dt: f64,
    /// Steps taken so far.
    pub iteration: usize,
    /// Accumulated simulation time.
    pub time: f64,
    /// Residual of each conservative component after the last step.
    pub residual: [f64; 4],
}

impl StepState {
    /// Largest residual component.
    #[inline]
    pub fn max_residual(&self) -> f64 {
        self.residual.iter().fold(0.0, |m, r| m.max(*r))
    }
}
