//! Time-marching driver.
//!
//! - [`SimulationParams`], [`RunConfig`], [`StepState`]: parameters and
//!   march state
//! - [`Solver`]: boundaries, reconstruction, fluxes and update in order
//! - [`diagnostics`]: residuals and run summaries

mod config;
pub mod diagnostics;
mod ugks;

pub use config::{RunConfig, SimulationParams, StepState};
pub use diagnostics::{ResidualAccumulator, RunSummary, residual};
pub use ugks::Solver;
