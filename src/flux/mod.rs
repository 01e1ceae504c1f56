//! Interface fluxes of the unified gas-kinetic scheme.
//!
//! - [`calc_flux`]: UGKS flux between two cells with the Shakhov collision
//!   model, for both the macroscopic state and the discrete distributions
//! - [`calc_wall_flux`]: diffuse-reflection wall
//!
//! Supporting pieces:
//! - [`MicroSlope`]: equilibrium slopes from macroscopic gradients
//! - [`TimeWeights`]: time integrals of the integral-solution kernels
//! - [`FaceWorkspace`]: per-worker scratch buffers
//!
//! # Conventions
//!
//! Faces carry a unit normal `(cosx, cosy)` pointing from the left cell to
//! the right cell. All fluxes are integrated over one time step and scaled by
//! the face length, so a cell update only divides by its area. A positive
//! flux moves quantities from left to right.

mod micro_slope;
mod time_weights;
mod ugks;
mod wall;
mod workspace;

pub use micro_slope::{MicroSlope, micro_slope};
pub use time_weights::TimeWeights;
pub use ugks::{FluxContext, calc_flux, calc_flux_with_workspace, equilibrium_flux};
pub use wall::calc_wall_flux;
pub use workspace::FaceWorkspace;
