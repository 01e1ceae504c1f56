//! Discrete velocity space.
//!
//! - [`VelocityGrid`]: quadrature nodes (u, v) and weights, built once per run
//! - [`VelocityField`]: dense row-major array over the grid (distributions,
//!   slopes, face fluxes)
//! - [`quadrature`]: 1D Newton-Cotes and Gauss-Hermite rules

mod field;
mod grid;
pub mod quadrature;

pub use field::VelocityField;
pub use grid::VelocityGrid;
