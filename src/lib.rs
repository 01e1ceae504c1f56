//! # ugks-rs
//!
//! Unified gas-kinetic scheme (UGKS) with the Shakhov collision model for
//! rarefied and continuum flows on 2D structured meshes.
//!
//! This crate provides the building blocks of the scheme:
//! - Discrete velocity grids (Newton-Cotes, Gauss-Hermite)
//! - Maxwellian and Shakhov equilibria of the reduced distributions `h`, `b`
//! - Half- and full-range Maxwellian moments
//! - Limited reconstruction of the distributions
//! - The UGKS interface flux and the diffuse-reflection wall flux
//! - A structured mesh with ghost cells and per-side boundary conditions
//! - A steady-state driver (CFL time step, implicit Shakhov update, residual)
//!
//! # Example
//!
//! ```ignore
//! use ugks_rs::{
//!     GasModel, PrimitiveState, RunConfig, SimulationParams, Solver, StructuredMesh,
//!     VelocityGrid, lid_driven_cavity,
//! };
//!
//! let grid = VelocityGrid::newton_cotes(28, -5.0, 5.0, 28, -5.0, 5.0)?;
//! let mesh = StructuredMesh::uniform_rectangle(0.0, 1.0, 0.0, 1.0, 45, 45, &grid)?;
//! let rest = PrimitiveState::new(1.0, 0.0, 0.0, 1.0);
//! let params = SimulationParams::new(grid, GasModel::default());
//! let mut solver = Solver::new(params, mesh, lid_driven_cavity(0.15, rest))?;
//! solver.initialize_uniform(&rest);
//! let summary = solver.run(&RunConfig::default())?;
//! println!("{summary}");
//! ```

pub mod boundary;
pub mod distribution;
pub mod error;
pub mod flux;
pub mod gas;
pub mod mesh;
pub mod moments;
pub mod reconstruction;
pub mod solver;
pub mod state;
pub mod types;
pub mod velocity;

// Re-export main types for convenience
pub use boundary::{BoundaryCondition, DomainBoundaries, apply_boundaries, lid_driven_cavity};
pub use error::{Result, UgksError};
pub use flux::{
    FaceWorkspace, FluxContext, MicroSlope, TimeWeights, calc_flux, calc_flux_with_workspace,
    calc_wall_flux, micro_slope,
};
pub use gas::{GasConfig, GasModel, MolecularModel};
pub use mesh::{CellState, InterfaceState, MeshTopology, StructuredMesh};
pub use moments::{MomentTables, moment_auvxi, moment_uvxi};
pub use reconstruction::{
    FirstOrder, Minmod, SlopeLimiter, StandardLimiter, VanLeer, reconstruct, van_leer_slope,
};
pub use solver::{RunConfig, RunSummary, SimulationParams, Solver, StepState};
pub use state::{ConservedState, PrimitiveState, to_global, to_local};
pub use types::{Direction, Side, SideBoundaries};
pub use velocity::{VelocityField, VelocityGrid};
