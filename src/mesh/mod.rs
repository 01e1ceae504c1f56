//! Structured finite-volume mesh.
//!
//! - [`CellState`]: geometry, conservative state, distributions and slopes
//! - [`InterfaceState`]: face geometry and the fluxes of the current step
//! - [`StructuredMesh`]: uniform rectangle with a one-cell ghost ring
//! - [`MeshTopology`]: the index arithmetic of a [`StructuredMesh`]

mod cell;
mod structured;

pub use cell::{CellState, InterfaceState};
pub use structured::{BoundaryFace, MeshTopology, StructuredMesh};
