//! Boundary conditions of the rectangular domain.
//!
//! Each side carries one [`BoundaryCondition`]. Ghost cells are refilled
//! before every reconstruction:
//! - [`BoundaryCondition::Equilibrium`]: ghost holds the Maxwellian of a
//!   prescribed state; the boundary face uses the ordinary interface flux
//! - [`BoundaryCondition::DiffuseWall`]: ghost copies the interior cell (for
//!   slopes only); the boundary face uses the diffuse-reflection wall flux
//! - [`BoundaryCondition::ZeroGradient`]: ghost copies the interior cell;
//!   the boundary face uses the ordinary interface flux
//!
//! Ghost slopes are always zero.

use std::fmt;

use crate::gas::GasModel;
use crate::mesh::{CellState, StructuredMesh};
use crate::state::PrimitiveState;
use crate::types::{Side, SideBoundaries};
use crate::velocity::VelocityGrid;

/// Boundary condition of one side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryCondition {
    /// Far-field equilibrium at a fixed primitive state.
    Equilibrium(PrimitiveState),
    /// Diffuse-reflection wall with the given velocity and inverse
    /// temperature (density is ignored).
    DiffuseWall(PrimitiveState),
    /// Copy the neighbouring interior cell.
    ZeroGradient,
}

impl BoundaryCondition {
    /// Whether the boundary face flux comes from the wall model.
    #[inline]
    pub fn is_wall(&self) -> bool {
        matches!(self, BoundaryCondition::DiffuseWall(_))
    }

    /// Human-readable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryCondition::Equilibrium(_) => "equilibrium",
            BoundaryCondition::DiffuseWall(_) => "diffuse-wall",
            BoundaryCondition::ZeroGradient => "zero-gradient",
        }
    }

    /// Refill a ghost cell next to `interior`.
    pub fn fill_ghost(
        &self,
        ghost: &mut CellState,
        interior: &CellState,
        grid: &VelocityGrid,
        gas: &GasModel,
    ) {
        match self {
            BoundaryCondition::Equilibrium(prim) => ghost.set_equilibrium(prim, grid, gas),
            BoundaryCondition::DiffuseWall(_) | BoundaryCondition::ZeroGradient => {
                ghost.copy_state_from(interior);
                ghost.clear_slopes();
            }
        }
    }
}

impl fmt::Display for BoundaryCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Boundary conditions for all four sides.
pub type DomainBoundaries = SideBoundaries<BoundaryCondition>;

/// Lid-driven cavity: diffuse walls at `wall` temperature, the north wall
/// moving with velocity `lid_u` along +x.
pub fn lid_driven_cavity(lid_u: f64, wall: PrimitiveState) -> DomainBoundaries {
    let rest = PrimitiveState { u: 0.0, v: 0.0, ..wall };
    let lid = PrimitiveState { u: lid_u, v: 0.0, ..wall };
    SideBoundaries::uniform(BoundaryCondition::DiffuseWall(rest))
        .with(Side::North, BoundaryCondition::DiffuseWall(lid))
}

/// Mutable ghost and shared interior cell from one slice.
fn ghost_and_interior(
    cells: &mut [CellState],
    ghost: usize,
    interior: usize,
) -> (&mut CellState, &CellState) {
    debug_assert_ne!(ghost, interior);
    if ghost < interior {
        let (lo, hi) = cells.split_at_mut(interior);
        (&mut lo[ghost], &hi[0])
    } else {
        let (lo, hi) = cells.split_at_mut(ghost);
        (&mut hi[0], &lo[interior])
    }
}

/// Refill every ghost cell of the mesh.
pub fn apply_boundaries(
    mesh: &mut StructuredMesh,
    bcs: &DomainBoundaries,
    grid: &VelocityGrid,
    gas: &GasModel,
) {
    let topo = mesh.topology();
    for (side, bc) in bcs.iter() {
        for k in 0..topo.boundary_len(side) {
            let bf = topo.boundary_face(side, k);
            let (ghost, interior) = ghost_and_interior(mesh.cells_mut(), bf.ghost, bf.interior);
            bc.fill_ghost(ghost, interior, grid, gas);
        }
    }
}
