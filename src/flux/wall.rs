//! Diffuse-reflection wall flux.
//!
//! Molecules hitting the wall are re-emitted with the Maxwellian of the wall
//! velocity and temperature. The emitted density is whatever makes the net
//! mass flux through the wall vanish. The boundary flux is the first-order
//! free transport of the resulting distribution over one step.

use crate::distribution::{conserved_moments, maxwellian_at};
use crate::mesh::{CellState, InterfaceState};
use crate::state::{PrimitiveState, local_velocity, to_global};
use crate::types::{Direction, Side};

use super::{FaceWorkspace, FluxContext};

/// Compute the fluxes of a wall face on `side` next to interior `cell`.
///
/// `wall` holds the wall velocity and inverse temperature in the global
/// frame; its density is ignored. Overwrites `face.flux`, `face.flux_h` and
/// `face.flux_b` in the same convention as
/// [`calc_flux_with_workspace`](super::calc_flux_with_workspace).
pub fn calc_wall_flux(
    wall: &PrimitiveState,
    cell: &CellState,
    face: &mut InterfaceState,
    side: Side,
    ctx: &FluxContext<'_>,
    ws: &mut FaceWorkspace,
) {
    let grid = ctx.grid;
    let ck = ctx.gas.ck;
    let weight = grid.weight();
    let n = grid.len();
    let (cosx, cosy) = (face.cosx, face.cosy);
    let dir: Direction = side.normal_direction();

    ws.rotate(grid, cosx, cosy);
    let (un, ut) = local_velocity(wall.u, wall.v, cosx, cosy);
    let unit_wall = PrimitiveState::new(1.0, un, ut, wall.lambda);

    // Outgoing half from the interior cell; `ws.delta` becomes 1 where the
    // molecule moves from the cell toward the wall
    let (offset, orientation) = if side.interior_is_left() {
        (0.5 * cell.length[dir], 1.0)
    } else {
        (-0.5 * cell.length[dir], -1.0)
    };
    let sh = &cell.sh[dir];
    let sb = &cell.sb[dir];
    let mut incident = 0.0;
    let mut emitted = 0.0;
    for k in 0..n {
        let vn = ws.vn[k];
        let outgoing = if orientation * vn > 0.0 { 1.0 } else { 0.0 };
        ws.delta[k] = outgoing;
        ws.h[k] = cell.h[k] + offset * sh[k];
        ws.b[k] = cell.b[k] + offset * sb[k];

        let (h_wall, _) = maxwellian_at(vn, ws.vt[k], &unit_wall, ck);
        incident += weight[k] * vn * ws.h[k] * outgoing;
        emitted += weight[k] * vn * h_wall * (1.0 - outgoing);
    }
    let rho_wall = -incident / emitted;
    let wall_prim = PrimitiveState::new(rho_wall, un, ut, wall.lambda);

    // Distribution at the wall, transported over one step
    let scale = ctx.dt * face.length;
    for k in 0..n {
        let d = ws.delta[k];
        let (h_wall, b_wall) = maxwellian_at(ws.vn[k], ws.vt[k], &wall_prim, ck);
        ws.h[k] = ws.h[k] * d + h_wall * (1.0 - d);
        ws.b[k] = ws.b[k] * d + b_wall * (1.0 - d);
        face.flux_h[k] = scale * ws.vn[k] * ws.h[k];
        face.flux_b[k] = scale * ws.vn[k] * ws.b[k];
    }

    // ⟨vn ψ f⟩ = moments of vn·f
    for k in 0..n {
        ws.sh[k] = ws.vn[k] * ws.h[k];
        ws.sb[k] = ws.vn[k] * ws.b[k];
    }
    let flux = conserved_moments(weight, &ws.vn, &ws.vt, &ws.sh, &ws.sb);
    face.flux = to_global(&flux, cosx, cosy) * scale;
}
