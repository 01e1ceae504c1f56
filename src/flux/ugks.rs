//! UGKS interface flux with the Shakhov collision model.
//!
//! The flux at an interface is the time integral over one step of the
//! integral solution of the kinetic equation,
//!
//! ```text
//! f(0, t) = (1 - e^(-t/τ)) g⁺ + (terms in the equilibrium slopes)
//!         + e^(-t/τ) f₀(-u t)
//! ```
//!
//! where `g⁺` is the Shakhov equilibrium built from the interface state and
//! `f₀` is the upwind reconstruction of the initial distribution. The
//! equilibrium part is integrated analytically through [`crate::moments`];
//! the non-equilibrium part (initial distribution and Shakhov correction) is
//! summed over the velocity grid.
//!
//! All work happens in the face frame (vn, vt); the macroscopic flux is
//! rotated back at the end.

use crate::distribution::{conserved_moments, heat_flux, maxwellian_at, shakhov_at};
use crate::gas::GasModel;
use crate::mesh::{CellState, InterfaceState};
use crate::moments::{MomentTables, moment_auvxi, moment_uvxi};
use crate::state::{ConservedState, PrimitiveState, to_global, to_local};
use crate::types::Direction;
use crate::velocity::VelocityGrid;

use super::{FaceWorkspace, TimeWeights, micro_slope};

/// Shared, read-only inputs of a flux evaluation.
#[derive(Clone, Copy, Debug)]
pub struct FluxContext<'a> {
    /// Discrete velocity grid
    pub grid: &'a VelocityGrid,
    /// Gas constants
    pub gas: &'a GasModel,
    /// Time step
    pub dt: f64,
}

impl<'a> FluxContext<'a> {
    #[inline]
    pub fn new(grid: &'a VelocityGrid, gas: &'a GasModel, dt: f64) -> Self {
        Self { grid, gas, dt }
    }
}

/// Compute the fluxes of `face` between `left` and `right` along `dir`.
///
/// Allocates a fresh [`FaceWorkspace`]; sweeps should use
/// [`calc_flux_with_workspace`].
pub fn calc_flux(
    left: &CellState,
    right: &CellState,
    face: &mut InterfaceState,
    dir: Direction,
    ctx: &FluxContext<'_>,
) {
    let mut ws = FaceWorkspace::for_grid(ctx.grid);
    calc_flux_with_workspace(left, right, face, dir, ctx, &mut ws);
}

/// Compute the fluxes of `face` between `left` and `right` along `dir`,
/// reusing `ws` for scratch.
///
/// Overwrites `face.flux`, `face.flux_h` and `face.flux_b` with the
/// time-integrated fluxes over `ctx.dt`, scaled by the face length, with the
/// macroscopic flux in the global frame. Non-physical interface states
/// propagate as NaN.
pub fn calc_flux_with_workspace(
    left: &CellState,
    right: &CellState,
    face: &mut InterfaceState,
    dir: Direction,
    ctx: &FluxContext<'_>,
    ws: &mut FaceWorkspace,
) {
    let grid = ctx.grid;
    let gas = ctx.gas;
    let weight = grid.weight();
    let n = grid.len();
    let (cosx, cosy) = (face.cosx, face.cosy);

    // Upwind reconstruction of the initial distribution at the face
    ws.rotate(grid, cosx, cosy);
    let (len_l, len_r) = (left.length[dir], right.length[dir]);
    let (sh_l, sb_l) = (&left.sh[dir], &left.sb[dir]);
    let (sh_r, sb_r) = (&right.sh[dir], &right.sb[dir]);
    for k in 0..n {
        let d = ws.delta[k];
        let hl = left.h[k] + 0.5 * len_l * sh_l[k];
        let bl = left.b[k] + 0.5 * len_l * sb_l[k];
        let hr = right.h[k] - 0.5 * len_r * sh_r[k];
        let br = right.b[k] - 0.5 * len_r * sb_r[k];
        ws.h[k] = hl * d + hr * (1.0 - d);
        ws.b[k] = bl * d + br * (1.0 - d);
        ws.sh[k] = sh_l[k] * d + sh_r[k] * (1.0 - d);
        ws.sb[k] = sb_l[k] * d + sb_r[k] * (1.0 - d);
    }

    // Interface equilibrium state and heat flux
    let w = conserved_moments(weight, &ws.vn, &ws.vt, &ws.h, &ws.b);
    let prim = gas.to_primitive(&w);
    let q = heat_flux(weight, &ws.vn, &ws.vt, &ws.h, &ws.b, &prim);

    // Spatial micro-slopes on either side
    let w_l = to_local(&left.w, cosx, cosy);
    let w_r = to_local(&right.w, cosx, cosy);
    let a_l = micro_slope(&prim, &((w - w_l) * (2.0 / len_l)), gas.ck);
    let a_r = micro_slope(&prim, &((w_r - w) * (2.0 / len_r)), gas.ck);

    // Temporal micro-slope from compatibility
    let m = MomentTables::new(&prim, gas.ck);
    let mau_l = moment_auvxi(&a_l.0, &m.mu_l, &m.mv, &m.mxi, 1, 0);
    let mau_r = moment_auvxi(&a_r.0, &m.mu_r, &m.mv, &m.mxi, 1, 0);
    let a_t = micro_slope(&prim, &(-prim.rho * (mau_l + mau_r)), gas.ck);

    let tau = gas.collision_time(&prim);
    let t = TimeWeights::new(tau, ctx.dt);

    // Equilibrium part of the macroscopic flux
    let mut flux = t.mt1() * prim.rho * moment_uvxi(&m.mu, &m.mv, &m.mxi, 1, 0, 0)
        + t.mt2()
            * prim.rho
            * (moment_auvxi(&a_l.0, &m.mu_l, &m.mv, &m.mxi, 2, 0)
                + moment_auvxi(&a_r.0, &m.mu_r, &m.mv, &m.mxi, 2, 0))
        + t.mt3() * prim.rho * moment_auvxi(&a_t.0, &m.mu, &m.mv, &m.mxi, 1, 0);

    // Shakhov correction and free transport, summed over the grid
    let mxi4 = m.mxi[2];
    let mut corr = [0.0; 4];
    for k in 0..n {
        let (vn, vt, d) = (ws.vn[k], ws.vt[k], ws.delta[k]);
        let (h0, b0) = maxwellian_at(vn, vt, &prim, gas.ck);
        let (hp, bp) = shakhov_at(vn, vt, h0, b0, &q, &prim, gas);

        // Non-equilibrium parts entering the macroscopic flux
        let fh = t.mt1() * hp + t.mt4() * ws.h[k] - t.mt5() * vn * ws.sh[k];
        let fb = t.mt1() * bp + t.mt4() * ws.b[k] - t.mt5() * vn * ws.sb[k];
        let wvn = weight[k] * vn;
        corr[0] += wvn * fh;
        corr[1] += wvn * vn * fh;
        corr[2] += wvn * vt * fh;
        corr[3] += 0.5 * wvn * ((vn * vn + vt * vt) * fh + fb);

        let slope_h = a_l.apply(vn, vt, h0, b0) * d + a_r.apply(vn, vt, h0, b0) * (1.0 - d);
        let slope_b = a_l.apply(vn, vt, b0, mxi4 * h0) * d
            + a_r.apply(vn, vt, b0, mxi4 * h0) * (1.0 - d);

        face.flux_h[k] = t.mt1() * vn * (h0 + hp)
            + t.mt2() * vn * vn * slope_h
            + t.mt3() * vn * a_t.apply(vn, vt, h0, b0)
            + t.mt4() * vn * ws.h[k]
            - t.mt5() * vn * vn * ws.sh[k];
        face.flux_b[k] = t.mt1() * vn * (b0 + bp)
            + t.mt2() * vn * vn * slope_b
            + t.mt3() * vn * a_t.apply(vn, vt, b0, mxi4 * h0)
            + t.mt4() * vn * ws.b[k]
            - t.mt5() * vn * vn * ws.sb[k];
    }
    flux += ConservedState::from_array(corr);

    let length = face.length;
    face.flux = to_global(&flux, cosx, cosy) * length;
    for k in 0..n {
        face.flux_h[k] *= length;
        face.flux_b[k] *= length;
    }
}

/// Equilibrium flux of a uniform Maxwellian state over one step, `dt ρ⟨vn ψ⟩`
/// in the face frame. Reference value for consistency checks.
pub fn equilibrium_flux(prim_local: &PrimitiveState, ck: f64, dt: f64) -> ConservedState {
    let m = MomentTables::new(prim_local, ck);
    dt * prim_local.rho * moment_uvxi(&m.mu, &m.mv, &m.mxi, 1, 0, 0)
}
