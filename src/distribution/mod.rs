//! Equilibrium and Shakhov distributions on the discrete velocity grid.
//!
//! The 2D kinetic model carries two reduced distributions per velocity node:
//! `h`, the distribution integrated over internal degrees of freedom, and
//! `b`, its ξ²-weighted counterpart (internal energy). For a primitive state
//! (ρ, u, v, λ) the equilibrium pair is
//!
//! ```text
//! H = ρ (λ/π) exp(-λ((vn - u)² + (vt - v)²))
//! B = H · CK / (2λ)
//! ```
//!
//! The Shakhov model adds a heat-flux dependent correction so that the
//! relaxation rate of the heat flux matches the Prandtl number:
//!
//! ```text
//! H⁺ = 0.8(1 - Pr) λ²/ρ (cn qn + ct qt)(2λc² + CK - 5) H
//! B⁺ = 0.8(1 - Pr) λ²/ρ (cn qn + ct qt)(2λc² + CK - 3) B
//! ```
//!
//! with peculiar velocity (cn, ct) = (vn - u, vt - v) and c² = cn² + ct².
//!
//! All functions work on plain slices of node velocities so that the same
//! code serves the global frame (`grid.u()`, `grid.v()`) and a face-local
//! frame (rotated `vn`, `vt` buffers).

use std::f64::consts::PI;

use crate::gas::GasModel;
use crate::state::{ConservedState, PrimitiveState};
use crate::velocity::{VelocityField, VelocityGrid};

/// Equilibrium pair (H, B) at one velocity node.
#[inline(always)]
pub fn maxwellian_at(vn: f64, vt: f64, prim: &PrimitiveState, ck: f64) -> (f64, f64) {
    let cn = vn - prim.u;
    let ct = vt - prim.v;
    let h = prim.rho * (prim.lambda / PI) * (-prim.lambda * (cn * cn + ct * ct)).exp();
    (h, h * ck / (2.0 * prim.lambda))
}

/// Equilibrium distributions over all nodes, written into `h` and `b`.
pub fn maxwellian(
    vn: &[f64],
    vt: &[f64],
    prim: &PrimitiveState,
    ck: f64,
    h: &mut [f64],
    b: &mut [f64],
) {
    for (k, (hk, bk)) in h.iter_mut().zip(b.iter_mut()).enumerate() {
        (*hk, *bk) = maxwellian_at(vn[k], vt[k], prim, ck);
    }
}

/// Equilibrium fields on the grid in the global frame.
pub fn maxwellian_field(
    grid: &VelocityGrid,
    prim: &PrimitiveState,
    ck: f64,
) -> (VelocityField, VelocityField) {
    let mut h = grid.zeros();
    let mut b = grid.zeros();
    maxwellian(grid.u(), grid.v(), prim, ck, &mut h, &mut b);
    (h, b)
}

/// Heat flux `(qn, qt)` of a distribution pair relative to the bulk velocity
/// of `prim`.
pub fn heat_flux(
    weight: &[f64],
    vn: &[f64],
    vt: &[f64],
    h: &[f64],
    b: &[f64],
    prim: &PrimitiveState,
) -> [f64; 2] {
    let mut q = [0.0; 2];
    for k in 0..weight.len() {
        let cn = vn[k] - prim.u;
        let ct = vt[k] - prim.v;
        let c2h = (cn * cn + ct * ct) * h[k];
        q[0] += weight[k] * cn * (c2h + b[k]);
        q[1] += weight[k] * ct * (c2h + b[k]);
    }
    [0.5 * q[0], 0.5 * q[1]]
}

/// Scalar part `0.8(1 - Pr) λ²/ρ (cn qn + ct qt)` of the Shakhov correction
/// at one node.
#[inline(always)]
pub fn shakhov_factor(
    cn: f64,
    ct: f64,
    q: &[f64; 2],
    prim: &PrimitiveState,
    gas: &GasModel,
) -> f64 {
    gas.shakhov_coefficient() * prim.lambda * prim.lambda / prim.rho * (cn * q[0] + ct * q[1])
}

/// Shakhov corrections `(H⁺, B⁺)` at one node given its equilibrium pair.
#[inline(always)]
pub fn shakhov_at(
    vn: f64,
    vt: f64,
    h_eq: f64,
    b_eq: f64,
    q: &[f64; 2],
    prim: &PrimitiveState,
    gas: &GasModel,
) -> (f64, f64) {
    let cn = vn - prim.u;
    let ct = vt - prim.v;
    let factor = shakhov_factor(cn, ct, q, prim, gas);
    let c2 = 2.0 * prim.lambda * (cn * cn + ct * ct);
    (
        factor * (c2 + gas.ck - 5.0) * h_eq,
        factor * (c2 + gas.ck - 3.0) * b_eq,
    )
}

/// Shakhov corrections over all nodes, written into `h_plus` and `b_plus`.
#[allow(clippy::too_many_arguments)]
pub fn shakhov_correction(
    vn: &[f64],
    vt: &[f64],
    h_eq: &[f64],
    b_eq: &[f64],
    q: &[f64; 2],
    prim: &PrimitiveState,
    gas: &GasModel,
    h_plus: &mut [f64],
    b_plus: &mut [f64],
) {
    for (k, (hp, bp)) in h_plus.iter_mut().zip(b_plus.iter_mut()).enumerate() {
        (*hp, *bp) = shakhov_at(vn[k], vt[k], h_eq[k], b_eq[k], q, prim, gas);
    }
}

/// Target of the Shakhov relaxation, `H + H⁺` and `B + B⁺`, in the global
/// frame. The heat flux `q` is supplied by the caller.
pub fn shakhov_equilibrium(
    grid: &VelocityGrid,
    prim: &PrimitiveState,
    q: &[f64; 2],
    gas: &GasModel,
    h: &mut [f64],
    b: &mut [f64],
) {
    let (u, v) = (grid.u(), grid.v());
    for (k, (hk, bk)) in h.iter_mut().zip(b.iter_mut()).enumerate() {
        let (h_eq, b_eq) = maxwellian_at(u[k], v[k], prim, gas.ck);
        let (h_plus, b_plus) = shakhov_at(u[k], v[k], h_eq, b_eq, q, prim, gas);
        *hk = h_eq + h_plus;
        *bk = b_eq + b_plus;
    }
}

/// Conservative moments ⟨ψ⟩ of a distribution pair:
/// `(Σwh, Σw vn h, Σw vt h, ½(Σw(vn² + vt²)h + Σwb))`.
pub fn conserved_moments(
    weight: &[f64],
    vn: &[f64],
    vt: &[f64],
    h: &[f64],
    b: &[f64],
) -> ConservedState {
    let mut m = [0.0; 4];
    for k in 0..weight.len() {
        let wh = weight[k] * h[k];
        m[0] += wh;
        m[1] += wh * vn[k];
        m[2] += wh * vt[k];
        m[3] += wh * (vn[k] * vn[k] + vt[k] * vt[k]) + weight[k] * b[k];
    }
    ConservedState::new(m[0], m[1], m[2], 0.5 * m[3])
}
