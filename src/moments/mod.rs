//! Analytic moments of the normalized Maxwellian.
//!
//! For g = (λ/π)^((2+K)/2) exp(-λ((u-U)² + (v-V)² + ξ²)) the moments factor
//! into one-dimensional pieces:
//!
//! ```text
//! ⟨u^n⟩    = Mu[n]   (full range),  MuL[n] (u > 0),  MuR[n] (u < 0)
//! ⟨v^n⟩    = Mv[n]
//! ⟨ξ^(2m)⟩ = Mxi[m], m = 0, 1, 2
//! ```
//!
//! Each 1D table follows the recursion
//! `M[n] = U M[n-1] + ½(n-1) M[n-2] / λ`, seeded by the zeroth and first
//! moments. Half-range seeds use the complementary error function.
//!
//! Everything here is closed-form; nothing touches the velocity grid.

use std::f64::consts::PI;

use crate::state::{ConservedState, PrimitiveState};

/// Highest velocity moment order kept in the tables.
pub const MAX_ORDER: usize = 6;

/// Moment tables of a primitive state, built once per interface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentTables {
    /// Full-range ⟨u^n⟩
    pub mu: [f64; MAX_ORDER + 1],
    /// Half-range ⟨u^n⟩ over u > 0
    pub mu_l: [f64; MAX_ORDER + 1],
    /// Half-range ⟨u^n⟩ over u < 0
    pub mu_r: [f64; MAX_ORDER + 1],
    /// ⟨v^n⟩
    pub mv: [f64; MAX_ORDER + 1],
    /// ⟨ξ⁰⟩, ⟨ξ²⟩, ⟨ξ⁴⟩
    pub mxi: [f64; 3],
}

impl MomentTables {
    /// Build the tables for `prim` (in whatever frame its velocity is given)
    /// and `ck` internal degrees of freedom.
    pub fn new(prim: &PrimitiveState, ck: f64) -> Self {
        let PrimitiveState { u, v, lambda, .. } = *prim;
        let sqrt_l = lambda.sqrt();
        let tail = 0.5 * (-lambda * u * u).exp() / (PI * lambda).sqrt();

        let mut mu_l = [0.0; MAX_ORDER + 1];
        let mut mu_r = [0.0; MAX_ORDER + 1];
        mu_l[0] = 0.5 * libm::erfc(-sqrt_l * u);
        mu_l[1] = u * mu_l[0] + tail;
        mu_r[0] = 0.5 * libm::erfc(sqrt_l * u);
        mu_r[1] = u * mu_r[0] - tail;
        fill_recursion(&mut mu_l, u, lambda);
        fill_recursion(&mut mu_r, u, lambda);

        let mut mu = [0.0; MAX_ORDER + 1];
        for n in 0..=MAX_ORDER {
            mu[n] = mu_l[n] + mu_r[n];
        }

        let mut mv = [0.0; MAX_ORDER + 1];
        mv[0] = 1.0;
        mv[1] = v;
        fill_recursion(&mut mv, v, lambda);

        let mxi = [
            1.0,
            0.5 * ck / lambda,
            ck * (ck + 2.0) / (4.0 * lambda * lambda),
        ];

        Self {
            mu,
            mu_l,
            mu_r,
            mv,
            mxi,
        }
    }
}

#[inline]
fn fill_recursion(m: &mut [f64; MAX_ORDER + 1], mean: f64, lambda: f64) {
    for n in 2..=MAX_ORDER {
        m[n] = mean * m[n - 1] + 0.5 * (n - 1) as f64 * m[n - 2] / lambda;
    }
}

/// ⟨u^α v^β ξ^δ ψ⟩ with ψ = (1, u, v, ½(u² + v² + ξ²)).
///
/// `mu` selects the range (full or half); `delta` must be 0 or 2.
#[inline]
pub fn moment_uvxi(
    mu: &[f64; MAX_ORDER + 1],
    mv: &[f64; MAX_ORDER + 1],
    mxi: &[f64; 3],
    alpha: usize,
    beta: usize,
    delta: usize,
) -> ConservedState {
    let x = mxi[delta / 2];
    ConservedState::new(
        mu[alpha] * mv[beta] * x,
        mu[alpha + 1] * mv[beta] * x,
        mu[alpha] * mv[beta + 1] * x,
        0.5 * (mu[alpha + 2] * mv[beta] * x
            + mu[alpha] * mv[beta + 2] * x
            + mu[alpha] * mv[beta] * mxi[(delta + 2) / 2]),
    )
}

/// ⟨a u^α v^β ψ⟩ for a micro-slope `a` = (a1, a2, a3, a4) acting as
/// a1 + a2 u + a3 v + ½ a4 (u² + v² + ξ²).
#[inline]
pub fn moment_auvxi(
    a: &[f64; 4],
    mu: &[f64; MAX_ORDER + 1],
    mv: &[f64; MAX_ORDER + 1],
    mxi: &[f64; 3],
    alpha: usize,
    beta: usize,
) -> ConservedState {
    a[0] * moment_uvxi(mu, mv, mxi, alpha, beta, 0)
        + a[1] * moment_uvxi(mu, mv, mxi, alpha + 1, beta, 0)
        + a[2] * moment_uvxi(mu, mv, mxi, alpha, beta + 1, 0)
        + 0.5
            * a[3]
            * (moment_uvxi(mu, mv, mxi, alpha + 2, beta, 0)
                + moment_uvxi(mu, mv, mxi, alpha, beta + 2, 0)
                + moment_uvxi(mu, mv, mxi, alpha, beta, 2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::velocity::quadrature::newton_cotes;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_zeroth_moment_is_specific_conserved_state() {
        let cases = [
            (PrimitiveState::new(1.0, 0.3, -0.2, 0.7), 1.0),
            (PrimitiveState::new(2.0, -0.7, 0.4, 0.3), 1.0),
            (PrimitiveState::new(0.5, 1.5, -2.0, 3.0), 3.0),
        ];
        for (prim, ck) in cases {
            let t = MomentTables::new(&prim, ck);
            let m = moment_uvxi(&t.mu, &t.mv, &t.mxi, 0, 0, 0);
            let e = 0.5 * (prim.u * prim.u + prim.v * prim.v) + (ck + 2.0) / (4.0 * prim.lambda);
            let tol = TOL * e.max(1.0);

            assert!((m.rho - 1.0).abs() < TOL, "{prim:?}: ⟨1⟩ = {}", m.rho);
            assert!((m.rho_u - prim.u).abs() < tol, "{prim:?}: ⟨u⟩ = {}", m.rho_u);
            assert!((m.rho_v - prim.v).abs() < tol, "{prim:?}: ⟨v⟩ = {}", m.rho_v);
            assert!((m.rho_e - e).abs() < tol, "{prim:?}: E = {} vs {e}", m.rho_e);
        }
    }

    #[test]
    fn test_full_range_closed_forms() {
        let prim = PrimitiveState::new(1.0, 0.4, 0.1, 2.0);
        let t = MomentTables::new(&prim, 0.0);
        let (u, rt) = (0.4, 0.25);
        assert!((t.mu[0] - 1.0).abs() < TOL);
        assert!((t.mu[1] - u).abs() < TOL);
        assert!((t.mu[2] - (u * u + rt)).abs() < TOL);
        assert!((t.mu[3] - (u * u * u + 3.0 * u * rt)).abs() < TOL);
        assert!((t.mu[4] - (u.powi(4) + 6.0 * u * u * rt + 3.0 * rt * rt)).abs() < TOL);
        assert!((t.mv[2] - (0.01 + rt)).abs() < TOL);
        // No internal energy
        assert_eq!(t.mxi, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_half_range_moments_against_quadrature() {
        let lambda = 1.3;
        for u in [-0.8, 0.0, 0.45] {
            let prim = PrimitiveState::new(1.0, u, 0.0, lambda);
            let t = MomentTables::new(&prim, 1.0);

            let (x, w) = newton_cotes(800, 0.0, 8.0);
            let g = |x: f64| (lambda / PI).sqrt() * (-lambda * (x - u) * (x - u)).exp();
            for n in 0..=MAX_ORDER {
                let pos: f64 = x.iter().zip(&w).map(|(x, w)| w * x.powi(n as i32) * g(*x)).sum();
                let neg: f64 = x
                    .iter()
                    .zip(&w)
                    .map(|(x, w)| w * (-x).powi(n as i32) * g(-x))
                    .sum();
                assert!((t.mu_l[n] - pos).abs() < 1e-9, "u={u} n={n}: {} vs {pos}", t.mu_l[n]);
                assert!((t.mu_r[n] - neg).abs() < 1e-9, "u={u} n={n}: {} vs {neg}", t.mu_r[n]);
            }
        }
    }

    #[test]
    fn test_internal_moments() {
        let prim = PrimitiveState::new(1.0, 0.0, 0.0, 0.5);
        let t = MomentTables::new(&prim, 3.0);
        assert!((t.mxi[1] - 3.0).abs() < TOL);
        assert!((t.mxi[2] - 15.0).abs() < TOL);
    }

    #[test]
    fn test_unit_slope_reduces_to_plain_moment() {
        let prim = PrimitiveState::new(1.0, -0.1, 0.25, 0.9);
        let t = MomentTables::new(&prim, 1.0);
        for alpha in 0..=2 {
            let a = moment_auvxi(&[1.0, 0.0, 0.0, 0.0], &t.mu_l, &t.mv, &t.mxi, alpha, 0);
            let m = moment_uvxi(&t.mu_l, &t.mv, &t.mxi, alpha, 0, 0);
            assert_eq!(a, m);
        }

        // Linear in a
        let a1 = [0.2, -0.4, 0.1, 0.3];
        let a2 = [0.4, -0.8, 0.2, 0.6];
        let m1 = moment_auvxi(&a1, &t.mu, &t.mv, &t.mxi, 1, 0);
        let m2 = moment_auvxi(&a2, &t.mu, &t.mv, &t.mxi, 1, 0);
        for (x, y) in m1.to_array().iter().zip(m2.to_array().iter()) {
            assert!((2.0 * x - y).abs() < TOL);
        }
    }
}
