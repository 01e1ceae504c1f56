//! Micro-slopes of the equilibrium distribution.
//!
//! A spatial or temporal derivative of the Maxwellian g is written as
//! `∂g = a·ψ g` with `a·ψ = a1 + a2 u + a3 v + ½ a4 (u² + v² + ξ²)`.
//! Given the matching derivative of the conservative variables `s = ∂w`,
//! the coefficients follow from `ρ ⟨a·ψ ψ⟩ = s`, which is solved here in
//! closed form.

use crate::state::{ConservedState, PrimitiveState};

/// Coefficients (a1, a2, a3, a4) of a micro-slope.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MicroSlope(pub [f64; 4]);

impl MicroSlope {
    /// Solve `ρ ⟨a·ψ ψ⟩ = s` for the Maxwellian of `prim` with `ck`
    /// internal degrees of freedom.
    #[inline]
    pub fn from_gradient(prim: &PrimitiveState, s: &ConservedState, ck: f64) -> Self {
        let PrimitiveState { rho, u, v, lambda } = *prim;
        let [s1, s2, s3, s4] = s.to_array();
        let k2 = ck + 2.0;

        let a4 = 4.0 * lambda * lambda / (k2 * rho)
            * (2.0 * s4 - 2.0 * u * s2 - 2.0 * v * s3
                + s1 * (u * u + v * v - 0.5 * k2 / lambda));
        let a3 = 2.0 * lambda / rho * (s3 - v * s1) - v * a4;
        let a2 = 2.0 * lambda / rho * (s2 - u * s1) - u * a4;
        let a1 = s1 / rho - u * a2 - v * a3 - 0.5 * (u * u + v * v + 0.5 * k2 / lambda) * a4;

        Self([a1, a2, a3, a4])
    }

    /// Coefficient array.
    #[inline(always)]
    pub fn coefficients(&self) -> &[f64; 4] {
        &self.0
    }

    /// Evaluate `a·ψ f` at a node with velocity (vn, vt), where `f` is the
    /// distribution and `f_xi2` its ξ²-moment (B for f = H, ⟨ξ⁴⟩H for f = B).
    #[inline(always)]
    pub fn apply(&self, vn: f64, vt: f64, f: f64, f_xi2: f64) -> f64 {
        let [a1, a2, a3, a4] = self.0;
        a1 * f + a2 * vn * f + a3 * vt * f + 0.5 * a4 * ((vn * vn + vt * vt) * f + f_xi2)
    }
}

/// Micro-slope for the gradient `s` of the conservative state.
#[inline]
pub fn micro_slope(prim: &PrimitiveState, s: &ConservedState, ck: f64) -> MicroSlope {
    MicroSlope::from_gradient(prim, s, ck)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moments::{MomentTables, moment_auvxi};

    const TOL: f64 = 1e-11;

    #[test]
    fn test_inverse_of_moment_map() {
        let cases = [
            (PrimitiveState::new(1.0, 0.0, 0.0, 1.0), 1.0),
            (PrimitiveState::new(0.7, 0.3, -0.4, 1.8), 1.0),
            (PrimitiveState::new(2.5, -1.1, 0.2, 0.35), 0.0),
            (PrimitiveState::new(1.2, 0.05, 0.6, 0.9), 3.0),
        ];
        let slopes = [
            ConservedState::new(1.0, 0.0, 0.0, 0.0),
            ConservedState::new(0.0, 0.0, 0.0, 1.0),
            ConservedState::new(-0.3, 0.8, 0.1, -2.0),
        ];

        for (prim, ck) in cases {
            let t = MomentTables::new(&prim, ck);
            for s in slopes {
                let a = micro_slope(&prim, &s, ck);
                let back = prim.rho * moment_auvxi(a.coefficients(), &t.mu, &t.mv, &t.mxi, 0, 0);
                for (x, y) in back.to_array().iter().zip(s.to_array().iter()) {
                    assert!((x - y).abs() < TOL, "ck={ck} {prim:?}: {back:?} vs {s:?}");
                }
            }
        }
    }

    #[test]
    fn test_zero_gradient_gives_zero_slope() {
        let prim = PrimitiveState::new(1.0, 0.2, 0.1, 1.0);
        let a = micro_slope(&prim, &ConservedState::zero(), 1.0);
        assert_eq!(a, MicroSlope([0.0; 4]));
    }

    #[test]
    fn test_density_gradient_at_rest() {
        // Pure density perturbation at rest with matching energy: a = (s1/ρ, 0, 0, 0)
        let gas_ck = 1.0;
        let prim = PrimitiveState::new(2.0, 0.0, 0.0, 0.5);
        let e_per_rho = (gas_ck + 2.0) / (4.0 * prim.lambda);
        let s = ConservedState::new(0.1, 0.0, 0.0, 0.1 * e_per_rho);
        let a = micro_slope(&prim, &s, gas_ck);
        assert!((a.0[0] - 0.05).abs() < TOL);
        assert!(a.0[1].abs() < TOL && a.0[2].abs() < TOL && a.0[3].abs() < TOL);
    }

    #[test]
    fn test_apply() {
        let a = MicroSlope([1.0, 2.0, 3.0, 4.0]);
        // 1 + 2·0.5 + 3·(-1) + 2·(1.25 + 0.5)
        let value = a.apply(0.5, -1.0, 1.0, 0.5);
        assert!((value - 2.5).abs() < 1e-14);
    }
}
