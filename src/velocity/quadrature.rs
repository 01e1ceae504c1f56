//! One-dimensional quadrature rules for the discrete velocity space.
//!
//! Two families are provided:
//! - Composite Newton-Cotes (Boole's rule) on a bounded interval, suited to
//!   flows with strong non-equilibrium where the distribution is far from
//!   Gaussian.
//! - Gauss-Hermite on the whole line, suited to near-equilibrium flows.
//!   Nodes are found by Newton iteration on the orthonormal Hermite
//!   recurrence; weights are rescaled by exp(x²) so that plain integrands
//!   (not pre-multiplied by the Gaussian) are summed directly.

use std::f64::consts::PI;

/// Round a requested node count to the form 4k + 1 required by Boole's rule.
#[inline]
pub fn newton_cotes_count(requested: usize) -> usize {
    (requested / 4).max(1) * 4 + 1
}

/// Boole-rule coefficient for node `idx` (0-based) of `num` nodes.
///
/// Endpoints get 14/45, panel junctions 28/45, panel midpoints 24/45 and the
/// remaining nodes 64/45.
#[inline]
fn newton_cotes_coeff(idx: usize, num: usize) -> f64 {
    if idx == 0 || idx == num - 1 {
        14.0 / 45.0
    } else if idx % 4 == 0 {
        28.0 / 45.0
    } else if idx % 4 == 2 {
        24.0 / 45.0
    } else {
        64.0 / 45.0
    }
}

/// Composite Newton-Cotes nodes and weights on `[min, max]`.
///
/// `num` is rounded to 4k + 1. Returns `(nodes, weights)`.
pub fn newton_cotes(num: usize, min: f64, max: f64) -> (Vec<f64>, Vec<f64>) {
    let num = newton_cotes_count(num);
    let du = (max - min) / (num - 1) as f64;

    let nodes = (0..num).map(|i| min + i as f64 * du).collect();
    let weights = (0..num).map(|i| newton_cotes_coeff(i, num) * du).collect();
    (nodes, weights)
}

/// Gauss-Hermite abscissas and weights for the weight function exp(-x²).
///
/// Returns `(nodes, weights)` with nodes in ascending order. Uses the
/// orthonormal recurrence and Newton iteration with the standard asymptotic
/// initial guesses for the largest roots.
pub fn gauss_hermite(num: usize) -> (Vec<f64>, Vec<f64>) {
    const MAX_ITER: usize = 100;
    const EPS: f64 = 1e-15;
    let pim4 = PI.powf(-0.25);

    let n = num;
    let mut x = vec![0.0; n];
    let mut w = vec![0.0; n];
    if n == 0 {
        return (x, w);
    }

    let m = n.div_ceil(2);
    let nf = n as f64;
    let mut z = 0.0_f64;

    for i in 0..m {
        // Initial guess for the i-th largest root
        z = match i {
            0 => (2.0 * nf + 1.0).sqrt() - 1.85575 * (2.0 * nf + 1.0).powf(-0.16667),
            1 => z - 1.14 * nf.powf(0.426) / z,
            2 => 1.86 * z - 0.86 * x[0],
            3 => 1.91 * z - 0.91 * x[1],
            _ => 2.0 * z - x[i - 2],
        };

        let mut pp = 0.0;
        for _ in 0..MAX_ITER {
            // Orthonormal Hermite recurrence
            let mut p1 = pim4;
            let mut p2 = 0.0;
            for j in 0..n {
                let p3 = p2;
                p2 = p1;
                let jf = j as f64;
                p1 = z * (2.0 / (jf + 1.0)).sqrt() * p2 - (jf / (jf + 1.0)).sqrt() * p3;
            }
            pp = (2.0 * nf).sqrt() * p2;

            let z_old = z;
            z = z_old - p1 / pp;
            if (z - z_old).abs() <= EPS * z.abs().max(1.0) {
                break;
            }
        }

        x[i] = z;
        x[n - 1 - i] = -z;
        w[i] = 2.0 / (pp * pp);
        w[n - 1 - i] = w[i];
    }

    // Roots were filled from the largest down
    x.reverse();
    w.reverse();
    (x, w)
}

/// Gauss-Hermite rule scaled to velocity `c · x`, with weights for plain
/// integrands: ∫ f(u) du ≈ Σ c w_i exp(x_i²) f(c x_i).
pub fn gauss_hermite_scaled(num: usize, scale: f64) -> (Vec<f64>, Vec<f64>) {
    let (x, w) = gauss_hermite(num);
    let nodes = x.iter().map(|xi| scale * xi).collect();
    let weights = x
        .iter()
        .zip(w.iter())
        .map(|(xi, wi)| scale * wi * (xi * xi).exp())
        .collect();
    (nodes, weights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newton_cotes_count_rounding() {
        assert_eq!(newton_cotes_count(28), 29);
        assert_eq!(newton_cotes_count(29), 29);
        assert_eq!(newton_cotes_count(31), 29);
        assert_eq!(newton_cotes_count(2), 5);
    }

    #[test]
    fn test_newton_cotes_integrates_quartic_exactly() {
        let (u, w) = newton_cotes(17, -1.0, 3.0);
        assert_eq!(u.len(), 17);
        let sum_w: f64 = w.iter().sum();
        assert!((sum_w - 4.0).abs() < 1e-13);

        // ∫_{-1}^{3} x⁴ dx = (243 + 1)/5
        let quartic: f64 = u.iter().zip(w.iter()).map(|(x, w)| w * x.powi(4)).sum();
        assert!((quartic - 244.0 / 5.0).abs() < 1e-11);
    }

    #[test]
    fn test_gauss_hermite_moments() {
        for n in [4, 8, 16, 28] {
            let (x, w) = gauss_hermite(n);
            assert_eq!(x.len(), n);

            let m0: f64 = w.iter().sum();
            assert!((m0 - PI.sqrt()).abs() < 1e-12, "n={n}: sum w = {m0}");

            let m2: f64 = x.iter().zip(w.iter()).map(|(x, w)| w * x * x).sum();
            assert!((m2 - 0.5 * PI.sqrt()).abs() < 1e-12, "n={n}: second moment {m2}");

            // Ascending and symmetric
            for i in 1..n {
                assert!(x[i] > x[i - 1]);
            }
            for i in 0..n / 2 {
                assert!((x[i] + x[n - 1 - i]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_gauss_hermite_scaled_gaussian() {
        // ∫ exp(-u²/2) du = sqrt(2π)
        let (u, w) = gauss_hermite_scaled(20, 2.0_f64.sqrt());
        let integral: f64 = u
            .iter()
            .zip(w.iter())
            .map(|(u, w)| w * (-0.5 * u * u).exp())
            .sum();
        assert!((integral - (2.0 * PI).sqrt()).abs() < 1e-10);
    }
}
