//! The discrete velocity grid shared by every cell and interface.

use crate::error::{Result, UgksError};

use super::VelocityField;
use super::quadrature::{gauss_hermite_scaled, newton_cotes};

/// Tensor-product grid of microscopic velocities (u, v) with quadrature weights.
///
/// Built once per run and shared read-only (typically behind an `Arc`).
/// All arrays are row-major `u_num x v_num`, matching [`VelocityField`].
#[derive(Clone, Debug, PartialEq)]
pub struct VelocityGrid {
    u_num: usize,
    v_num: usize,
    u: Vec<f64>,
    v: Vec<f64>,
    weight: Vec<f64>,
    u_max: f64,
    v_max: f64,
}

impl VelocityGrid {
    /// Tensor product of two 1D rules.
    pub fn from_rules(
        u_nodes: &[f64],
        u_weights: &[f64],
        v_nodes: &[f64],
        v_weights: &[f64],
    ) -> Result<Self> {
        if u_nodes.len() != u_weights.len() || v_nodes.len() != v_weights.len() {
            return Err(UgksError::dimension_mismatch(
                format!("{} u-weights and {} v-weights", u_nodes.len(), v_nodes.len()),
                format!("{} and {}", u_weights.len(), v_weights.len()),
            ));
        }
        if u_nodes.is_empty() || v_nodes.is_empty() {
            return Err(UgksError::invalid_config("velocity grid must be non-empty"));
        }

        let u_num = u_nodes.len();
        let v_num = v_nodes.len();
        let n = u_num * v_num;
        let mut u = Vec::with_capacity(n);
        let mut v = Vec::with_capacity(n);
        let mut weight = Vec::with_capacity(n);
        for i in 0..u_num {
            for j in 0..v_num {
                u.push(u_nodes[i]);
                v.push(v_nodes[j]);
                weight.push(u_weights[i] * v_weights[j]);
            }
        }

        let u_max = u_nodes.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
        let v_max = v_nodes.iter().fold(0.0_f64, |m, x| m.max(x.abs()));

        Ok(Self {
            u_num,
            v_num,
            u,
            v,
            weight,
            u_max,
            v_max,
        })
    }

    /// Composite Newton-Cotes grid on `[u_min, u_max] x [v_min, v_max]`.
    ///
    /// Node counts are rounded to the form 4k + 1.
    pub fn newton_cotes(
        u_num: usize,
        u_min: f64,
        u_max: f64,
        v_num: usize,
        v_min: f64,
        v_max: f64,
    ) -> Result<Self> {
        if !(u_max > u_min && v_max > v_min) {
            return Err(UgksError::invalid_config(format!(
                "empty velocity range [{u_min}, {u_max}] x [{v_min}, {v_max}]"
            )));
        }
        let (un, uw) = newton_cotes(u_num, u_min, u_max);
        let (vn, vw) = newton_cotes(v_num, v_min, v_max);
        Self::from_rules(&un, &uw, &vn, &vw)
    }

    /// Gauss-Hermite grid with nodes `scale · x_i` in each direction.
    ///
    /// A scale of `sqrt(2 RT_ref)` centers the rule on the reference
    /// Maxwellian; velocity offsets must stay small relative to the node span.
    pub fn gauss_hermite(u_num: usize, u_scale: f64, v_num: usize, v_scale: f64) -> Result<Self> {
        if !(u_scale > 0.0 && v_scale > 0.0) {
            return Err(UgksError::invalid_config(format!(
                "Gauss-Hermite scales must be positive, got {u_scale} and {v_scale}"
            )));
        }
        let (un, uw) = gauss_hermite_scaled(u_num, u_scale);
        let (vn, vw) = gauss_hermite_scaled(v_num, v_scale);
        Self::from_rules(&un, &uw, &vn, &vw)
    }

    /// Number of nodes along u.
    #[inline]
    pub fn u_num(&self) -> usize {
        self.u_num
    }

    /// Number of nodes along v.
    #[inline]
    pub fn v_num(&self) -> usize {
        self.v_num
    }

    /// Total number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.weight.len()
    }

    /// Whether the grid has no nodes (never true for a constructed grid).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weight.is_empty()
    }

    /// Grid shape `(u_num, v_num)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.u_num, self.v_num)
    }

    /// u-component of every node.
    #[inline]
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// v-component of every node.
    #[inline]
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Quadrature weight of every node.
    #[inline]
    pub fn weight(&self) -> &[f64] {
        &self.weight
    }

    /// Largest |u| on the grid, used for the CFL bound.
    #[inline]
    pub fn u_max(&self) -> f64 {
        self.u_max
    }

    /// Largest |v| on the grid, used for the CFL bound.
    #[inline]
    pub fn v_max(&self) -> f64 {
        self.v_max
    }

    /// A zero field of this grid's shape.
    pub fn zeros(&self) -> VelocityField {
        VelocityField::zeros(self.u_num, self.v_num)
    }

    /// Quadrature Σ weight · f.
    #[inline]
    pub fn integrate(&self, f: &[f64]) -> f64 {
        self.weight.iter().zip(f.iter()).map(|(w, f)| w * f).sum()
    }

    /// Check that a field has this grid's shape.
    pub fn check_shape(&self, field: &VelocityField) -> Result<()> {
        if field.shape() != self.shape() {
            return Err(UgksError::dimension_mismatch(
                format!("{}x{}", self.u_num, self.v_num),
                format!("{}x{}", field.shape().0, field.shape().1),
            ));
        }
        Ok(())
    }
}
