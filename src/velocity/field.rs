//! Dense per-cell arrays over the discrete velocity grid.

use std::ops::{Deref, DerefMut};

/// A scalar field over the discrete velocity grid, stored row-major
/// (`index = i * v_num + j`, `i` along u, `j` along v).
///
/// Used for the reduced distributions `h`, `b`, their slopes and the face
/// fluxes `flux_h`, `flux_b`. Dereferences to `[f64]` for element-wise work.
#[derive(Clone, Debug, PartialEq)]
pub struct VelocityField {
    u_num: usize,
    v_num: usize,
    data: Vec<f64>,
}

impl VelocityField {
    /// Zero-initialized field.
    pub fn zeros(u_num: usize, v_num: usize) -> Self {
        Self {
            u_num,
            v_num,
            data: vec![0.0; u_num * v_num],
        }
    }

    /// Build a field from a function of the flat node index.
    pub fn from_fn<F>(u_num: usize, v_num: usize, f: F) -> Self
    where
        F: FnMut(usize) -> f64,
    {
        Self {
            u_num,
            v_num,
            data: (0..u_num * v_num).map(f).collect(),
        }
    }

    /// Wrap an existing buffer. Returns `None` if the length does not match.
    pub fn from_vec(u_num: usize, v_num: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == u_num * v_num).then_some(Self { u_num, v_num, data })
    }

    /// Grid shape `(u_num, v_num)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.u_num, self.v_num)
    }

    /// Value at `(i, j)`.
    #[inline(always)]
    pub fn at(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.v_num + j]
    }

    /// Set all values to zero.
    pub fn fill_zero(&mut self) {
        self.data.iter_mut().for_each(|x| *x = 0.0);
    }

    /// Copy values from another field of the same shape.
    pub fn copy_from(&mut self, other: &VelocityField) {
        debug_assert_eq!(self.shape(), other.shape());
        self.data.copy_from_slice(&other.data);
    }

    /// `self += alpha * other`
    pub fn axpy(&mut self, alpha: f64, other: &VelocityField) {
        debug_assert_eq!(self.shape(), other.shape());
        for (a, b) in self.data.iter_mut().zip(other.data.iter()) {
            *a += alpha * b;
        }
    }

    /// Whether every value is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|x| x.is_finite())
    }

    /// Maximum absolute value.
    pub fn max_abs(&self) -> f64 {
        self.data.iter().fold(0.0_f64, |m, x| m.max(x.abs()))
    }
}

impl Deref for VelocityField {
    type Target = [f64];

    #[inline(always)]
    fn deref(&self) -> &[f64] {
        &self.data
    }
}

impl DerefMut for VelocityField {
    #[inline(always)]
    fn deref_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }
}
