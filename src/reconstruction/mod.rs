//! Limited linear reconstruction of the discrete distributions.
//!
//! For a cell and direction, the one-sided differences
//!
//! ```text
//! sL = (f_mid - f_left)  / (½(len_mid + len_left))
//! sR = (f_right - f_mid) / (½(len_mid + len_right))
//! ```
//!
//! are combined node by node by a [`SlopeLimiter`] into the slope stored in
//! the cell (`sh[dir]`, `sb[dir]`). Van Leer is the default.

mod limiter;

pub use limiter::{FirstOrder, Minmod, SlopeLimiter, StandardLimiter, VanLeer};

use crate::mesh::CellState;
use crate::types::Direction;

/// Limited slopes of one field, written into `out`.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn limited_slopes<L: SlopeLimiter + ?Sized>(
    limiter: &L,
    left: &[f64],
    mid: &[f64],
    right: &[f64],
    len_left: f64,
    len_mid: f64,
    len_right: f64,
    out: &mut [f64],
) {
    let inv_l = 2.0 / (len_mid + len_left);
    let inv_r = 2.0 / (len_mid + len_right);
    for k in 0..out.len() {
        let s_l = (mid[k] - left[k]) * inv_l;
        let s_r = (right[k] - mid[k]) * inv_r;
        out[k] = limiter.limit(s_l, s_r);
    }
}

/// Slopes of `mid` along `dir`, written into separate buffers.
///
/// Used by sweeps that cannot borrow a cell mutably while reading its
/// neighbours.
pub fn reconstruct_into<L: SlopeLimiter + ?Sized>(
    limiter: &L,
    left: &CellState,
    mid: &CellState,
    right: &CellState,
    dir: Direction,
    sh: &mut [f64],
    sb: &mut [f64],
) {
    let (ll, lm, lr) = (left.length[dir], mid.length[dir], right.length[dir]);
    limited_slopes(limiter, &left.h, &mid.h, &right.h, ll, lm, lr, sh);
    limited_slopes(limiter, &left.b, &mid.b, &right.b, ll, lm, lr, sb);
}

/// Store the limited slopes of `mid` along `dir` in `mid.sh[dir]` and
/// `mid.sb[dir]`.
pub fn reconstruct<L: SlopeLimiter + ?Sized>(
    limiter: &L,
    left: &CellState,
    mid: &mut CellState,
    right: &CellState,
    dir: Direction,
) {
    let CellState {
        h,
        b,
        sh,
        sb,
        length,
        ..
    } = mid;
    let (ll, lm, lr) = (left.length[dir], length[dir], right.length[dir]);
    limited_slopes(limiter, &left.h, h, &right.h, ll, lm, lr, &mut sh[dir]);
    limited_slopes(limiter, &left.b, b, &right.b, ll, lm, lr, &mut sb[dir]);
}

/// Van Leer reconstruction of `mid` along `dir`.
#[inline]
pub fn van_leer_slope(left: &CellState, mid: &mut CellState, right: &CellState, dir: Direction) {
    reconstruct(&VanLeer, left, mid, right, dir);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::velocity::{VelocityField, VelocityGrid};

    const TOL: f64 = 1e-12;

    fn cells_with(values: [f64; 3], lengths: [f64; 3]) -> [CellState; 3] {
        let grid = VelocityGrid::from_rules(&[0.0, 1.0], &[1.0, 1.0], &[0.0], &[1.0]).unwrap();
        let mut cells = lengths.map(|len| CellState::new((0.0, 0.0), [len, 1.0], &grid));
        for (cell, v) in cells.iter_mut().zip(values) {
            cell.h = VelocityField::from_fn(2, 1, |k| v * (k + 1) as f64);
            cell.b = VelocityField::from_fn(2, 1, |_| -v);
        }
        cells
    }

    #[test]
    fn test_linear_data_recovers_gradient() {
        let [l, mut m, r] = cells_with([1.0, 2.0, 3.0], [1.0, 1.0, 1.0]);
        van_leer_slope(&l, &mut m, &r, Direction::I);
        assert!((m.sh[Direction::I][0] - 1.0).abs() < TOL);
        assert!((m.sh[Direction::I][1] - 2.0).abs() < TOL);
        assert!((m.sb[Direction::I][0] + 1.0).abs() < TOL);
        // Other direction untouched
        assert_eq!(m.sh[Direction::J].max_abs(), 0.0);
    }

    #[test]
    fn test_extremum_gives_zero_slope() {
        let [l, mut m, r] = cells_with([1.0, 3.0, 2.0], [1.0, 1.0, 1.0]);
        van_leer_slope(&l, &mut m, &r, Direction::I);
        assert_eq!(m.sh[Direction::I].max_abs(), 0.0);
        assert_eq!(m.sb[Direction::I].max_abs(), 0.0);
    }

    #[test]
    fn test_flat_data_gives_zero_slope() {
        let [l, mut m, r] = cells_with([2.0, 2.0, 2.0], [1.0, 1.0, 1.0]);
        van_leer_slope(&l, &mut m, &r, Direction::I);
        assert!(m.sh[Direction::I].is_finite());
        assert_eq!(m.sh[Direction::I].max_abs(), 0.0);
    }

    #[test]
    fn test_non_uniform_spacing() {
        // Left difference over ½(1 + 3) = 2, right over ½(1 + 1) = 1
        let [l, mut m, r] = cells_with([0.0, 2.0, 3.0], [3.0, 1.0, 1.0]);
        van_leer_slope(&l, &mut m, &r, Direction::I);
        // sL = sR = 1 at node 0
        assert!((m.sh[Direction::I][0] - 1.0).abs() < TOL);
    }

    #[test]
    fn test_into_matches_in_place() {
        let [l, mut m, r] = cells_with([1.0, 1.5, 4.0], [1.0, 1.0, 1.0]);
        let mut sh = vec![0.0; 2];
        let mut sb = vec![0.0; 2];
        reconstruct_into(&Minmod, &l, &m, &r, Direction::I, &mut sh, &mut sb);
        reconstruct(&StandardLimiter::Minmod, &l, &mut m, &r, Direction::I);
        assert_eq!(&m.sh[Direction::I][..], &sh[..]);
        assert_eq!(&m.sb[Direction::I][..], &sb[..]);
        assert!((sh[0] - 0.5).abs() < TOL);
    }
}
