//! Scratch buffers for the interface flux.

use crate::velocity::VelocityGrid;

/// Per-face scratch space, reused across faces by one worker.
///
/// Holds the node velocities rotated into the face frame and the
/// reconstructed interface distributions and slopes.
#[derive(Clone, Debug)]
pub struct FaceWorkspace {
    /// Normal node velocity
    pub vn: Vec<f64>,
    /// Tangential node velocity
    pub vt: Vec<f64>,
    /// Upwind selector, 1 where vn >= 0
    pub delta: Vec<f64>,
    /// Interface h
    pub h: Vec<f64>,
    /// Interface b
    pub b: Vec<f64>,
    /// Interface slope of h
    pub sh: Vec<f64>,
    /// Interface slope of b
    pub sb: Vec<f64>,
}

impl FaceWorkspace {
    /// Workspace for `n` velocity nodes.
    pub fn new(n: usize) -> Self {
        Self {
            vn: vec![0.0; n],
            vt: vec![0.0; n],
            delta: vec![0.0; n],
            h: vec![0.0; n],
            b: vec![0.0; n],
            sh: vec![0.0; n],
            sb: vec![0.0; n],
        }
    }

    /// Workspace sized for a velocity grid.
    pub fn for_grid(grid: &VelocityGrid) -> Self {
        Self::new(grid.len())
    }

    /// Number of velocity nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.vn.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vn.is_empty()
    }

    /// Rotate the grid velocities into the frame of a face with unit normal
    /// `(cosx, cosy)` and set the upwind selector (`sign(0) = +1`).
    pub fn rotate(&mut self, grid: &VelocityGrid, cosx: f64, cosy: f64) {
        let (u, v) = (grid.u(), grid.v());
        for k in 0..self.vn.len() {
            let vn = u[k] * cosx + v[k] * cosy;
            self.vn[k] = vn;
            self.vt[k] = v[k] * cosx - u[k] * cosy;
            self.delta[k] = if vn >= 0.0 { 1.0 } else { 0.0 };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_and_upwind() {
        let grid = VelocityGrid::from_rules(&[-1.0, 0.0, 2.0], &[1.0; 3], &[-0.5, 0.5], &[1.0; 2])
            .unwrap();
        let mut ws = FaceWorkspace::for_grid(&grid);
        assert_eq!(ws.len(), 6);

        ws.rotate(&grid, 0.0, 1.0);
        // Normal +y: vn = v, vt = -u
        assert_eq!(ws.vn, vec![-0.5, 0.5, -0.5, 0.5, -0.5, 0.5]);
        assert_eq!(ws.vt[0], 1.0);
        assert_eq!(ws.vt[5], -2.0);
        assert_eq!(ws.delta, vec![0.0, 1.0, 0.0, 1.0, 0.0, 1.0]);

        // Zero normal velocity counts as upwind from the left
        ws.rotate(&grid, 1.0, 0.0);
        assert_eq!(ws.delta[2], 1.0);
        assert_eq!(ws.delta[0], 0.0);
    }
}
