//! Convergence monitoring and run summaries.
//!
//! The steady-state residual of component `k` is
//!
//! ```text
//! res_k = sqrt(N Σ (w_old - w_new)_k²) / (Σ |w_new|_k + ε)
//! ```
//!
//! summed over the `N` interior cells.

use std::fmt;

use crate::state::ConservedState;

/// Guards the residual denominator against an all-zero component.
pub const RESIDUAL_EPS: f64 = 1e-300;

/// Running sums for the residual of one update sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResidualAccumulator {
    sum_sq: [f64; 4],
    sum_abs: [f64; 4],
    n_cells: usize,
}

impl ResidualAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one cell's change.
    #[inline]
    pub fn add(&mut self, old: &ConservedState, new: &ConservedState) {
        let (old, new) = (old.to_array(), new.to_array());
        for k in 0..4 {
            let d = old[k] - new[k];
            self.sum_sq[k] += d * d;
            self.sum_abs[k] += new[k].abs();
        }
        self.n_cells += 1;
    }

    /// Number of cells recorded.
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.n_cells
    }

    /// Residual per conservative component.
    pub fn finish(&self) -> [f64; 4] {
        let n = self.n_cells as f64;
        std::array::from_fn(|k| (n * self.sum_sq[k]).sqrt() / (self.sum_abs[k] + RESIDUAL_EPS))
    }
}

/// Residual between two snapshots of the interior states.
pub fn residual(old: &[ConservedState], new: &[ConservedState]) -> [f64; 4] {
    let mut acc = ResidualAccumulator::new();
    for (o, n) in old.iter().zip(new.iter()) {
        acc.add(o, n);
    }
    acc.finish()
}

/// Outcome of [`Solver::run`](super::Solver::run).
#[derive(Clone, Debug, PartialEq)]
pub struct RunSummary {
    /// Steps taken.
    pub iterations: usize,
    /// Simulation time reached.
    pub time: f64,
    /// Residual after the last step.
    pub residual: [f64; 4],
    /// Whether the residual tolerance was met.
    pub converged: bool,
    /// Wall-clock time in seconds.
    pub wall_time: f64,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.converged {
            "converged"
        } else {
            "stopped"
        };
        let steps_per_sec = if self.wall_time > 0.0 {
            self.iterations as f64 / self.wall_time
        } else {
            0.0
        };
        write!(
            f,
            "{} after {} steps | t={:.4e} | res=[{:.2e}, {:.2e}, {:.2e}, {:.2e}] | {} ({:.1} steps/s)",
            status,
            self.iterations,
            self.time,
            self.residual[0],
            self.residual[1],
            self.residual[2],
            self.residual[3],
            wall_clock(self.wall_time),
            steps_per_sec
        )
    }
}

/// Wall-clock time for run summaries: `850ms`, `2.35s`, `1m30s` or
/// `1h01m40s`.
fn wall_clock(secs: f64) -> String {
    if secs < 1.0 {
        return format!("{:.0}ms", secs * 1e3);
    }
    if secs < 60.0 {
        return format!("{secs:.2}s");
    }
    let total = secs.round() as u64;
    let (hours, mins, s) = (total / 3600, (total / 60) % 60, total % 60);
    if hours == 0 {
        format!("{mins}m{s:02}s")
    } else {
        format!("{hours}h{mins:02}m{s:02}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-14;

    #[test]
    fn test_residual_of_unchanged_state_is_zero() {
        let w = vec![ConservedState::new(1.0, 0.1, 0.0, 2.0); 5];
        assert_eq!(residual(&w, &w), [0.0; 4]);
    }

    #[test]
    fn test_residual_value() {
        let old = vec![ConservedState::new(1.0, 0.0, 0.0, 1.0); 4];
        let mut new = old.clone();
        new[0].rho = 1.1;
        let res = residual(&old, &new);
        // sqrt(4 * 0.01) / 4.1
        assert!((res[0] - 0.2 / 4.1).abs() < TOL, "res = {}", res[0]);
        assert_eq!(res[3], 0.0);
        // Zero component stays finite
        assert_eq!(res[1], 0.0);
    }

    #[test]
    fn test_wall_clock() {
        assert_eq!(wall_clock(0.042), "42ms");
        assert_eq!(wall_clock(2.346), "2.35s");
        assert_eq!(wall_clock(90.0), "1m30s");
        assert_eq!(wall_clock(3700.0), "1h01m40s");
    }

    #[test]
    fn test_summary_display() {
        let summary = RunSummary {
            iterations: 42,
            time: 0.5,
            residual: [1e-9; 4],
            converged: true,
            wall_time: 2.0,
        };
        let text = summary.to_string();
        assert!(text.starts_with("converged after 42 steps"));
        assert!(text.contains("| 2.00s ("));
        assert!(text.contains("21.0 steps/s"));
    }
}
