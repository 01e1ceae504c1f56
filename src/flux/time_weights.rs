//! Time-integration weights of the UGKS interface solution.

/// Integrals over one step `[0, dt]` of the time kernels of the integral
/// solution, for collision time τ:
///
/// | weight | multiplies |
/// |--------|------------|
/// | `Mt1 = dt - Mt4` | equilibrium at the interface |
/// | `Mt2 = -τ Mt1 + Mt5` | spatial equilibrium slopes |
/// | `Mt3 = ½ dt² - τ Mt1` | temporal equilibrium slope |
/// | `Mt4 = τ(1 - e^(-dt/τ))` | initial distribution |
/// | `Mt5 = -τ dt e^(-dt/τ) + τ Mt4` | initial distribution slope |
///
/// `Mt1 + Mt4 = dt` always holds. In the free-molecular limit τ → ∞ the
/// weights reduce to pure upwind transport (Mt4 → dt, Mt5 → ½ dt²); in the
/// continuum limit τ → 0 only the equilibrium terms survive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeWeights {
    /// `[Mt1, Mt2, Mt3, Mt4, Mt5]`
    pub mt: [f64; 5],
}

impl TimeWeights {
    /// Weights for collision time `tau` and step `dt`.
    #[inline]
    pub fn new(tau: f64, dt: f64) -> Self {
        let decay = (-dt / tau).exp();
        // 1 - e^(-x) loses all digits for τ ≫ dt
        let mt4 = -tau * (-dt / tau).exp_m1();
        let mt5 = -tau * dt * decay + tau * mt4;
        let mt1 = dt - mt4;
        let mt2 = -tau * mt1 + mt5;
        let mt3 = 0.5 * dt * dt - tau * mt1;
        Self {
            mt: [mt1, mt2, mt3, mt4, mt5],
        }
    }

    #[inline(always)]
    pub fn mt1(&self) -> f64 {
        self.mt[0]
    }

    #[inline(always)]
    pub fn mt2(&self) -> f64 {
        self.mt[1]
    }

    #[inline(always)]
    pub fn mt3(&self) -> f64 {
        self.mt[2]
    }

    #[inline(always)]
    pub fn mt4(&self) -> f64 {
        self.mt[3]
    }

    #[inline(always)]
    pub fn mt5(&self) -> f64 {
        self.mt[4]
    }
}
