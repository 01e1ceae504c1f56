//! Macroscopic state vectors.
//!
//! A 2D gas cell carries the conservative state (ρ, ρu, ρv, ρE). The same
//! four-component layout is used for conservative fluxes and for the
//! collision-invariant moments ⟨ψ ...⟩, ψ = (1, u, v, ½(u² + v² + ξ²)).
//!
//! The primitive state uses λ = 1/(2RT) in place of temperature, which keeps
//! the Maxwellian and its moments free of the gas constant.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Conservative state (ρ, ρu, ρv, ρE), also used for fluxes and moments.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ConservedState {
    /// Density ρ
    pub rho: f64,
    /// x-momentum ρu (normal momentum in a face-local frame)
    pub rho_u: f64,
    /// y-momentum ρv (tangential momentum in a face-local frame)
    pub rho_v: f64,
    /// Total energy density ρE
    pub rho_e: f64,
}

impl ConservedState {
    /// Create a new conservative state.
    #[inline(always)]
    pub const fn new(rho: f64, rho_u: f64, rho_v: f64, rho_e: f64) -> Self {
        Self {
            rho,
            rho_u,
            rho_v,
            rho_e,
        }
    }

    /// Zero vector.
    #[inline(always)]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert to array [ρ, ρu, ρv, ρE].
    #[inline(always)]
    pub fn to_array(&self) -> [f64; 4] {
        [self.rho, self.rho_u, self.rho_v, self.rho_e]
    }

    /// Create from array [ρ, ρu, ρv, ρE].
    #[inline(always)]
    pub fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Whether every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.rho.is_finite()
            && self.rho_u.is_finite()
            && self.rho_v.is_finite()
            && self.rho_e.is_finite()
    }

    /// Largest absolute component.
    pub fn max_abs(&self) -> f64 {
        self.to_array().iter().fold(0.0_f64, |m, x| m.max(x.abs()))
    }
}

impl Add for ConservedState {
    type Output = Self;

    #[inline(always)]
    fn add(self, other: Self) -> Self {
        Self::new(
            self.rho + other.rho,
            self.rho_u + other.rho_u,
            self.rho_v + other.rho_v,
            self.rho_e + other.rho_e,
        )
    }
}

impl AddAssign for ConservedState {
    #[inline(always)]
    fn add_assign(&mut self, other: Self) {
        self.rho += other.rho;
        self.rho_u += other.rho_u;
        self.rho_v += other.rho_v;
        self.rho_e += other.rho_e;
    }
}

impl Sub for ConservedState {
    type Output = Self;

    #[inline(always)]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.rho - other.rho,
            self.rho_u - other.rho_u,
            self.rho_v - other.rho_v,
            self.rho_e - other.rho_e,
        )
    }
}

impl Neg for ConservedState {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self::new(-self.rho, -self.rho_u, -self.rho_v, -self.rho_e)
    }
}

impl Mul<f64> for ConservedState {
    type Output = Self;

    #[inline(always)]
    fn mul(self, scalar: f64) -> Self {
        Self::new(
            self.rho * scalar,
            self.rho_u * scalar,
            self.rho_v * scalar,
            self.rho_e * scalar,
        )
    }
}

impl Mul<ConservedState> for f64 {
    type Output = ConservedState;

    #[inline(always)]
    fn mul(self, state: ConservedState) -> ConservedState {
        state * self
    }
}

/// Primitive state (ρ, u, v, λ) with λ = 1/(2RT).
///
/// Physical validity requires ρ > 0 and λ > 0. States built from a
/// non-physical conservative vector carry NaN/Inf and are caught by the
/// driver's divergence check, not here.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrimitiveState {
    /// Density ρ
    pub rho: f64,
    /// x-velocity (normal velocity in a face-local frame)
    pub u: f64,
    /// y-velocity (tangential velocity in a face-local frame)
    pub v: f64,
    /// Inverse temperature λ = 1/(2RT)
    pub lambda: f64,
}

impl PrimitiveState {
    /// Create a new primitive state.
    #[inline(always)]
    pub const fn new(rho: f64, u: f64, v: f64, lambda: f64) -> Self {
        Self { rho, u, v, lambda }
    }

    /// Create from array [ρ, u, v, λ].
    #[inline(always)]
    pub fn from_array(arr: [f64; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Convert to array [ρ, u, v, λ].
    #[inline(always)]
    pub fn to_array(&self) -> [f64; 4] {
        [self.rho, self.u, self.v, self.lambda]
    }

    /// Thermal energy scale RT = 1/(2λ).
    #[inline]
    pub fn rt(&self) -> f64 {
        0.5 / self.lambda
    }

    /// Pressure p = ρRT = ρ/(2λ).
    #[inline]
    pub fn pressure(&self) -> f64 {
        0.5 * self.rho / self.lambda
    }

    /// Whether the state is physically admissible (finite, ρ > 0, λ > 0).
    #[inline]
    pub fn is_physical(&self) -> bool {
        self.rho.is_finite()
            && self.u.is_finite()
            && self.v.is_finite()
            && self.lambda.is_finite()
            && self.rho > 0.0
            && self.lambda > 0.0
    }
}
