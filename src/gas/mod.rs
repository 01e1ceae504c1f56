//! Gas model: ideal-gas closure and collision time.
//!
//! The gas has `CK` internal (non-translational) degrees of freedom on top of
//! the two resolved velocity components, so
//!
//! γ = (CK + 4) / (CK + 2)
//!
//! and the conservative energy is
//!
//! ρE = ½ ρ / (λ(γ - 1)) + ½ ρ (u² + v²)
//!
//! Viscosity follows a power law μ ∝ T^ω, giving the collision time
//!
//! τ = μ_ref · 2 λ^(1-ω) / ρ
//!
//! where μ_ref is fixed at setup from the Knudsen number and the reference
//! molecular model (HS/VHS/VSS).

use std::f64::consts::PI;

use crate::error::{Result, UgksError};
use crate::state::{ConservedState, PrimitiveState};

/// Molecular model used to relate the reference viscosity to the Knudsen number.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MolecularModel {
    /// Hard sphere (α = 1, ω = 0.5).
    HardSphere,
    /// Variable hard sphere with reference exponent ω_ref (α = 1).
    VariableHardSphere { omega_ref: f64 },
    /// Variable soft sphere.
    VariableSoftSphere { alpha_ref: f64, omega_ref: f64 },
}

impl MolecularModel {
    /// Scattering parameter α and reference viscosity index ω.
    pub fn parameters(&self) -> (f64, f64) {
        match *self {
            MolecularModel::HardSphere => (1.0, 0.5),
            MolecularModel::VariableHardSphere { omega_ref } => (1.0, omega_ref),
            MolecularModel::VariableSoftSphere {
                alpha_ref,
                omega_ref,
            } => (alpha_ref, omega_ref),
        }
    }

    /// Reference viscosity for a given Knudsen number.
    ///
    /// μ_ref = 5(α+1)(α+2)√π / (4α(5-2ω)(7-2ω)) · Kn
    pub fn reference_viscosity(&self, knudsen: f64) -> f64 {
        let (alpha, omega) = self.parameters();
        5.0 * (alpha + 1.0) * (alpha + 2.0) * PI.sqrt()
            / (4.0 * alpha * (5.0 - 2.0 * omega) * (7.0 - 2.0 * omega))
            * knudsen
    }
}

/// Gas parameters as specified by the user.
#[derive(Clone, Debug, PartialEq)]
pub struct GasConfig {
    /// Internal degrees of freedom CK (0 for a 2D monatomic gas; 1 when the
    /// third translational component of a monatomic gas is folded in).
    pub ck: f64,
    /// Prandtl number.
    pub prandtl: f64,
    /// Reference Knudsen number.
    pub knudsen: f64,
    /// Temperature exponent of viscosity, μ ∝ T^ω.
    pub omega: f64,
    /// Molecular model for the reference viscosity.
    pub reference: MolecularModel,
}

impl Default for GasConfig {
    /// Monatomic gas (argon-like) at Kn = 0.075, as used for the lid-driven cavity.
    fn default() -> Self {
        Self {
            ck: 1.0,
            prandtl: 2.0 / 3.0,
            knudsen: 0.075,
            omega: 0.72,
            reference: MolecularModel::HardSphere,
        }
    }
}

impl GasConfig {
    /// Set internal degrees of freedom.
    pub fn with_ck(mut self, ck: f64) -> Self {
        self.ck = ck;
        self
    }

    /// Set Prandtl number.
    pub fn with_prandtl(mut self, prandtl: f64) -> Self {
        self.prandtl = prandtl;
        self
    }

    /// Set Knudsen number.
    pub fn with_knudsen(mut self, knudsen: f64) -> Self {
        self.knudsen = knudsen;
        self
    }

    /// Set viscosity temperature exponent.
    pub fn with_omega(mut self, omega: f64) -> Self {
        self.omega = omega;
        self
    }

    /// Set the reference molecular model.
    pub fn with_reference(mut self, reference: MolecularModel) -> Self {
        self.reference = reference;
        self
    }
}

/// Immutable gas constants derived once per run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GasModel {
    /// Internal degrees of freedom CK.
    pub ck: f64,
    /// Ratio of specific heats γ.
    pub gamma: f64,
    /// Prandtl number.
    pub prandtl: f64,
    /// Viscosity temperature exponent ω.
    pub omega: f64,
    /// Reference viscosity μ_ref.
    pub mu_ref: f64,
}

impl GasModel {
    /// Derive gas constants from a configuration.
    pub fn new(config: &GasConfig) -> Result<Self> {
        if !(config.ck >= 0.0 && config.ck.is_finite()) {
            return Err(UgksError::invalid_config(format!(
                "internal degrees of freedom must be >= 0, got {}",
                config.ck
            )));
        }
        if !(config.prandtl > 0.0) {
            return Err(UgksError::invalid_config(format!(
                "Prandtl number must be positive, got {}",
                config.prandtl
            )));
        }
        if !(config.knudsen > 0.0) {
            return Err(UgksError::invalid_config(format!(
                "Knudsen number must be positive, got {}",
                config.knudsen
            )));
        }
        let (alpha, omega_ref) = config.reference.parameters();
        if !(alpha > 0.0 && omega_ref < 2.5) {
            return Err(UgksError::invalid_config(format!(
                "invalid molecular model parameters alpha={alpha}, omega={omega_ref}"
            )));
        }

        Ok(Self::derive(config))
    }

    fn derive(config: &GasConfig) -> Self {
        Self {
            ck: config.ck,
            gamma: (config.ck + 4.0) / (config.ck + 2.0),
            prandtl: config.prandtl,
            omega: config.omega,
            mu_ref: config.reference.reference_viscosity(config.knudsen),
        }
    }

    /// Primitive to conservative state.
    #[inline]
    pub fn to_conservative(&self, prim: &PrimitiveState) -> ConservedState {
        ConservedState {
            rho: prim.rho,
            rho_u: prim.rho * prim.u,
            rho_v: prim.rho * prim.v,
            rho_e: 0.5 * prim.rho / prim.lambda / (self.gamma - 1.0)
                + 0.5 * prim.rho * (prim.u * prim.u + prim.v * prim.v),
        }
    }

    /// Conservative to primitive state.
    ///
    /// Non-positive density or internal energy yields NaN/Inf components.
    #[inline]
    pub fn to_primitive(&self, w: &ConservedState) -> PrimitiveState {
        let u = w.rho_u / w.rho;
        let v = w.rho_v / w.rho;
        let internal = w.rho_e - 0.5 * (w.rho_u * w.rho_u + w.rho_v * w.rho_v) / w.rho;
        PrimitiveState {
            rho: w.rho,
            u,
            v,
            lambda: 0.5 * w.rho / (self.gamma - 1.0) / internal,
        }
    }

    /// Speed of sound c = sqrt(γ/(2λ)).
    #[inline]
    pub fn sound_speed(&self, prim: &PrimitiveState) -> f64 {
        (0.5 * self.gamma / prim.lambda).sqrt()
    }

    /// Collision time τ = μ_ref · 2λ^(1-ω) / ρ.
    #[inline]
    pub fn collision_time(&self, prim: &PrimitiveState) -> f64 {
        self.mu_ref * 2.0 * prim.lambda.powf(1.0 - self.omega) / prim.rho
    }

    /// Prandtl-number factor 0.8(1 - Pr) of the Shakhov correction.
    #[inline]
    pub fn shakhov_coefficient(&self) -> f64 {
        0.8 * (1.0 - self.prandtl)
    }
}

impl Default for GasModel {
    fn default() -> Self {
        Self::derive(&GasConfig::default())
    }
}
