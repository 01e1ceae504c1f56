//! Macroscopic state types and frame rotation.
//!
//! - [`ConservedState`]: (ρ, ρu, ρv, ρE), also the layout of fluxes and moments
//! - [`PrimitiveState`]: (ρ, u, v, λ) with λ = 1/(2RT)
//! - [`to_local`], [`to_global`]: rotation into and out of a face-aligned frame

mod frame;
mod macroscopic;

pub use frame::{local_velocity, to_global, to_local};
pub use macroscopic::{ConservedState, PrimitiveState};
