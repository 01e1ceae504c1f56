//! Rotation between the global (x, y) frame and a face-local (n, t) frame.
//!
//! For a face with unit normal (cosx, cosy):
//! - normal component:     w_n =  w_x cosx + w_y cosy
//! - tangential component: w_t = -w_x cosy + w_y cosx
//!
//! Only the momentum components rotate; density and energy are scalars.

use super::ConservedState;

/// Rotate a state or flux from the global frame to the face-local frame.
#[inline]
pub fn to_local(w: &ConservedState, cosx: f64, cosy: f64) -> ConservedState {
    ConservedState {
        rho: w.rho,
        rho_u: w.rho_u * cosx + w.rho_v * cosy,
        rho_v: w.rho_v * cosx - w.rho_u * cosy,
        rho_e: w.rho_e,
    }
}

/// Rotate a state or flux from the face-local frame back to the global frame.
#[inline]
pub fn to_global(w: &ConservedState, cosx: f64, cosy: f64) -> ConservedState {
    ConservedState {
        rho: w.rho,
        rho_u: w.rho_u * cosx - w.rho_v * cosy,
        rho_v: w.rho_u * cosy + w.rho_v * cosx,
        rho_e: w.rho_e,
    }
}

/// Velocity components of a micro-velocity (u, v) in the face-local frame.
#[inline(always)]
pub fn local_velocity(u: f64, v: f64, cosx: f64, cosy: f64) -> (f64, f64) {
    (u * cosx + v * cosy, v * cosx - u * cosy)
}
