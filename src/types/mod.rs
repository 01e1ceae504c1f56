//! Small structural types shared across the crate.
//!
//! - [`Direction`]: closed two-valued mesh direction tag (`I`, `J`)
//! - [`Side`], [`SideBoundaries`]: named per-edge values for the domain boundary

mod direction;
mod sides;

pub use direction::Direction;
pub use sides::{Side, SideBoundaries};
