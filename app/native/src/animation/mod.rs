//! Easing and transitions for on-screen motion.
//!
//! - `easing` - Time-based easing curves (linear, ease-in, ease-out, ease-in-out)
//! - `transition` - Scalar and vector transitions advanced by frame delta

mod easing;
mod transition;

pub use easing::{apply_easing, lerp};
pub use transition::{Interpolate, Transition, TransitionF64, TransitionVec2};
