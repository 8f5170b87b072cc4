//! The per-frame simulation driver and its behavior interface.
//!
//! - `driver` - [`Simulation`], one pet window advanced frame by frame
//! - `intent` - Animation requests and the [`Behavior`] trait

mod driver;
mod intent;

pub use driver::{FrameInput, FrameOutput, Simulation};
pub use intent::{AnimData, Behavior, IdleBehavior};
