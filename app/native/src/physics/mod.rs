//! Physics for a single pet body.
//!
//! - `vec2` - 2D vector math
//! - `obstacles` - World regions, barriers and point charges (y-up coordinates)
//! - `plane` - The body, its constants and the per-frame update

mod obstacles;
mod plane;
mod vec2;

pub use obstacles::{Barrier, PointCharge, RectArea};
pub use plane::{BarrierList, ChargeList, DropState, Plane};
pub use vec2::Vec2;
