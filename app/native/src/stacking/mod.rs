//! Window stacking: turns the desktop's window list into physics obstacles
//! and a z-order target for our own window.
//!
//! - `gate` - Throttle for the enumeration pass
//! - `peer` - Peer index encoded in window titles
//! - `resolver` - Barrier, charge and stack-target derivation
//! - `rows` - Row ownership along the pet's center column

mod gate;
mod peer;
mod resolver;
mod rows;

pub use gate::LoopGate;
pub use peer::{MAX_PEER_INDEX, PeerNaming, TitlePeerNaming};
pub use resolver::{PassContext, Resolution, StackingResolver, build_world};
pub use rows::RowClaims;
