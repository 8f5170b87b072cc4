//! Behavior configuration types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Behavior toggles that affect how peers interact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorConfig {
    /// Push away from other pet windows.
    /// Default: true
    pub peer_repulsion: bool,
}

impl Default for BehaviorConfig {
    fn default() -> Self { Self { peer_repulsion: true } }
}
