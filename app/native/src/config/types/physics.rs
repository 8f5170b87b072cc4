//! Physics configuration types.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Physics constants for the pet body, in pixels and seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PhysicsConfig {
    /// Downward acceleration (px/s²).
    /// Default: 800
    pub gravity: f64,

    /// Deceleration while airborne (px/s²).
    /// Default: 100
    pub air_friction: f64,

    /// Deceleration while standing on a surface (px/s²).
    /// Default: 500
    pub static_friction: f64,

    /// Maximum horizontal speed (px/s).
    /// Default: 1000
    pub speed_limit_x: f64,

    /// Maximum vertical speed (px/s).
    /// Default: 1000
    pub speed_limit_y: f64,

    /// Fraction of vertical speed kept after hitting a surface (0 = no rebound).
    /// Default: 0
    pub bounce: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 800.0,
            air_friction: 100.0,
            static_friction: 500.0,
            speed_limit_x: 1000.0,
            speed_limit_y: 1000.0,
            bounce: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physics_config_default() {
        let config = PhysicsConfig::default();
        assert!((config.gravity - 800.0).abs() < f64::EPSILON);
        assert!(config.bounce.abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_partial_json_uses_defaults() {
        let json = r#"{"gravity": 1200, "speedLimitX": 300.5}"#;
        let config: PhysicsConfig = serde_json::from_str(json).unwrap();
        assert!((config.gravity - 1200.0).abs() < f64::EPSILON);
        assert!((config.speed_limit_x - 300.5).abs() < f64::EPSILON);
        assert!((config.static_friction - 500.0).abs() < f64::EPSILON);
    }
}
