//! Display configuration types.
//!
//! Frame rate, sprite scale, monitor usage and the smoothing applied to the
//! window position.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default frame rate when none is configured.
pub const DEFAULT_FPS: u32 = 30;

/// Default position smoothing duration in seconds.
const DEFAULT_EASING_DURATION: f64 = 0.2;

/// Default sprite canvas edge in unscaled pixels.
const DEFAULT_CANVAS_EDGE: u32 = 200;

/// Easing function for window motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Linear interpolation.
    #[default]
    Linear,
    /// Ease in (slow start).
    EaseIn,
    /// Ease out (slow end).
    EaseOut,
    /// Ease in and out (slow start and end).
    EaseInOut,
}

/// Display configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Target frames per second of the host render loop.
    /// Default: 30
    pub fps: u32,

    /// Scale applied to the sprite canvas and walking speed.
    /// Default: 1.0
    pub scale: f64,

    /// Allow the pet to roam across every monitor instead of the primary one.
    /// Default: false
    pub multi_monitors: bool,

    /// Pixels reserved at the bottom of each monitor (e.g. for a taskbar).
    /// Default: 0
    pub margin_bottom: i32,

    /// Easing curve used to smooth the window position.
    /// Default: "linear"
    pub easing: EasingType,

    /// Smoothing duration in seconds.
    /// Default: 0.2
    pub easing_duration: f64,

    /// Sprite canvas width before scaling.
    /// Default: 200
    pub width: u32,

    /// Sprite canvas height before scaling.
    /// Default: 200
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            scale: 1.0,
            multi_monitors: false,
            margin_bottom: 0,
            easing: EasingType::Linear,
            easing_duration: DEFAULT_EASING_DURATION,
            width: DEFAULT_CANVAS_EDGE,
            height: DEFAULT_CANVAS_EDGE,
        }
    }
}

impl DisplayConfig {
    /// Frame rate clamped to at least one frame per second.
    #[must_use]
    pub fn fps(&self) -> u32 { self.fps.max(1) }

    /// Scaled window size in whole pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)] // Canvas sizes are far below i32::MAX
    pub fn window_size(&self) -> (i32, i32) {
        (
            (self.scale * f64::from(self.width)) as i32,
            (self.scale * f64::from(self.height)) as i32,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_config_default() {
        let config = DisplayConfig::default();
        assert_eq!(config.fps, 30);
        assert!(!config.multi_monitors);
        assert_eq!(config.easing, EasingType::Linear);
        assert_eq!(config.window_size(), (200, 200));
    }

    #[test]
    fn test_window_size_truncates_scaled_canvas() {
        let config = DisplayConfig { scale: 1.5, width: 101, height: 300, ..Default::default() };
        assert_eq!(config.window_size(), (151, 450));
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let config = DisplayConfig { fps: 0, ..Default::default() };
        assert_eq!(config.fps(), 1);
    }

    #[test]
    fn test_deserialize_kebab_easing() {
        let json = r#"{"easing": "ease-in-out", "multiMonitors": true}"#;
        let config: DisplayConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.easing, EasingType::EaseInOut);
        assert!(config.multi_monitors);
        assert_eq!(config.fps, 30);
    }
}
