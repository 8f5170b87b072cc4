//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::fs;
use std::path::Path;

/// Generates a configuration template with all options commented out.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// Deskpet Configuration File
// ==========================
// This file uses JSONC format (JSON with comments).
// All options below are commented out and show their default values.
// Uncomment and modify the options you want to configure.

{
  // ============================================================================
  // Display
  // ============================================================================
  // "display": {
  //   // Target frames per second of the render loop
  //   "fps": 30,
  //
  //   // Scale applied to the sprite canvas and walking speed
  //   "scale": 1.0,
  //
  //   // Roam across every monitor instead of the primary one only
  //   "multiMonitors": false,
  //
  //   // Pixels reserved at the bottom of each monitor (taskbar)
  //   "marginBottom": 0,
  //
  //   // Position smoothing: "linear", "ease-in", "ease-out", "ease-in-out"
  //   "easing": "linear",
  //   "easingDuration": 0.2,
  //
  //   // Sprite canvas size before scaling
  //   "width": 200,
  //   "height": 200
  // },

  // ============================================================================
  // Physics (pixels and seconds)
  // ============================================================================
  // "physics": {
  //   "gravity": 800,
  //   "airFriction": 100,
  //   "staticFriction": 500,
  //   "speedLimitX": 1000,
  //   "speedLimitY": 1000,
  //
  //   // Fraction of vertical speed kept after landing (0 = no rebound)
  //   "bounce": 0
  // },

  // ============================================================================
  // Behavior
  // ============================================================================
  // "behavior": {
  //   // Push away from other pet windows
  //   "peerRepulsion": true
  // }
}
"#
    .to_string()
}

/// Creates a configuration file with the template at the specified path.
///
/// Creates parent directories if they don't exist.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_config_template())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PetConfig, parse_config};

    #[test]
    fn test_template_parses_to_defaults() {
        let config = parse_config(&generate_config_template()).unwrap();
        assert_eq!(config, PetConfig::default());
    }

    #[test]
    fn test_template_contains_all_sections() {
        let template = generate_config_template();
        assert!(template.contains("\"display\""));
        assert!(template.contains("\"physics\""));
        assert!(template.contains("\"behavior\""));
    }

    #[test]
    fn test_create_config_file_makes_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.jsonc");
        create_config_file(&path).unwrap();
        assert!(path.exists());
    }
}
