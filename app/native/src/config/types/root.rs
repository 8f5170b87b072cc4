//! Root configuration type and file loading.

use std::fs;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::behavior::BehaviorConfig;
use super::display::DisplayConfig;
use super::physics::PhysicsConfig;

/// Application directory name used in every search location.
const APP_DIR: &str = "deskpet";

/// Config file names, in priority order.
const CONFIG_FILE_NAMES: [&str; 2] = ["config.jsonc", "config.json"];

/// Root configuration for a pet instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PetConfig {
    /// JSON Schema reference for editor support.
    #[serde(rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Frame rate, scale, monitors and smoothing.
    pub display: DisplayConfig,

    /// Gravity, friction, speed limits and bounce.
    pub physics: PhysicsConfig,

    /// Peer interaction toggles.
    pub behavior: BehaviorConfig,
}

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error("No configuration file found. Expected at ~/.config/deskpet/config.jsonc")]
    NotFound,
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Returns the configuration search paths in priority order.
///
/// 1. `$XDG_CONFIG_HOME/deskpet/`
/// 2. `~/.config/deskpet/`
/// 3. The platform config directory (`dirs::config_dir()`)
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut dirs_to_check = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        dirs_to_check.push(PathBuf::from(xdg_config).join(APP_DIR));
    }
    if let Some(home) = dirs::home_dir() {
        dirs_to_check.push(home.join(".config").join(APP_DIR));
    }
    if let Some(config_dir) = dirs::config_dir() {
        dirs_to_check.push(config_dir.join(APP_DIR));
    }

    let mut paths = Vec::new();
    for dir in dirs_to_check {
        for filename in CONFIG_FILE_NAMES {
            let path = dir.join(filename);
            if !paths.contains(&path) {
                paths.push(path);
            }
        }
    }
    paths
}

/// Parses a JSONC document into a [`PetConfig`].
///
/// # Errors
///
/// Returns [`ConfigError::ParseError`] if the document is not valid JSON after
/// comments are stripped.
pub fn parse_config(source: &str) -> Result<PetConfig, ConfigError> {
    let reader = json_comments::StripComments::new(source.as_bytes());
    Ok(serde_json::from_reader(reader)?)
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable or invalid.
pub fn load_config_from_path(path: &Path) -> Result<(PetConfig, PathBuf), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }
    let file = fs::File::open(path)?;
    let reader = json_comments::StripComments::new(file);
    let config: PetConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}

/// Loads the configuration from the first existing search path.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] when no file exists, or the error from
/// reading the first file that does.
pub fn load_config() -> Result<(PetConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), |path| load_config_from_path(&path))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = PetConfig::default();
        assert!(config.schema.is_none());
        assert_eq!(config.display.fps, 30);
        assert!(config.behavior.peer_repulsion);
    }

    #[test]
    fn test_parse_config_with_comments() {
        let source = r#"{
            // Faster falls
            "physics": { "gravity": 1600 },
            /* roam everywhere */
            "display": { "multiMonitors": true }
        }"#;
        let config = parse_config(source).unwrap();
        assert!((config.physics.gravity - 1600.0).abs() < f64::EPSILON);
        assert!(config.display.multi_monitors);
        assert!((config.physics.air_friction - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_config_rejects_invalid_json() {
        let err = parse_config("{ \"display\": ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_load_config_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{ \"behavior\": {{ \"peerRepulsion\": false }} }} // off").unwrap();

        let (config, path) = load_config_from_path(file.path()).unwrap();
        assert!(!config.behavior.peer_repulsion);
        assert_eq!(path, file.path());
    }

    #[test]
    fn test_load_config_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from_path(&dir.path().join("nope.jsonc")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound));
    }

    #[test]
    fn test_config_paths_prefer_jsonc() {
        let paths = config_paths();
        if let Some(first) = paths.first() {
            assert!(first.ends_with("deskpet/config.jsonc"));
        }
    }

    #[test]
    fn test_schema_field_round_trips() {
        let json = r#"{"$schema": "./schema.json"}"#;
        let config: PetConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.schema.as_deref(), Some("./schema.json"));
    }
}
