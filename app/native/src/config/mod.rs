//! Configuration module for Deskpet.
//!
//! This module provides configuration types, loading functionality, and
//! template generation. Nothing here is global: callers load a [`PetConfig`]
//! once and hand it to the simulation.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod template;
pub mod types;

use std::path::{Path, PathBuf};

pub use types::{
    BehaviorConfig, ConfigError, DEFAULT_FPS, DisplayConfig, EasingType, PetConfig, PhysicsConfig,
    config_paths, load_config, load_config_from_path, parse_config,
};

/// Loads the configuration, falling back to defaults when no file exists.
///
/// With `custom_path`, only that file is considered. Returns the config and the
/// path it came from, if any.
///
/// # Errors
///
/// Returns an error if a configuration file exists but cannot be read or parsed.
pub fn load_or_default(
    custom_path: Option<&Path>,
) -> Result<(PetConfig, Option<PathBuf>), ConfigError> {
    let result = custom_path.map_or_else(load_config, load_config_from_path);

    match result {
        Ok((config, path)) => {
            tracing::info!(path = %path.display(), "loaded configuration");
            Ok((config, Some(path)))
        }
        Err(ConfigError::NotFound) => {
            tracing::debug!("no configuration file found, using defaults");
            Ok((PetConfig::default(), None))
        }
        Err(err) => Err(err),
    }
}

/// Returns the JSON Schema of the configuration file, pretty-printed.
///
/// # Errors
///
/// Returns an error if the schema cannot be serialized.
pub fn schema_json() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(PetConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_load_or_default_missing_custom_path_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let (config, path) = load_or_default(Some(&dir.path().join("absent.jsonc"))).unwrap();
        assert_eq!(config, PetConfig::default());
        assert!(path.is_none());
    }

    #[test]
    fn test_load_or_default_invalid_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(load_or_default(Some(file.path())).is_err());
    }

    #[test]
    fn test_schema_json_describes_sections() {
        let schema = schema_json().unwrap();
        assert!(schema.contains("display"));
        assert!(schema.contains("physics"));
        assert!(schema.contains("peerRepulsion"));
    }
}
