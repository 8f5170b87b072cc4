//! Error types for Deskpet.
//!
//! This module provides the unified error type returned by the simulation
//! and the CLI.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for Deskpet operations.
pub type DeskpetResult<T> = Result<T, DeskpetError>;

/// Errors that can occur during application execution.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum DeskpetError {
    /// Monitor enumeration returned nothing, so no world can be built.
    #[error("No monitors found: cannot build the world")]
    NoMonitors,
    /// The pet's own window could not be located by title.
    #[error("Window not found: {0}")]
    WindowNotFound(String),
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Scene description could not be loaded.
    #[error("Scene error: {0}")]
    SceneError(String),
    /// Command output could not be serialized.
    #[error("Output error: {0}")]
    OutputError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for DeskpetError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<ConfigError> for DeskpetError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_monitors_display() {
        let msg = DeskpetError::NoMonitors.to_string();
        assert!(msg.contains("No monitors"));
    }

    #[test]
    fn test_window_not_found_display() {
        let err = DeskpetError::WindowNotFound("Pet (2)".to_string());
        assert_eq!(err.to_string(), "Window not found: Pet (2)");
    }

    #[test]
    fn test_config_error_conversion() {
        let err: DeskpetError = ConfigError::NotFound.into();
        assert!(matches!(err, DeskpetError::ConfigError(_)));
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_io_error_from_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err: DeskpetError = io_err.into();
        assert!(matches!(err, DeskpetError::IoError(_)));
    }

    #[test]
    fn test_output_error_display() {
        let err = DeskpetError::OutputError("key must be a string".to_string());
        assert_eq!(err.to_string(), "Output error: key must be a string");
    }

    #[test]
    fn test_error_serializes_with_kind() {
        let json = serde_json::to_string(&DeskpetError::NoMonitors).unwrap();
        assert!(json.contains("NoMonitors"));
    }
}
