//! Configuration types for Deskpet.
//!
//! This module provides all configuration types organized by domain.
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

pub mod behavior;
pub mod display;
pub mod physics;
pub mod root;

pub use behavior::BehaviorConfig;
pub use display::{DEFAULT_FPS, DisplayConfig, EasingType};
pub use physics::PhysicsConfig;
pub use root::{
    ConfigError, PetConfig, config_paths, load_config, load_config_from_path, parse_config,
};
