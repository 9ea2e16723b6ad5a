//! voiceguard configuration system.
//!
//! TOML-based configuration with validation and live reload. Every
//! section has defaults, so an empty file protects against everything.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use voiceguard_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{GuardConfig, LogLevel, ProtectionConfig};
pub use toml_writer::save_config_to_path;
pub use watcher::ConfigWatcher;

use std::path::Path;
use voiceguard_common::ConfigError;

/// Load config from the platform default path and validate it.
///
/// Creates a commented default file if none exists.
pub fn load_config() -> Result<GuardConfig, ConfigError> {
    let path = toml_loader::default_config_path()?;
    let config = toml_loader::read_or_create(&path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<GuardConfig, ConfigError> {
    let config = toml_loader::read_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GuardConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
