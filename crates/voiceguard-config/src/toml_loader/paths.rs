//! Config path resolution and default file creation.

use std::path::{Path, PathBuf};
use tracing::info;
use voiceguard_common::ConfigError;

use super::template::default_config_toml;

const APP_DIR: &str = "voiceguard";
const CONFIG_FILE: &str = "config.toml";

/// Get the platform-specific default config file path.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Create the directory `path` will live in, if it has one.
pub(crate) fn ensure_parent_dir(path: &Path) -> Result<(), ConfigError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    std::fs::create_dir_all(parent).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to create config directory {}: {e}",
            parent.display()
        ))
    })
}

/// Write the commented default config to `path`.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    ensure_parent_dir(path)?;

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
