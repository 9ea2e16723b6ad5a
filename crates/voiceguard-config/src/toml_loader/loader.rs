//! Core TOML config loading: read from path or platform default.

use crate::schema::GuardConfig;
use crate::validation;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{info, warn};
use voiceguard_common::ConfigError;

use super::paths::{create_default_config, default_config_path};

/// Parse config text. Missing sections and fields take their defaults.
pub(crate) fn parse_str(content: &str) -> Result<GuardConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Read and parse `path` without validating it.
pub(crate) fn read_from_path(path: &Path) -> Result<GuardConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config = parse_str(&content)?;
    info!(
        path = %path.display(),
        mute = config.protect.mute,
        deaf = config.protect.deaf,
        disconnect = config.protect.disconnect,
        move_ = config.protect.move_,
        "loaded config"
    );
    Ok(config)
}

/// Read `path`, first creating it as a commented default file if it is
/// missing.
pub(crate) fn read_or_create(path: &Path) -> Result<GuardConfig, ConfigError> {
    match read_from_path(path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(path)?;
            Ok(GuardConfig::default())
        }
        other => other,
    }
}

/// Keep a config that parsed but failed validation, logging why.
fn tolerate_invalid(path: &Path, config: GuardConfig) -> GuardConfig {
    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "{e}; using the file anyway");
    }
    config
}

/// Load config from a specific TOML file path.
///
/// A config that parses but fails validation is still returned; the
/// problems are logged as a warning so a typo in one permission list does
/// not switch every protection back to its default. Use
/// [`crate::load_config_from`] to reject it instead.
pub fn load_from_path(path: &Path) -> Result<GuardConfig, ConfigError> {
    read_from_path(path).map(|config| tolerate_invalid(path, config))
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/voiceguard/config.toml`
/// On Linux: `~/.config/voiceguard/config.toml`
///
/// If the file does not exist, a commented default file is written there
/// and the defaults are returned. Validation problems are tolerated as in
/// [`load_from_path`].
pub fn load_default() -> Result<GuardConfig, ConfigError> {
    let path = default_config_path()?;
    read_or_create(&path).map(|config| tolerate_invalid(&path, config))
}
