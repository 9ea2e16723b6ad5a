//! Write GuardConfig to TOML on disk.
//!
//! Writes go to a `.tmp` sibling first and are renamed into place, so a
//! crash mid-write never leaves a truncated config for the watcher to load.

use std::path::Path;

use tracing::{debug, warn};
use voiceguard_common::ConfigError;

use crate::schema::GuardConfig;
use crate::toml_loader::paths::ensure_parent_dir;

/// Save to `path`, creating missing directories on the way.
pub fn save_config_to_path(config: &GuardConfig, path: &Path) -> Result<(), ConfigError> {
    let rendered = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("cannot render config as TOML: {e}")))?;

    ensure_parent_dir(path)?;
    let staged = path.with_extension("toml.tmp");
    write_file(&staged, &rendered)?;

    if let Err(e) = std::fs::rename(&staged, path) {
        // Rename over an open file fails on some platforms.
        warn!(path = %path.display(), "rename failed ({e}), writing in place");
        write_file(path, &rendered)?;
        if let Err(e) = std::fs::remove_file(&staged) {
            debug!(path = %staged.display(), "stale staging file left behind: {e}");
        }
    }

    debug!(path = %path.display(), "config saved");
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> Result<(), ConfigError> {
    std::fs::write(path, contents)
        .map_err(|e| ConfigError::ParseError(format!("cannot write {}: {e}", path.display())))
}

// =============================================================================
// TESTS
// =============================================================================
