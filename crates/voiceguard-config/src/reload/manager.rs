//! Core reload manager implementation.

use crate::schema::GuardConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use std::path::{Path, PathBuf};
use tokio::sync::{broadcast, watch};
use tracing::{debug, error, info, warn};
use voiceguard_common::ConfigError;

/// Capacity of the change-notification channel between watcher and manager.
const CHANGE_BUFFER: usize = 16;

/// Publishes every good revision of the config file.
///
/// Subscribers hold a [`watch::Receiver`] whose value is always the last
/// config that both parsed and validated.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load `config_path` once and keep watching it in the background.
    ///
    /// A missing or unparsable file at startup falls back to defaults.
    /// Must be called from inside a tokio runtime.
    pub async fn start(config_path: PathBuf) -> (GuardConfig, watch::Receiver<GuardConfig>) {
        let initial = toml_loader::load_from_path(&config_path).unwrap_or_else(|e| {
            warn!(path = %config_path.display(), "{e}; starting from defaults");
            GuardConfig::default()
        });

        let (publish, subscribe) = watch::channel(initial.clone());
        let manager = ReloadManager { config_path };
        tokio::spawn(async move { manager.run(publish).await });

        (initial, subscribe)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    async fn run(self, publish: watch::Sender<GuardConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("live reload disabled: {e}");
                return;
            }
        };

        let (changed_tx, mut changed) = broadcast::channel::<()>(CHANGE_BUFFER);
        tokio::spawn(async move {
            if let Err(e) = watcher.watch(changed_tx).await {
                error!("config watcher stopped: {e}");
            }
        });

        loop {
            match changed.recv().await {
                Ok(()) => {
                    if !self.on_change(&publish) {
                        break;
                    }
                }
                // Missed notifications collapse into the next reload.
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    debug!(missed = n, "coalescing config change notifications");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
        debug!("reload manager stopped");
    }

    /// Reload and publish. Returns `false` once nobody is listening.
    pub(crate) fn on_change(&self, publish: &watch::Sender<GuardConfig>) -> bool {
        match self.reload_config() {
            Ok(config) => {
                info!(
                    mute = config.protect.mute,
                    deaf = config.protect.deaf,
                    disconnect = config.protect.disconnect,
                    move_ = config.protect.move_,
                    "config reloaded"
                );
                publish.send(config).is_ok()
            }
            Err(e) => {
                warn!("ignoring config change, keeping previous: {e}");
                true
            }
        }
    }

    /// Re-read the file. Unlike the initial load, an invalid config is
    /// rejected here so a half-finished edit never replaces a good one.
    pub(crate) fn reload_config(&self) -> Result<GuardConfig, ConfigError> {
        let config = toml_loader::read_from_path(&self.config_path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
impl ReloadManager {
    pub(crate) fn for_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }
}
