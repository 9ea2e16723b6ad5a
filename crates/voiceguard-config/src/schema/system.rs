//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the voiceguard crates at this level.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Debug => "voiceguard=debug",
            LogLevel::Info => "voiceguard=info",
            LogLevel::Warning => "voiceguard=warn",
            LogLevel::Error => "voiceguard=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
