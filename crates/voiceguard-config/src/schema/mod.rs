//! Configuration schema types for voiceguard.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults that protect against everything.

mod protect;
mod session;
mod system;

pub use protect::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for voiceguard.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GuardConfig {
    pub protect: ProtectionConfig,
    pub session: SessionConfig,
    pub permissions: PermissionsConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_protects_everything() {
        let config = GuardConfig::default();
        assert!(config.protect.mute);
        assert!(config.protect.deaf);
        assert!(config.protect.disconnect);
        assert!(config.protect.move_);
    }

    #[test]
    fn default_config_has_no_identity_or_grants() {
        let config = GuardConfig::default();
        assert!(config.session.user_id.is_empty());
        assert!(config.permissions.connect.is_empty());
        assert!(config.permissions.mute_members.is_empty());
        assert!(config.permissions.deafen_members.is_empty());
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn partial_protect_section_keeps_other_defaults() {
        let config: GuardConfig = toml::from_str(
            r#"
[protect]
move = false
"#,
        )
        .unwrap();
        assert!(!config.protect.move_);
        assert!(config.protect.mute);
        assert!(config.protect.deaf);
        assert!(config.protect.disconnect);
    }

    #[test]
    fn move_toggle_serializes_as_move() {
        let toml_str = toml::to_string(&ProtectionConfig::default()).unwrap();
        assert!(toml_str.contains("move = true"));
        assert!(!toml_str.contains("move_"));
    }

    #[test]
    fn disabled_turns_every_toggle_off() {
        let p = ProtectionConfig::disabled();
        assert!(!p.mute && !p.deaf && !p.disconnect && !p.move_);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: GuardConfig = toml::from_str(
            r#"
[logging]
level = "DEBUG"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.directive(), "voiceguard=debug");
    }

    #[test]
    fn permissions_section_parses() {
        let config: GuardConfig = toml::from_str(
            r#"
[session]
user_id = "U1"

[permissions]
connect = ["C1", "C3"]
mute_members = ["C2"]
"#,
        )
        .unwrap();
        assert_eq!(config.session.user_id, "U1");
        assert_eq!(config.permissions.connect, vec!["C1", "C3"]);
        assert_eq!(config.permissions.mute_members, vec!["C2"]);
        assert!(config.permissions.deafen_members.is_empty());
    }
}
