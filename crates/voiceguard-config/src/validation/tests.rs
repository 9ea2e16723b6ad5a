//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = GuardConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn populated_config_validates() {
    let mut config = GuardConfig::default();
    config.session.user_id = "U1".into();
    config.permissions.connect = vec!["C1".into(), "C2".into()];
    config.permissions.mute_members = vec!["C2".into()];
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_blank_user_id() {
    let mut config = GuardConfig::default();
    config.session.user_id = "   ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.user_id"));
}

#[test]
fn catches_empty_channel_id() {
    let mut config = GuardConfig::default();
    config.permissions.connect = vec!["C1".into(), "".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("permissions.connect[1] is empty"));
}

#[test]
fn catches_duplicate_channel_id() {
    let mut config = GuardConfig::default();
    config.permissions.deafen_members = vec!["C4".into(), "C4".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("permissions.deafen_members[1]"));
    assert!(err.contains("more than once"));
}

#[test]
fn same_channel_in_different_lists_is_fine() {
    let mut config = GuardConfig::default();
    config.permissions.connect = vec!["C1".into()];
    config.permissions.mute_members = vec!["C1".into()];
    config.permissions.deafen_members = vec!["C1".into()];
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = GuardConfig::default();
    config.session.user_id = " ".into();
    config.permissions.mute_members = vec!["".into()];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.user_id"));
    assert!(err.contains("permissions.mute_members[0]"));
}
