//! Validation for the session and permissions sections.

use crate::schema::GuardConfig;

use super::helpers::validate_id_list;

/// An unset user id is fine; one made only of whitespace is a typo.
pub(crate) fn validate_session(errors: &mut Vec<String>, config: &GuardConfig) {
    let user_id = &config.session.user_id;
    if !user_id.is_empty() && user_id.trim().is_empty() {
        errors.push("session.user_id is blank".into());
    }
}

pub(crate) fn validate_permissions(errors: &mut Vec<String>, config: &GuardConfig) {
    let perms = &config.permissions;
    validate_id_list(errors, "permissions.connect", &perms.connect);
    validate_id_list(errors, "permissions.mute_members", &perms.mute_members);
    validate_id_list(errors, "permissions.deafen_members", &perms.deafen_members);
}
