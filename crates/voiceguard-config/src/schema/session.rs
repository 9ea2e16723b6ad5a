//! Local identity and static permission grants used by the replay host.

use serde::{Deserialize, Serialize};

/// Identity of the local participant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Id the voice service uses for the local user. Empty means unset.
    pub user_id: String,
}

/// Channels in which the local user holds each capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PermissionsConfig {
    pub connect: Vec<String>,
    pub mute_members: Vec<String>,
    pub deafen_members: Vec<String>,
}
