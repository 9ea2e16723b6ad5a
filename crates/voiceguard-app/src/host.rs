//! Host collaborators for offline replay.
//!
//! There is no live voice connection here: permissions come from the
//! config's static grant table and corrective calls are logged instead of
//! sent.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use tracing::info;
use voiceguard_common::{ChannelId, DispatchError, GuildId, UserId};
use voiceguard_config::schema::PermissionsConfig;
use voiceguard_protect::{ActionDispatcher, PermissionOracle};

/// Per-channel grants read once from `[permissions]`.
#[derive(Debug, Default)]
pub struct StaticPermissions {
    connect: HashSet<ChannelId>,
    mute_members: HashSet<ChannelId>,
    deafen_members: HashSet<ChannelId>,
}

impl StaticPermissions {
    pub fn from_config(config: &PermissionsConfig) -> Self {
        fn ids(list: &[String]) -> HashSet<ChannelId> {
            list.iter().map(|id| ChannelId::new(id.as_str())).collect()
        }
        Self {
            connect: ids(&config.connect),
            mute_members: ids(&config.mute_members),
            deafen_members: ids(&config.deafen_members),
        }
    }
}

/// Grants are channel-scoped; a guild-wide (`None`) query is never granted.
impl PermissionOracle for StaticPermissions {
    fn can_connect(&self, channel_id: &ChannelId) -> bool {
        self.connect.contains(channel_id)
    }

    fn can_mute_members(&self, channel_id: Option<&ChannelId>) -> bool {
        channel_id.is_some_and(|c| self.mute_members.contains(c))
    }

    fn can_deafen_members(&self, channel_id: Option<&ChannelId>) -> bool {
        channel_id.is_some_and(|c| self.deafen_members.contains(c))
    }
}

/// Logs each corrective call and counts it. Never fails.
#[derive(Debug, Default)]
pub struct LoggingDispatcher {
    issued: AtomicUsize,
}

impl LoggingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issued(&self) -> usize {
        self.issued.load(Ordering::Relaxed)
    }

    fn bump(&self) -> Result<(), DispatchError> {
        self.issued.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

impl ActionDispatcher for LoggingDispatcher {
    fn select_voice_channel(&self, channel_id: &ChannelId) -> Result<(), DispatchError> {
        info!(channel_id = %channel_id, "-> select_voice_channel");
        self.bump()
    }

    fn clear_server_mute(&self, guild_id: &GuildId, user_id: &UserId) -> Result<(), DispatchError> {
        info!(guild_id = %guild_id, user_id = %user_id, "-> clear_server_mute");
        self.bump()
    }

    fn clear_server_deafen(
        &self,
        guild_id: &GuildId,
        user_id: &UserId,
    ) -> Result<(), DispatchError> {
        info!(guild_id = %guild_id, user_id = %user_id, "-> clear_server_deafen");
        self.bump()
    }
}
