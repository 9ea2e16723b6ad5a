//! Seams to the host application.
//!
//! The guard never talks to the voice service directly. It asks these
//! collaborators who the local user is, what that user may do, and what
//! the protection toggles currently say, and it hands corrective calls to
//! an [`ActionDispatcher`]. All calls are synchronous and made from inside
//! the handler of the event being processed.

use tokio::sync::watch;
use voiceguard_common::{ChannelId, DispatchError, GuildId, UserId};
use voiceguard_config::{GuardConfig, ProtectionConfig};

/// Channel-scoped capability checks for the local user.
///
/// Answers are never cached by the guard; each decision asks again.
pub trait PermissionOracle {
    fn can_connect(&self, channel_id: &ChannelId) -> bool;

    /// `None` asks about the guild-wide context.
    fn can_mute_members(&self, channel_id: Option<&ChannelId>) -> bool;

    /// `None` asks about the guild-wide context.
    fn can_deafen_members(&self, channel_id: Option<&ChannelId>) -> bool;
}

pub trait LocalIdentity {
    fn current_user_id(&self) -> UserId;
}

/// A fixed identity.
impl LocalIdentity for UserId {
    fn current_user_id(&self) -> UserId {
        self.clone()
    }
}

/// Issues corrective calls over the wire.
///
/// Calls are fire-and-forget from the guard's point of view: an `Err` is
/// logged and dropped, never retried.
pub trait ActionDispatcher {
    fn select_voice_channel(&self, channel_id: &ChannelId) -> Result<(), DispatchError>;

    fn clear_server_mute(&self, guild_id: &GuildId, user_id: &UserId) -> Result<(), DispatchError>;

    fn clear_server_deafen(&self, guild_id: &GuildId, user_id: &UserId)
        -> Result<(), DispatchError>;
}

/// Where the current protection toggles come from.
pub trait PolicySource {
    fn protection(&self) -> ProtectionConfig;
}

/// A fixed policy.
impl PolicySource for ProtectionConfig {
    fn protection(&self) -> ProtectionConfig {
        *self
    }
}

/// The latest config published by [`voiceguard_config::ReloadManager`].
impl PolicySource for watch::Receiver<GuardConfig> {
    fn protection(&self) -> ProtectionConfig {
        self.borrow().protect
    }
}
