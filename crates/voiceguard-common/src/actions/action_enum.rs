use serde::{Deserialize, Serialize};

use crate::id::{ChannelId, GuildId, UserId};

/// A call the guard issues to reverse an unwanted voice state change.
///
/// Each variant maps one-to-one onto a method of the host's action
/// dispatcher; the guard hands these back to its caller as a record of
/// what it did for one event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CorrectiveAction {
    /// Re-enter a voice channel after a forced disconnect or move.
    SelectVoiceChannel { channel_id: ChannelId },
    ClearServerMute { guild_id: GuildId, user_id: UserId },
    ClearServerDeafen { guild_id: GuildId, user_id: UserId },
}
