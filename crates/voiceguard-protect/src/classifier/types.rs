//! Classified intents.

use voiceguard_common::{ChannelId, GuildId, UserId, VoiceState};

/// Who a server mute/deafen was applied to, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagTarget {
    pub guild_id: GuildId,
    pub user_id: UserId,
    /// Channel the permission check is scoped to.
    pub channel_id: Option<ChannelId>,
}

impl From<&VoiceState> for FlagTarget {
    fn from(state: &VoiceState) -> Self {
        Self {
            guild_id: state.guild_id.clone(),
            user_id: state.user_id.clone(),
            channel_id: state.channel().cloned(),
        }
    }
}

/// What an inbound event means for the local user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// The user left after pressing call/leave.
    VoluntaryLeave,
    /// The user was dropped from voice without asking to leave.
    InvoluntaryDisconnect { from: Option<ChannelId> },
    /// A leave signal while the state stream already shows a new channel:
    /// the leave half of a move. The matching join settles who moved them.
    LeftForChannel { now_in: ChannelId },
    /// The user switched channels themselves.
    VoluntaryMove,
    /// Someone else moved the user out of `from`.
    InvoluntaryMove { from: Option<ChannelId> },
    MuteApplied(FlagTarget),
    DeafenApplied(FlagTarget),
}

impl Intent {
    /// Mute/deafen facts carried by one voice state, mute first.
    pub fn flags_of(state: &VoiceState) -> Vec<Intent> {
        let mut intents = Vec::with_capacity(2);
        if state.mute {
            intents.push(Intent::MuteApplied(FlagTarget::from(state)));
        }
        if state.deaf {
            intents.push(Intent::DeafenApplied(FlagTarget::from(state)));
        }
        intents
    }

    pub fn name(&self) -> &'static str {
        match self {
            Intent::VoluntaryLeave => "voluntary-leave",
            Intent::InvoluntaryDisconnect { .. } => "involuntary-disconnect",
            Intent::LeftForChannel { .. } => "left-for-channel",
            Intent::VoluntaryMove => "voluntary-move",
            Intent::InvoluntaryMove { .. } => "involuntary-move",
            Intent::MuteApplied(_) => "mute-applied",
            Intent::DeafenApplied(_) => "deafen-applied",
        }
    }
}
