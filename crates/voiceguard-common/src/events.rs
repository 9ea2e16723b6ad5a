use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

use crate::errors::EventError;
use crate::id::{ChannelId, GuildId, UserId};

/// One participant's voice status as pushed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceState {
    #[serde(alias = "userId")]
    pub user_id: UserId,
    #[serde(alias = "guildId")]
    pub guild_id: GuildId,
    #[serde(default, alias = "channelId")]
    pub channel_id: Option<ChannelId>,
    #[serde(default, alias = "oldChannelId")]
    pub old_channel_id: Option<ChannelId>,
    #[serde(default)]
    pub mute: bool,
    #[serde(default)]
    pub deaf: bool,
}

impl VoiceState {
    /// The channel the participant is in now. An empty id means none.
    pub fn channel(&self) -> Option<&ChannelId> {
        non_empty(self.channel_id.as_ref())
    }

    /// The channel the participant was in before. An empty id means none.
    pub fn old_channel(&self) -> Option<&ChannelId> {
        non_empty(self.old_channel_id.as_ref())
    }
}

fn non_empty(id: Option<&ChannelId>) -> Option<&ChannelId> {
    id.filter(|c| !c.as_str().is_empty())
}

/// All voice states carried by a single server push.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceStateUpdateBatch {
    #[serde(default, alias = "voiceStates")]
    pub voice_states: Vec<VoiceState>,
}

impl VoiceStateUpdateBatch {
    /// The entry for `user_id`, if this batch touches that participant.
    pub fn entry_for(&self, user_id: &UserId) -> Option<&VoiceState> {
        self.voice_states.iter().find(|s| &s.user_id == user_id)
    }
}

/// Everything the host bus can deliver to the guard.
///
/// The set is closed: payloads with any other `kind` are rejected by
/// [`HostEvent::from_json`] instead of being mapped to a catch-all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostEvent {
    /// The user pressed the call/leave button.
    CallButtonClicked,
    /// The client left a voice channel, for whatever reason.
    LeaveVoiceChannel,
    /// The client joined a voice channel.
    JoinVoiceChannel {
        #[serde(default)]
        was_moved: bool,
    },
    VoiceStateUpdates(VoiceStateUpdateBatch),
}

impl HostEvent {
    pub const KINDS: [&'static str; 4] = [
        "call_button_clicked",
        "leave_voice_channel",
        "join_voice_channel",
        "voice_state_updates",
    ];

    pub fn kind(&self) -> &'static str {
        match self {
            HostEvent::CallButtonClicked => "call_button_clicked",
            HostEvent::LeaveVoiceChannel => "leave_voice_channel",
            HostEvent::JoinVoiceChannel { .. } => "join_voice_channel",
            HostEvent::VoiceStateUpdates(_) => "voice_state_updates",
        }
    }

    /// Decode one JSON payload, telling unknown kinds apart from broken ones.
    pub fn from_json(raw: &str) -> Result<Self, EventError> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| EventError::Malformed(e.to_string()))?;

        let kind = value
            .get("kind")
            .and_then(|k| k.as_str())
            .ok_or_else(|| EventError::Malformed("missing string field `kind`".into()))?;

        if !Self::KINDS.contains(&kind) {
            return Err(EventError::UnknownKind(kind.to_string()));
        }

        serde_json::from_value(value).map_err(|e| EventError::Malformed(e.to_string()))
    }
}

pub struct EventBus {
    sender: broadcast::Sender<HostEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<HostEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: HostEvent) -> usize {
        let kind = event.kind();
        match self.sender.send(event) {
            Ok(n) => n,
            Err(_) => {
                debug!(kind, "host event dropped, no subscribers");
                0
            }
        }
    }
}
