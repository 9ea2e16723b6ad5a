//! Session tracker: where the local user was, where they are, and whether
//! they meant to leave.

use voiceguard_common::{ChannelId, VoiceState};

/// Copy of the tracker state.
///
/// Both channel ids are `None` until the first voice state for the local
/// user has been observed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub previous_channel_id: Option<ChannelId>,
    pub current_channel_id: Option<ChannelId>,
    /// Only meaningful between a call-button click and the next leave.
    pub leave_was_voluntary: bool,
}

/// Owns the [`SessionSnapshot`] for the lifetime of the guard.
#[derive(Debug, Default)]
pub struct SessionTracker {
    state: SessionSnapshot,
}

impl SessionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The user pressed call/leave themselves.
    pub fn record_leave_intent(&mut self) {
        self.state.leave_was_voluntary = true;
    }

    /// Read and clear the leave intent in one step.
    pub fn consume_leave_intent(&mut self) -> bool {
        std::mem::take(&mut self.state.leave_was_voluntary)
    }

    /// Take the channel ids from the local user's latest voice state.
    /// Empty ids are stored as `None`.
    pub fn observe(&mut self, local: &VoiceState) {
        self.state.previous_channel_id = local.old_channel().cloned();
        self.state.current_channel_id = local.channel().cloned();
    }

    pub fn previous_channel_id(&self) -> Option<&ChannelId> {
        self.state.previous_channel_id.as_ref()
    }

    pub fn current_channel_id(&self) -> Option<&ChannelId> {
        self.state.current_channel_id.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.state.clone()
    }
}
