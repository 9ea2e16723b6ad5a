//! In-memory collaborators for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use voiceguard_common::{ChannelId, CorrectiveAction, DispatchError, GuildId, UserId};

use crate::host::{ActionDispatcher, PermissionOracle};

/// Grants per capability, changeable between calls.
#[derive(Default)]
pub(crate) struct FakePermissions {
    connect: RefCell<HashSet<ChannelId>>,
    mute: RefCell<HashSet<ChannelId>>,
    deafen: RefCell<HashSet<ChannelId>>,
    pub(crate) checks: Cell<usize>,
}

impl FakePermissions {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn connect(self, channel: &str) -> Self {
        self.connect.borrow_mut().insert(ChannelId::from(channel));
        self
    }

    pub(crate) fn mute(self, channel: &str) -> Self {
        self.mute.borrow_mut().insert(ChannelId::from(channel));
        self
    }

    pub(crate) fn deafen(self, channel: &str) -> Self {
        self.deafen.borrow_mut().insert(ChannelId::from(channel));
        self
    }

    pub(crate) fn revoke_connect(&self, channel: &str) {
        self.connect.borrow_mut().remove(&ChannelId::from(channel));
    }

    fn has(&self, set: &RefCell<HashSet<ChannelId>>, channel: Option<&ChannelId>) -> bool {
        self.checks.set(self.checks.get() + 1);
        channel.is_some_and(|c| set.borrow().contains(c))
    }
}

impl PermissionOracle for FakePermissions {
    fn can_connect(&self, channel_id: &ChannelId) -> bool {
        self.has(&self.connect, Some(channel_id))
    }

    fn can_mute_members(&self, channel_id: Option<&ChannelId>) -> bool {
        self.has(&self.mute, channel_id)
    }

    fn can_deafen_members(&self, channel_id: Option<&ChannelId>) -> bool {
        self.has(&self.deafen, channel_id)
    }
}

/// Records every call; optionally fails all of them.
#[derive(Default)]
pub(crate) struct RecordingDispatcher {
    calls: RefCell<Vec<CorrectiveAction>>,
    fail: bool,
}

impl RecordingDispatcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<CorrectiveAction> {
        self.calls.borrow().clone()
    }

    pub(crate) fn rejoins(&self) -> Vec<ChannelId> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|a| match a {
                CorrectiveAction::SelectVoiceChannel { channel_id } => Some(channel_id.clone()),
                _ => None,
            })
            .collect()
    }

    pub(crate) fn count(&self, wire_name: &str) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|a| a.wire_name() == wire_name)
            .count()
    }

    fn record(&self, action: CorrectiveAction) -> Result<(), DispatchError> {
        let name = action.wire_name();
        self.calls.borrow_mut().push(action);
        if self.fail {
            Err(DispatchError::new(name, "rejected by test dispatcher"))
        } else {
            Ok(())
        }
    }
}

impl ActionDispatcher for RecordingDispatcher {
    fn select_voice_channel(&self, channel_id: &ChannelId) -> Result<(), DispatchError> {
        self.record(CorrectiveAction::SelectVoiceChannel {
            channel_id: channel_id.clone(),
        })
    }

    fn clear_server_mute(&self, guild_id: &GuildId, user_id: &UserId) -> Result<(), DispatchError> {
        self.record(CorrectiveAction::ClearServerMute {
            guild_id: guild_id.clone(),
            user_id: user_id.clone(),
        })
    }

    fn clear_server_deafen(
        &self,
        guild_id: &GuildId,
        user_id: &UserId,
    ) -> Result<(), DispatchError> {
        self.record(CorrectiveAction::ClearServerDeafen {
            guild_id: guild_id.clone(),
            user_id: user_id.clone(),
        })
    }
}
