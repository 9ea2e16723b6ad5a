//! Corrective decisions and their dispatch.

use tracing::{debug, info, warn};
use voiceguard_common::{ChannelId, CorrectiveAction, DispatchError, VoiceState};
use voiceguard_config::ProtectionConfig;

use crate::classifier::{FlagTarget, Intent};
use crate::host::{ActionDispatcher, PermissionOracle};

/// Gates corrective actions on policy and permission, then dispatches.
pub struct ProtectionPolicy<P, D> {
    permissions: P,
    dispatcher: D,
}

impl<P: PermissionOracle, D: ActionDispatcher> ProtectionPolicy<P, D> {
    pub fn new(permissions: P, dispatcher: D) -> Self {
        Self {
            permissions,
            dispatcher,
        }
    }

    pub fn permissions(&self) -> &P {
        &self.permissions
    }

    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Act on one intent. Returns the action issued, if any.
    pub fn apply(&self, intent: &Intent, protect: &ProtectionConfig) -> Option<CorrectiveAction> {
        match intent {
            Intent::VoluntaryLeave | Intent::VoluntaryMove | Intent::LeftForChannel { .. } => None,
            Intent::InvoluntaryDisconnect { from } => {
                if !protect.disconnect {
                    debug!("disconnect protection off");
                    return None;
                }
                self.attempt(from.as_ref())
            }
            Intent::InvoluntaryMove { from } => {
                if !protect.move_ {
                    debug!("move protection off");
                    return None;
                }
                self.attempt(from.as_ref())
            }
            Intent::MuteApplied(target) => {
                if !protect.mute {
                    debug!("mute protection off");
                    return None;
                }
                self.clear_mute(target)
            }
            Intent::DeafenApplied(target) => {
                if !protect.deaf {
                    debug!("deafen protection off");
                    return None;
                }
                self.clear_deafen(target)
            }
        }
    }

    /// Mute/deafen guard for one voice state. The two checks are
    /// independent; either, both or neither may fire.
    pub fn evaluate(&self, state: &VoiceState, protect: &ProtectionConfig) -> Vec<CorrectiveAction> {
        Intent::flags_of(state)
            .iter()
            .filter_map(|intent| self.apply(intent, protect))
            .collect()
    }

    /// Rejoin `channel_id` if there is one and the user may connect to it.
    pub fn attempt(&self, channel_id: Option<&ChannelId>) -> Option<CorrectiveAction> {
        let Some(channel_id) = channel_id else {
            debug!("no previous channel to rejoin");
            return None;
        };
        if !self.permissions.can_connect(channel_id) {
            debug!(channel_id = %channel_id, "no connect permission, not rejoining");
            return None;
        }

        info!(channel_id = %channel_id, "rejoining voice channel");
        let action = CorrectiveAction::SelectVoiceChannel {
            channel_id: channel_id.clone(),
        };
        report(&action, self.dispatcher.select_voice_channel(channel_id));
        Some(action)
    }

    fn clear_mute(&self, target: &FlagTarget) -> Option<CorrectiveAction> {
        if !self.permissions.can_mute_members(target.channel_id.as_ref()) {
            debug!(user_id = %target.user_id, "no mute permission, leaving server mute");
            return None;
        }

        info!(guild_id = %target.guild_id, user_id = %target.user_id, "clearing server mute");
        let action = CorrectiveAction::ClearServerMute {
            guild_id: target.guild_id.clone(),
            user_id: target.user_id.clone(),
        };
        report(
            &action,
            self.dispatcher
                .clear_server_mute(&target.guild_id, &target.user_id),
        );
        Some(action)
    }

    fn clear_deafen(&self, target: &FlagTarget) -> Option<CorrectiveAction> {
        if !self.permissions.can_deafen_members(target.channel_id.as_ref()) {
            debug!(user_id = %target.user_id, "no deafen permission, leaving server deafen");
            return None;
        }

        info!(guild_id = %target.guild_id, user_id = %target.user_id, "clearing server deafen");
        let action = CorrectiveAction::ClearServerDeafen {
            guild_id: target.guild_id.clone(),
            user_id: target.user_id.clone(),
        };
        report(
            &action,
            self.dispatcher
                .clear_server_deafen(&target.guild_id, &target.user_id),
        );
        Some(action)
    }
}

/// Dispatch is fire-and-forget: failures are logged, never retried.
fn report(action: &CorrectiveAction, result: Result<(), DispatchError>) {
    if let Err(e) = result {
        warn!(action = action.wire_name(), "{e}");
    }
}
