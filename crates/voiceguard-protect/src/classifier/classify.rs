//! Classifier implementation.

use tracing::{debug, trace};
use voiceguard_common::{HostEvent, UserId, VoiceStateUpdateBatch};

use super::types::Intent;
use crate::session::SessionTracker;

/// Interprets inbound events against the tracker it is handed.
///
/// The classifier holds no state of its own; the caller owns the
/// [`SessionTracker`] and lends it for each event.
#[derive(Debug, Default, Clone, Copy)]
pub struct EventClassifier;

impl EventClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify one event for `local_user`, updating `tracker`.
    pub fn classify(
        &self,
        event: &HostEvent,
        tracker: &mut SessionTracker,
        local_user: &UserId,
    ) -> Vec<Intent> {
        match event {
            HostEvent::CallButtonClicked => {
                tracker.record_leave_intent();
                trace!("leave intent recorded");
                Vec::new()
            }
            HostEvent::LeaveVoiceChannel => vec![self.on_leave(tracker)],
            HostEvent::JoinVoiceChannel { was_moved } => vec![self.on_join(*was_moved, tracker)],
            HostEvent::VoiceStateUpdates(batch) => self.on_batch(batch, tracker, local_user),
        }
    }

    /// The intent flag is consumed on every path so it cannot leak into a
    /// later, unrelated leave.
    fn on_leave(&self, tracker: &mut SessionTracker) -> Intent {
        if tracker.consume_leave_intent() {
            return Intent::VoluntaryLeave;
        }
        match tracker.current_channel_id() {
            None => Intent::InvoluntaryDisconnect {
                from: tracker.previous_channel_id().cloned(),
            },
            Some(now_in) => {
                debug!(channel_id = %now_in, "leave signal while still in a channel, not a disconnect");
                Intent::LeftForChannel {
                    now_in: now_in.clone(),
                }
            }
        }
    }

    fn on_join(&self, was_moved: bool, tracker: &SessionTracker) -> Intent {
        if was_moved {
            Intent::InvoluntaryMove {
                from: tracker.previous_channel_id().cloned(),
            }
        } else {
            Intent::VoluntaryMove
        }
    }

    fn on_batch(
        &self,
        batch: &VoiceStateUpdateBatch,
        tracker: &mut SessionTracker,
        local_user: &UserId,
    ) -> Vec<Intent> {
        let Some(entry) = batch.entry_for(local_user) else {
            trace!(entries = batch.voice_states.len(), "batch has no local entry");
            return Vec::new();
        };
        tracker.observe(entry);
        Intent::flags_of(entry)
    }
}
