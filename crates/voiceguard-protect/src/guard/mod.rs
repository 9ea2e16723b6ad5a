//! The assembled guard: tracker, classifier and policy behind one handler.

use tracing::{debug, info, info_span};
use voiceguard_common::{new_correlation_id, CorrectiveAction, HostEvent};

use crate::classifier::EventClassifier;
use crate::host::{ActionDispatcher, LocalIdentity, PermissionOracle, PolicySource};
use crate::policy::ProtectionPolicy;
use crate::session::{SessionSnapshot, SessionTracker};


pub const NAME: &str = "AutoProtect";
pub const DESCRIPTION: &str =
    "Automatically protect users in voice channels from being kicked or muted.";

/// Protects the local user against forced voice state changes.
///
/// Feed every host event to [`AutoProtect::handle`] in delivery order.
/// Handling is synchronous and runs to completion, so the host's own
/// serialization of events is the only ordering this type relies on.
pub struct AutoProtect<P, D, I, S> {
    tracker: SessionTracker,
    classifier: EventClassifier,
    policy: ProtectionPolicy<P, D>,
    identity: I,
    settings: S,
}

impl<P, D, I, S> AutoProtect<P, D, I, S>
where
    P: PermissionOracle,
    D: ActionDispatcher,
    I: LocalIdentity,
    S: PolicySource,
{
    pub fn new(permissions: P, dispatcher: D, identity: I, settings: S) -> Self {
        Self {
            tracker: SessionTracker::new(),
            classifier: EventClassifier::new(),
            policy: ProtectionPolicy::new(permissions, dispatcher),
            identity,
            settings,
        }
    }

    /// Host start hook. Nothing to set up.
    pub fn start(&self) {
        info!(plugin = NAME, "started");
    }

    /// Host stop hook. Nothing to tear down.
    pub fn stop(&self) {
        info!(plugin = NAME, "stopped");
    }

    /// Process one host event and return the corrective actions issued.
    pub fn handle(&mut self, event: &HostEvent) -> Vec<CorrectiveAction> {
        let span = info_span!("event", id = %new_correlation_id(), kind = event.kind());
        let _enter = span.enter();

        // Toggles and identity are read per event so changes apply at once.
        let protect = self.settings.protection();
        let local_user = self.identity.current_user_id();

        let intents = self
            .classifier
            .classify(event, &mut self.tracker, &local_user);

        intents
            .iter()
            .filter_map(|intent| {
                debug!(intent = intent.name(), "classified");
                self.policy.apply(intent, &protect)
            })
            .collect()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.tracker.snapshot()
    }

    pub fn policy(&self) -> &ProtectionPolicy<P, D> {
        &self.policy
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }
}
