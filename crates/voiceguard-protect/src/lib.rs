//! Auto-protect guard for a voice session.
//!
//! Watches the local user's voice session and reverses forced changes:
//! a server mute or deafen is cleared, and a forced disconnect or move
//! is undone by rejoining the previous channel. Every corrective action
//! is gated on its protection toggle and on a fresh permission check.
//!
//! The crate does no I/O of its own. The host supplies identity,
//! permissions, settings and an action dispatcher through the traits in
//! [`host`], and feeds events to [`AutoProtect::handle`] one at a time.

pub mod classifier;
pub mod guard;
pub mod host;
pub mod policy;
pub mod session;

#[cfg(test)]
mod testing;

pub use classifier::{EventClassifier, FlagTarget, Intent};
pub use guard::{AutoProtect, DESCRIPTION, NAME};
pub use host::{ActionDispatcher, LocalIdentity, PermissionOracle, PolicySource};
pub use policy::ProtectionPolicy;
pub use session::{SessionSnapshot, SessionTracker};
