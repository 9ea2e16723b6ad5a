//! Event classification.
//!
//! Turns the two inbound streams (lifecycle signals and voice state
//! batches) into [`Intent`]s, keeping the session tracker up to date on
//! the way. Classification states facts only; whether a fact warrants a
//! corrective action is up to the policy engine.

mod classify;
mod types;


pub use classify::EventClassifier;
pub use types::{FlagTarget, Intent};
