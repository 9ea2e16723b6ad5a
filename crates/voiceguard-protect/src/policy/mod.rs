//! Protection policy engine.
//!
//! Decides, per classified intent, whether a corrective action is both
//! wanted (policy toggle) and allowed (permission check), and issues it.

mod engine;


pub use engine::ProtectionPolicy;
