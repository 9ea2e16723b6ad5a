//! Protection policy toggles.

use serde::{Deserialize, Serialize};

/// Which involuntary changes the guard reverses.
///
/// Every toggle defaults to on. The guard re-reads these on each event,
/// so flipping one takes effect from the next event onward.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProtectionConfig {
    /// Clear a server mute applied to the local user.
    pub mute: bool,
    /// Clear a server deafen applied to the local user.
    pub deaf: bool,
    /// Rejoin the previous channel after a forced disconnect.
    pub disconnect: bool,
    /// Return to the previous channel after a forced move.
    #[serde(rename = "move")]
    pub move_: bool,
}

impl Default for ProtectionConfig {
    fn default() -> Self {
        Self {
            mute: true,
            deaf: true,
            disconnect: true,
            move_: true,
        }
    }
}

impl ProtectionConfig {
    /// All protections switched off.
    pub fn disabled() -> Self {
        Self {
            mute: false,
            deaf: false,
            disconnect: false,
            move_: false,
        }
    }
}
