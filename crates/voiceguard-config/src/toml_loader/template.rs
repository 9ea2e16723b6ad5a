//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# voiceguard configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[protect]
# Undo a server mute placed on you (needs Mute Members in the channel).
# mute = true
# Undo a server deafen placed on you (needs Deafen Members in the channel).
# deaf = true
# Rejoin your last channel after being disconnected (needs Connect there).
# disconnect = true
# Go back to your last channel after being moved (needs Connect there).
# move = true

[session]
# Your user id on the voice service. Can also be passed with --user-id.
# user_id = ""

[permissions]
# Channels where you hold each capability. Used by the replay host only.
# connect = []
# mute_members = []
# deafen_members = []

[logging]
# level = "INFO"         # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
