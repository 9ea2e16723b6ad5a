use super::CorrectiveAction;

impl CorrectiveAction {
    /// Human-readable label for log lines and summaries.
    pub fn label(&self) -> &'static str {
        match self {
            CorrectiveAction::SelectVoiceChannel { .. } => "Rejoin Voice Channel",
            CorrectiveAction::ClearServerMute { .. } => "Clear Server Mute",
            CorrectiveAction::ClearServerDeafen { .. } => "Clear Server Deafen",
        }
    }

    /// Name of the dispatcher call this action corresponds to.
    pub fn wire_name(&self) -> &'static str {
        match self {
            CorrectiveAction::SelectVoiceChannel { .. } => "select_voice_channel",
            CorrectiveAction::ClearServerMute { .. } => "clear_server_mute",
            CorrectiveAction::ClearServerDeafen { .. } => "clear_server_deafen",
        }
    }
}
