pub mod actions;
pub mod errors;
pub mod events;
pub mod id;

pub use actions::CorrectiveAction;
pub use errors::{ConfigError, DispatchError, EventError, GuardError};
pub use events::{EventBus, HostEvent, VoiceState, VoiceStateUpdateBatch};
pub use id::{new_correlation_id, ChannelId, GuildId, UserId};

pub type Result<T> = std::result::Result<T, GuardError>;
