use std::path::PathBuf;

use clap::Parser;

/// voiceguard: replay voice session events through the auto-protect guard.
#[derive(Parser, Debug)]
#[command(name = "voiceguard", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON-lines event file. Reads stdin when omitted.
    #[arg(short = 'e', long)]
    pub events: Option<PathBuf>,

    /// Local user id, overriding `[session] user_id`.
    #[arg(short = 'u', long)]
    pub user_id: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Re-read the config file when it changes and apply new toggles
    /// from the next event on.
    #[arg(short = 'w', long)]
    pub watch: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
