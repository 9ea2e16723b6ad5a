mod cli;
mod host;
mod replay;

use std::path::PathBuf;
use std::process::ExitCode;

use tokio::io::{AsyncBufRead, BufReader};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::Formatter;
use tracing_subscriber::{reload, EnvFilter};
use voiceguard_common::{GuardError, UserId};
use voiceguard_config::{GuardConfig, ReloadManager};
use voiceguard_protect::{AutoProtect, PolicySource, DESCRIPTION, NAME};

use host::{LoggingDispatcher, StaticPermissions};
use replay::{ReplayGuard, ReplaySummary};

fn load_config(args: &cli::Args) -> Result<(GuardConfig, PathBuf), GuardError> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => voiceguard_config::toml_loader::default_config_path()?,
    };
    let config = match &args.config {
        Some(path) => voiceguard_config::load_config_from(path)?,
        None => voiceguard_config::load_config()?,
    };
    Ok((config, path))
}

const DEFAULT_DIRECTIVE: &str = "voiceguard=info";

type LogHandle = reload::Handle<EnvFilter, Formatter>;

/// `--log-level` wins, then the config's `[logging] level`.
fn log_directive<'a>(args: &'a cli::Args, config: Option<&GuardConfig>) -> &'a str {
    match (&args.log_level, config) {
        (Some(level), _) => level.as_str(),
        (None, Some(config)) => config.logging.level.directive(),
        (None, None) => DEFAULT_DIRECTIVE,
    }
}

/// `RUST_LOG` plus `directive`, falling back to the default directive
/// when `directive` does not parse.
fn log_filter(directive: &str) -> EnvFilter {
    let parsed: Result<Directive, _> = directive.parse().or_else(|_| DEFAULT_DIRECTIVE.parse());
    let filter = EnvFilter::from_default_env();
    match parsed {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the subscriber before anything logs. Config loading logs too,
/// so the filter starts from the command line and is narrowed to the
/// config's level once that is known.
fn init_logging(args: &cli::Args) -> LogHandle {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(log_directive(args, None)))
        .with_filter_reloading();
    let handle = builder.reload_handle();
    builder.init();
    handle
}

fn apply_config_log_level(handle: &LogHandle, args: &cli::Args, config: &GuardConfig) {
    if args.log_level.is_some() {
        return;
    }
    if let Err(e) = handle.reload(log_filter(log_directive(args, Some(config)))) {
        tracing::warn!("could not apply [logging] level: {e}");
    }
}

fn local_user(args: &cli::Args, config: &GuardConfig) -> Result<UserId, GuardError> {
    let id = args
        .user_id
        .as_deref()
        .unwrap_or(config.session.user_id.as_str())
        .trim();
    if id.is_empty() {
        return Err(GuardError::Other(
            "no local user id: set [session] user_id or pass --user-id".into(),
        ));
    }
    Ok(UserId::new(id))
}

async fn open_events(args: &cli::Args) -> Result<Box<dyn AsyncBufRead + Unpin>, GuardError> {
    Ok(match &args.events {
        Some(path) => {
            tracing::info!("replaying events from {}", path.display());
            Box::new(BufReader::new(tokio::fs::File::open(path).await?))
        }
        None => {
            tracing::info!("replaying events from stdin");
            Box::new(BufReader::new(tokio::io::stdin()))
        }
    })
}

async fn drive<S: PolicySource>(
    args: &cli::Args,
    mut guard: ReplayGuard<S>,
) -> Result<ReplaySummary, GuardError> {
    let events = open_events(args).await?;
    Ok(replay::replay(events, &mut guard).await?)
}

async fn run(args: &cli::Args, config: GuardConfig, path: PathBuf) -> Result<ReplaySummary, GuardError> {
    let user = local_user(args, &config)?;
    let permissions = StaticPermissions::from_config(&config.permissions);
    let dispatcher = LoggingDispatcher::new();

    tracing::info!(user_id = %user, "{NAME}: {DESCRIPTION}");

    if args.watch {
        let (_, settings) = ReloadManager::start(path).await;
        drive(args, AutoProtect::new(permissions, dispatcher, user, settings)).await
    } else {
        let settings = config.protect;
        drive(args, AutoProtect::new(permissions, dispatcher, user, settings)).await
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();
    let log_handle = init_logging(&args);

    tracing::info!("voiceguard v{} starting...", env!("CARGO_PKG_VERSION"));

    let (config, path) = match load_config(&args) {
        Ok(loaded) => loaded,
        Err(e) => {
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    apply_config_log_level(&log_handle, &args, &config);
    tracing::info!(
        mute = config.protect.mute,
        deaf = config.protect.deaf,
        disconnect = config.protect.disconnect,
        move_ = config.protect.move_,
        "config loaded from {}",
        path.display()
    );

    match run(&args, config, path).await {
        Ok(summary) => {
            println!(
                "{} events handled, {} skipped, {} corrective actions issued",
                summary.events, summary.skipped, summary.actions
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
