//! JSON-lines replay through the host event bus.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::broadcast::error::TryRecvError;
use tracing::{debug, warn};
use voiceguard_common::{EventBus, HostEvent, UserId};
use voiceguard_protect::{AutoProtect, PolicySource};

use crate::host::{LoggingDispatcher, StaticPermissions};

pub type ReplayGuard<S> = AutoProtect<StaticPermissions, LoggingDispatcher, UserId, S>;

const BUS_CAPACITY: usize = 64;

/// Totals for one replay run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub skipped: usize,
    pub actions: usize,
}

/// Decode one input line. `Ok(None)` for blank lines and `#` comments.
pub fn parse_line(line: &str) -> Result<Option<HostEvent>, voiceguard_common::EventError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    HostEvent::from_json(line).map(Some)
}

/// Feed every event in `reader` to `guard`, in order.
///
/// Each decoded event is published on the bus and drained by the guard
/// before the next line is read, so delivery is strictly one at a time
/// and the bus never lags.
pub async fn replay<R, S>(reader: R, guard: &mut ReplayGuard<S>) -> std::io::Result<ReplaySummary>
where
    R: AsyncBufRead + Unpin,
    S: PolicySource,
{
    let bus = EventBus::new(BUS_CAPACITY);
    let mut inbox = bus.subscribe();
    let mut summary = ReplaySummary::default();
    let mut lines = reader.lines();
    let mut line_no = 0usize;

    guard.start();

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let event = match parse_line(&line) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                warn!(line = line_no, "skipping event: {e}");
                summary.skipped += 1;
                continue;
            }
        };

        bus.publish(event);

        loop {
            match inbox.try_recv() {
                Ok(event) => {
                    summary.events += 1;
                    for action in guard.handle(&event) {
                        debug!(line = line_no, action = action.label(), "corrective action issued");
                        summary.actions += 1;
                    }
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                Err(TryRecvError::Lagged(n)) => warn!("host bus lagged by {n} events"),
            }
        }
    }

    guard.stop();
    debug!(?summary, "replay finished");
    Ok(summary)
}
