//! Process-exit teardown of the reminder runtime.

use std::time::{Duration, Instant};

use tokio::runtime::Runtime;
use tracing::info;

use crate::engine::ReminderScheduler;

/// How long quitting waits for in-flight notifications before abandoning them.
pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Stop the reminder timers, then tear the runtime down.
///
/// A notification still waiting for dismissal occupies a blocking-pool thread
/// that cannot be cancelled. It is abandoned after [`SHUTDOWN_GRACE`] rather
/// than keeping the process alive.
pub fn shutdown_runtime(runtime: Runtime, scheduler: Option<ReminderScheduler>) {
    if let Some(scheduler) = scheduler {
        runtime.block_on(scheduler.shutdown());
    }
    let started = Instant::now();
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    info!(
        elapsed_ms = started.elapsed().as_millis() as u64,
        "reminder runtime stopped"
    );
}
