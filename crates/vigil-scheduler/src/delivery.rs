use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};
use vigil_notify::Notifier;

use crate::{engine::ReminderScheduler, error::Result, types::FiredReminder};

pub const FIRED_CHANNEL_CAPACITY: usize = 64;

/// Route fired reminders to the notifier until every sender is dropped.
///
/// Each notification is dispatched on its own task: a notifier waiting for
/// dismissal holds up neither the router nor the other categories. Failures
/// are logged and the schedule carries on.
pub async fn run_delivery(mut fired_rx: mpsc::Receiver<FiredReminder>, notifier: Arc<dyn Notifier>) {
    info!(notifier = notifier.name(), "reminder delivery started");
    while let Some(fired) = fired_rx.recv().await {
        info!(
            category = %fired.category,
            sequence = fired.sequence,
            fired_at = %fired.fired_at.to_rfc3339(),
            "reminder fired"
        );
        let notifier = Arc::clone(&notifier);
        tokio::spawn(async move {
            match notifier.notify(fired.title, fired.message).await {
                Ok(()) => info!(category = %fired.category, "reminder notification completed"),
                Err(e) => warn!(
                    category = %fired.category,
                    error = %e,
                    "reminder notification failed — schedule continues"
                ),
            }
        });
    }
    info!("reminder delivery stopped");
}

/// Wire a scheduler to `notifier` and arm it.
///
/// Spawns the delivery router on the current runtime, then calls
/// [`ReminderScheduler::start`].
pub fn spawn_scheduler(notifier: Arc<dyn Notifier>) -> Result<ReminderScheduler> {
    let (fired_tx, fired_rx) = mpsc::channel(FIRED_CHANNEL_CAPACITY);
    let mut scheduler = ReminderScheduler::new(fired_tx);
    scheduler.start()?;
    tokio::spawn(run_delivery(fired_rx, notifier));
    Ok(scheduler)
}
