use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};
use vigil_core::reminder::{ReminderDefinition, REMINDERS};

use crate::{
    error::{Result, SchedulerError},
    types::FiredReminder,
};

/// Owns the three recurring reminder timers.
///
/// Each timer runs as its own Tokio task and forwards every firing to the
/// delivery router over `fired_tx`. Timers never coordinate with each other.
pub struct ReminderScheduler {
    fired_tx: mpsc::Sender<FiredReminder>,
    shutdown_tx: watch::Sender<bool>,
    timers: Vec<JoinHandle<()>>,
}

impl ReminderScheduler {
    pub fn new(fired_tx: mpsc::Sender<FiredReminder>) -> Self {
        let (shutdown_tx, _) = watch::channel(false);
        Self {
            fired_tx,
            shutdown_tx,
            timers: Vec::new(),
        }
    }

    /// Arm the daily, weekly and monthly timers.
    ///
    /// Must be called from within a Tokio runtime context. The first firing of
    /// each timer happens one full period after this call.
    pub fn start(&mut self) -> Result<()> {
        if self.is_armed() {
            return Err(SchedulerError::AlreadyStarted);
        }
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| SchedulerError::NoRuntime(e.to_string()))?;

        // All three periods are measured from the same instant.
        let start = Instant::now();
        for def in REMINDERS.iter() {
            let timer = run_timer(
                def,
                start,
                self.fired_tx.clone(),
                self.shutdown_tx.subscribe(),
            );
            self.timers.push(runtime.spawn(timer));
            info!(category = %def.category, period_ms = def.period_ms, "reminder timer armed");
        }
        Ok(())
    }

    pub fn is_armed(&self) -> bool {
        !self.timers.is_empty()
    }

    /// Stop every timer and wait for the tasks to exit.
    pub async fn shutdown(mut self) {
        let _ = self.shutdown_tx.send(true);
        for timer in std::mem::take(&mut self.timers) {
            let _ = timer.await;
        }
        info!("reminder scheduler stopped");
    }
}

impl Drop for ReminderScheduler {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}

/// Timer loop for one reminder category.
///
/// A late tick (process suspended, runtime starved) fires once when it is
/// noticed and the schedule restarts from there; missed periods are not
/// replayed.
async fn run_timer(
    def: &'static ReminderDefinition,
    start: Instant,
    fired_tx: mpsc::Sender<FiredReminder>,
    mut shutdown: watch::Receiver<bool>,
) {
    let period: Duration = def.period();
    let mut interval = tokio::time::interval_at(start + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut sequence = 0u64;

    loop {
        tokio::select! {
            _ = interval.tick() => {
                sequence += 1;
                debug!(category = %def.category, sequence, "reminder timer fired");
                // try_send never blocks the timer; a full channel drops this firing only.
                if fired_tx.try_send(FiredReminder::from_definition(def, sequence)).is_err() {
                    warn!(category = %def.category, sequence, "delivery channel full or closed — reminder dropped");
                }
            }
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    debug!(category = %def.category, "reminder timer stopping");
                    break;
                }
            }
        }
    }
}
