// Process-exit teardown with a notification that never gets dismissed.

use std::sync::{mpsc as std_mpsc, Arc, Mutex};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::runtime::{Builder, Runtime};
use tokio::sync::mpsc;
use vigil_core::reminder::REMINDERS;
use vigil_notify::{Notifier, NotifyError};
use vigil_scheduler::delivery::FIRED_CHANNEL_CAPACITY;
use vigil_scheduler::{run_delivery, shutdown_runtime, spawn_scheduler, FiredReminder, SHUTDOWN_GRACE};

/// Far longer than the grace period: stands in for a notification left on screen.
const PENDING: Duration = Duration::from_secs(30);

/// Blocks a blocking-pool thread the way `wait_for_action` does.
struct UndismissedNotifier {
    shown: Mutex<std_mpsc::Sender<()>>,
}

#[async_trait]
impl Notifier for UndismissedNotifier {
    fn name(&self) -> &str {
        "undismissed"
    }

    async fn notify(&self, _title: &str, _message: &str) -> vigil_notify::Result<()> {
        let shown = self.shown.lock().unwrap().clone();
        tokio::task::spawn_blocking(move || {
            let _ = shown.send(());
            std::thread::sleep(PENDING);
        })
        .await
        .map_err(|e| NotifyError::Task(e.to_string()))
    }
}

fn runtime() -> Runtime {
    Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap()
}

fn undismissed() -> (Arc<UndismissedNotifier>, std_mpsc::Receiver<()>) {
    let (shown_tx, shown_rx) = std_mpsc::channel();
    let notifier = Arc::new(UndismissedNotifier {
        shown: Mutex::new(shown_tx),
    });
    (notifier, shown_rx)
}

#[test]
fn pending_notification_does_not_hold_the_process() {
    let runtime = runtime();
    let (notifier, shown) = undismissed();
    let (fired_tx, fired_rx) = mpsc::channel(FIRED_CHANNEL_CAPACITY);
    runtime.spawn(run_delivery(fired_rx, notifier));

    fired_tx
        .try_send(FiredReminder::from_definition(&REMINDERS[0], 1))
        .unwrap();
    shown
        .recv_timeout(Duration::from_secs(5))
        .expect("notification should be on screen");

    let started = Instant::now();
    shutdown_runtime(runtime, None);
    let elapsed = started.elapsed();
    assert!(
        elapsed < SHUTDOWN_GRACE + Duration::from_secs(2),
        "teardown took {elapsed:?}"
    );
}

#[test]
fn armed_scheduler_is_stopped_before_teardown() {
    let runtime = runtime();
    let (notifier, _shown) = undismissed();
    let scheduler = runtime
        .block_on(async { spawn_scheduler(notifier) })
        .unwrap();
    assert!(scheduler.is_armed());

    let started = Instant::now();
    shutdown_runtime(runtime, Some(scheduler));
    assert!(started.elapsed() < SHUTDOWN_GRACE);
}
