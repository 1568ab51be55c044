use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;
use vigil_core::config::{NotificationsConfig, NotifierBackend};

use crate::desktop::DesktopNotifier;
use crate::error::Result;
use crate::types::NotificationSettings;

/// Displays a reminder to the user.
///
/// Implementations must not block the calling task for the lifetime of the
/// notification; any blocking platform work belongs on a blocking thread.
#[async_trait]
pub trait Notifier: Send + Sync {
    fn name(&self) -> &str;

    async fn notify(&self, title: &str, message: &str) -> Result<()>;
}

/// Headless notifier: writes each reminder to the log and nothing else.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &str {
        "log"
    }

    async fn notify(&self, title: &str, message: &str) -> Result<()> {
        info!(%title, %message, "reminder");
        Ok(())
    }
}

/// Build the notifier selected by `notifications.backend`.
pub fn build_notifier(cfg: &NotificationsConfig) -> Arc<dyn Notifier> {
    match cfg.backend {
        NotifierBackend::Desktop => {
            info!(
                icon = %cfg.icon_path.display(),
                sound = cfg.sound,
                wait = cfg.wait,
                "notifier: desktop"
            );
            Arc::new(DesktopNotifier::new(NotificationSettings::from(cfg)))
        }
        NotifierBackend::Log => {
            info!("notifier: log only");
            Arc::new(LogNotifier)
        }
    }
}
