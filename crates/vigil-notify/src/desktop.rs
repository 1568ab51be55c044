use async_trait::async_trait;
use notify_rust::Notification;
use tracing::debug;

use crate::error::{NotifyError, Result};
use crate::notifier::Notifier;
use crate::types::{NotificationRequest, NotificationSettings};

/// freedesktop sound-naming-spec name; macOS maps it to the default sound.
const SOUND_NAME: &str = "message-new-instant";

/// Native desktop notifications via `notify-rust`.
///
/// The platform call (and the optional wait for dismissal) runs on tokio's
/// blocking pool so the caller's task and the UI thread stay responsive.
pub struct DesktopNotifier {
    settings: NotificationSettings,
}

impl DesktopNotifier {
    pub fn new(settings: NotificationSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &NotificationSettings {
        &self.settings
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    fn name(&self) -> &str {
        "desktop"
    }

    async fn notify(&self, title: &str, message: &str) -> Result<()> {
        let request = NotificationRequest::new(&self.settings, title, message);
        tokio::task::spawn_blocking(move || show(&request))
            .await
            .map_err(|e| NotifyError::Task(e.to_string()))?
    }
}

fn build(request: &NotificationRequest) -> Notification {
    let mut notification = Notification::new();
    notification
        .summary(&request.title)
        .body(&request.message)
        .appname(&request.app_name);
    if let Some(icon) = request.icon_str() {
        notification.icon(&icon);
    }
    if request.sound {
        notification.sound_name(SOUND_NAME);
    }
    notification
}

#[cfg(all(unix, not(target_os = "macos")))]
fn show(request: &NotificationRequest) -> Result<()> {
    let handle = build(request).show()?;
    if request.wait {
        handle.wait_for_action(|action| debug!(action, "notification closed"));
    }
    Ok(())
}

// Only the freedesktop backend reports dismissal; elsewhere `wait` is a no-op.
#[cfg(not(all(unix, not(target_os = "macos"))))]
fn show(request: &NotificationRequest) -> Result<()> {
    build(request).show()?;
    debug!(wait = request.wait, "notification shown");
    Ok(())
}
