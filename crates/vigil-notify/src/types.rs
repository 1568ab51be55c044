use std::path::PathBuf;

use vigil_core::config::NotificationsConfig;

/// Fixed presentation settings applied to every notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationSettings {
    pub app_name: String,
    pub icon: Option<PathBuf>,
    pub sound: bool,
    pub wait: bool,
}

impl From<&NotificationsConfig> for NotificationSettings {
    fn from(cfg: &NotificationsConfig) -> Self {
        Self {
            app_name: cfg.app_name.clone(),
            icon: Some(cfg.icon_path.clone()),
            sound: cfg.sound,
            wait: cfg.wait,
        }
    }
}

/// Everything the platform facility receives for one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
    pub app_name: String,
    pub icon: Option<PathBuf>,
    pub sound: bool,
    /// Block the display call until the notification is dismissed or times out.
    pub wait: bool,
}

impl NotificationRequest {
    pub fn new(settings: &NotificationSettings, title: &str, message: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            app_name: settings.app_name.clone(),
            icon: settings.icon.clone(),
            sound: settings.sound,
            wait: settings.wait,
        }
    }

    /// Icon path as the string form the platform APIs expect.
    pub fn icon_str(&self) -> Option<String> {
        self.icon.as_ref().map(|p| p.to_string_lossy().into_owned())
    }
}
