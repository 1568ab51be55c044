use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

pub const APP_ID: &str = "io.vigil.Vigil";
pub const APP_NAME: &str = "Vigil";
pub const DEFAULT_LOG_FILTER: &str = "vigil=info";
pub const ICON_FILE: &str = "icon.png";

/// Top-level config (vigil.toml + VIGIL_* env overrides).
///
/// Reminder periods and texts are fixed at build time and have no keys here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VigilConfig {
    #[serde(default)]
    pub notifications: NotificationsConfig,
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum NotifierBackend {
    /// Native desktop notifications.
    #[default]
    Desktop,
    /// Log-only, for headless sessions.
    Log,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    #[serde(default)]
    pub backend: NotifierBackend,
    /// Icon shown on every reminder. Defaults to `icon.png` beside the executable.
    #[serde(default = "default_icon_path")]
    pub icon_path: PathBuf,
    #[serde(default = "bool_true")]
    pub sound: bool,
    /// Hold each delivery until the notification is dismissed or times out.
    #[serde(default = "bool_true")]
    pub wait: bool,
    #[serde(default = "default_app_name")]
    pub app_name: String,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            backend: NotifierBackend::default(),
            icon_path: default_icon_path(),
            sound: true,
            wait: true,
            app_name: default_app_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive used when RUST_LOG is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn bool_true() -> bool {
    true
}
fn default_app_name() -> String {
    APP_NAME.to_string()
}
fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}
fn default_icon_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ICON_FILE)))
        .unwrap_or_else(|| PathBuf::from(ICON_FILE))
}

impl VigilConfig {
    /// Load config from a TOML file with VIGIL_* env var overrides.
    ///
    /// Nested keys use a double underscore: `VIGIL_NOTIFICATIONS__SOUND=false`.
    /// A missing file is not an error; every key has a default.
    pub fn load(config_path: Option<&str>) -> crate::error::Result<Self> {
        let path = config_path
            .map(String::from)
            .unwrap_or_else(default_config_path);

        Self::figment(&path)
            .extract()
            .map_err(|e| crate::error::VigilError::Config(e.to_string()))
    }

    fn figment(path: &str) -> Figment {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("VIGIL_").ignore(&["config"]).split("__"))
    }
}

fn default_config_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    format!("{}/.vigil/vigil.toml", home)
}
