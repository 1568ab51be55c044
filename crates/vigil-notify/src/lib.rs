//! `vigil-notify` — the notifier seam between reminder delivery and the
//! platform notification facility.

pub mod desktop;
pub mod error;
pub mod notifier;
pub mod types;

pub use desktop::DesktopNotifier;
pub use error::{NotifyError, Result};
pub use notifier::{build_notifier, LogNotifier, Notifier};
pub use types::{NotificationRequest, NotificationSettings};
