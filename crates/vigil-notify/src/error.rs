use thiserror::Error;

/// Errors from the notification facility. Never fatal to the reminder schedule.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// The platform notification server rejected or failed the request.
    #[error("Notification facility error: {0}")]
    Platform(#[from] notify_rust::error::Error),

    /// The blocking display task panicked or was cancelled.
    #[error("Notification task failed: {0}")]
    Task(String),

    #[error("Notifier unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, NotifyError>;
