use thiserror::Error;

/// Errors that can occur within the scheduler subsystem.
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// `start()` was called on a scheduler whose timers are already armed.
    #[error("Scheduler already started")]
    AlreadyStarted,

    /// `start()` was called outside a Tokio runtime.
    #[error("No async runtime: {0}")]
    NoRuntime(String),
}

pub type Result<T> = std::result::Result<T, SchedulerError>;
