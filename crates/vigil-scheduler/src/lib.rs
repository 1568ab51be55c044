//! `vigil-scheduler` — Tokio-based recurring reminder timers.
//!
//! # Overview
//!
//! [`engine::ReminderScheduler`] arms one timer task per reminder category.
//! Every firing is sent over an mpsc channel to [`delivery::run_delivery`],
//! which hands the category's fixed title and message to a
//! [`vigil_notify::Notifier`].
//!
//! | Category | Period        | First firing     |
//! |----------|---------------|------------------|
//! | daily    | 24 h          | start + 24 h     |
//! | weekly   | 7 × 24 h      | start + 7 days   |
//! | monthly  | 30 × 24 h     | start + 30 days  |
//!
//! Late ticks are not replayed: a timer that wakes after several missed
//! periods fires once and continues from there.
//!
//! On exit, [`runtime::shutdown_runtime`] stops the timers and gives pending
//! notifications [`SHUTDOWN_GRACE`] before the runtime is torn down.

pub mod delivery;
pub mod engine;
pub mod error;
pub mod runtime;
pub mod types;

pub use delivery::{run_delivery, spawn_scheduler};
pub use engine::ReminderScheduler;
pub use error::{Result, SchedulerError};
pub use runtime::{shutdown_runtime, SHUTDOWN_GRACE};
pub use types::FiredReminder;
