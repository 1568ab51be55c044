//! `vigil-core` — shared types for the Vigil reminder app: configuration,
//! errors, the fixed reminder and task tables, and the window-host lifecycle.

pub mod config;
pub mod error;
pub mod lifecycle;
pub mod reminder;
pub mod tasks;

pub use error::{Result, VigilError};
pub use reminder::{ReminderCategory, ReminderDefinition, REMINDERS};
pub use tasks::{TaskItem, TASKS};
