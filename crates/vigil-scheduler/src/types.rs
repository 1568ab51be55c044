use chrono::{DateTime, Utc};
use vigil_core::reminder::{ReminderCategory, ReminderDefinition};

/// One timer firing, forwarded from a timer task to the delivery router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FiredReminder {
    pub category: ReminderCategory,
    pub title: &'static str,
    pub message: &'static str,
    /// 1-based count of firings for this category since `start()`.
    pub sequence: u64,
    /// Wall-clock time of the firing, for logging only.
    pub fired_at: DateTime<Utc>,
}

impl FiredReminder {
    pub fn from_definition(def: &'static ReminderDefinition, sequence: u64) -> Self {
        Self {
            category: def.category,
            title: def.title,
            message: def.message,
            sequence,
            fired_at: Utc::now(),
        }
    }
}
