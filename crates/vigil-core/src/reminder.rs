//! Reminder definitions — the three fixed recurring reminders shared between
//! the scheduler and the checklist.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DAY_MS: u64 = 24 * 60 * 60 * 1000;
pub const DAILY_PERIOD_MS: u64 = DAY_MS;
pub const WEEKLY_PERIOD_MS: u64 = 7 * DAY_MS;
pub const MONTHLY_PERIOD_MS: u64 = 30 * DAY_MS;

/// One of the three reminder cadences. Also groups checklist tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderCategory {
    Daily,
    Weekly,
    Monthly,
}

impl ReminderCategory {
    pub const ALL: [ReminderCategory; 3] = [
        ReminderCategory::Daily,
        ReminderCategory::Weekly,
        ReminderCategory::Monthly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReminderCategory::Daily => "daily",
            ReminderCategory::Weekly => "weekly",
            ReminderCategory::Monthly => "monthly",
        }
    }

    /// The fixed reminder this category fires.
    pub fn definition(&self) -> &'static ReminderDefinition {
        match self {
            ReminderCategory::Daily => &REMINDERS[0],
            ReminderCategory::Weekly => &REMINDERS[1],
            ReminderCategory::Monthly => &REMINDERS[2],
        }
    }
}

impl std::fmt::Display for ReminderCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReminderCategory {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "daily" => Ok(ReminderCategory::Daily),
            "weekly" => Ok(ReminderCategory::Weekly),
            "monthly" => Ok(ReminderCategory::Monthly),
            other => Err(format!("unknown reminder category: {other}")),
        }
    }
}

/// A fixed, build-time reminder: what to show and how often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDefinition {
    pub category: ReminderCategory,
    pub title: &'static str,
    pub message: &'static str,
    /// Interval between firings in milliseconds.
    pub period_ms: u64,
}

impl ReminderDefinition {
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

pub static REMINDERS: [ReminderDefinition; 3] = [
    ReminderDefinition {
        category: ReminderCategory::Daily,
        title: "Daily Task Reminder",
        message: "Backup & organize files, software updates, antivirus scan, check logs.",
        period_ms: DAILY_PERIOD_MS,
    },
    ReminderDefinition {
        category: ReminderCategory::Weekly,
        title: "Weekly Task Reminder",
        message: "Offline backup, file permissions, email security, router updates, \
                  2FA verification.",
        period_ms: WEEKLY_PERIOD_MS,
    },
    ReminderDefinition {
        category: ReminderCategory::Monthly,
        title: "Monthly Task Reminder",
        message: "Anti-ransomware, password keychain, Yubikey, physical security, \
                  avoid phishing, AI monitoring, cyber insurance.",
        period_ms: MONTHLY_PERIOD_MS,
    },
];
