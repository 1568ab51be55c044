use crate::reminder::ReminderCategory;

/// A checklist entry. Only the identity is fixed; done-state lives in the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskItem {
    /// Object id of the task's checkbox in the checklist document.
    pub id: &'static str,
    pub category: ReminderCategory,
    pub label: &'static str,
}

const fn task(id: &'static str, category: ReminderCategory, label: &'static str) -> TaskItem {
    TaskItem {
        id,
        category,
        label,
    }
}

use ReminderCategory::{Daily, Monthly, Weekly};

/// All checklist tasks, in document order.
pub static TASKS: [TaskItem; 16] = [
    task("daily-backup", Daily, "Backup & organize files"),
    task("daily-updates", Daily, "Install software updates"),
    task("daily-antivirus", Daily, "Run an antivirus scan"),
    task("daily-logs", Daily, "Check system logs"),
    task("weekly-backup", Weekly, "Make an offline backup"),
    task("weekly-permissions", Weekly, "Review file permissions"),
    task("weekly-email", Weekly, "Check email security"),
    task("weekly-router", Weekly, "Apply router updates"),
    task("weekly-2fa", Weekly, "Verify 2FA on key accounts"),
    task("monthly-ransomware", Monthly, "Test anti-ransomware protection"),
    task("monthly-keychain", Monthly, "Audit the password keychain"),
    task("monthly-yubikey", Monthly, "Check the Yubikey hardware key"),
    task("monthly-physical", Monthly, "Review physical security"),
    task("monthly-phishing", Monthly, "Refresh phishing awareness"),
    task("monthly-ai", Monthly, "Review AI monitoring"),
    task("monthly-insurance", Monthly, "Review cyber insurance"),
];

/// Iterator over the task ids, in document order.
pub fn task_ids() -> impl Iterator<Item = &'static str> {
    TASKS.iter().map(|t| t.id)
}

pub fn tasks_in(category: ReminderCategory) -> impl Iterator<Item = &'static TaskItem> {
    TASKS.iter().filter(move |t| t.category == category)
}

pub fn find_task(id: &str) -> Option<&'static TaskItem> {
    TASKS.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn sixteen_unique_ids() {
        let ids: HashSet<_> = task_ids().collect();
        assert_eq!(ids.len(), 16);
    }

    #[test]
    fn category_counts() {
        assert_eq!(tasks_in(Daily).count(), 4);
        assert_eq!(tasks_in(Weekly).count(), 5);
        assert_eq!(tasks_in(Monthly).count(), 7);
    }

    #[test]
    fn ids_are_prefixed_by_category() {
        for t in &TASKS {
            assert!(
                t.id.starts_with(&format!("{}-", t.category)),
                "{} is filed under {}",
                t.id,
                t.category
            );
        }
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find_task("weekly-2fa").map(|t| t.category), Some(Weekly));
        assert!(find_task("weekly-3fa").is_none());
    }
}
