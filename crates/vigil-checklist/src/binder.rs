use tracing::{debug, info};
use vigil_core::reminder::ReminderCategory;
use vigil_core::tasks::{TaskItem, TASKS};

use crate::error::{ChecklistError, Result};
use crate::surface::{Checkable, ChecklistDocument, Markable};

/// Style class applied to a task's container while its checkbox is checked.
pub const DONE_CLASS: &str = "task-done";

pub struct BoundTask<C> {
    pub task: &'static TaskItem,
    pub control: C,
}

/// Every task of a loaded document, with toggle listeners attached.
pub struct Checklist<C> {
    tasks: Vec<BoundTask<C>>,
}

/// Resolve every task id in `doc` and attach the done-marker listeners.
///
/// All ids are resolved before any listener is attached, so a document with a
/// missing element fails without being left half-bound.
pub fn bind<D: ChecklistDocument>(doc: &D) -> Result<Checklist<D::Control>> {
    let mut resolved = Vec::with_capacity(TASKS.len());
    for task in TASKS.iter() {
        let control = doc
            .control(task.id)
            .ok_or_else(|| ChecklistError::MissingControl {
                id: task.id.to_string(),
            })?;
        let container = control
            .container()
            .ok_or_else(|| ChecklistError::MissingContainer {
                id: task.id.to_string(),
            })?;
        resolved.push((task, control, container));
    }

    let mut tasks = Vec::with_capacity(resolved.len());
    for (task, control, container) in resolved {
        apply_marker(&container, control.is_checked());
        let id = task.id;
        control.connect_toggled(move |checked| {
            apply_marker(&container, checked);
            debug!(task_id = id, checked, "task toggled");
        });
        tasks.push(BoundTask { task, control });
    }

    info!(tasks = tasks.len(), "checklist bound");
    Ok(Checklist { tasks })
}

/// Add or remove the done marker to match `done`. Never adds it twice.
pub fn apply_marker<M: Markable>(container: &M, done: bool) {
    if done {
        if !container.has_class(DONE_CLASS) {
            container.add_class(DONE_CLASS);
        }
    } else {
        container.remove_class(DONE_CLASS);
    }
}

impl<C: Checkable> Checklist<C> {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn control(&self, id: &str) -> Option<&C> {
        self.tasks
            .iter()
            .find(|b| b.task.id == id)
            .map(|b| &b.control)
    }

    pub fn tasks(&self) -> impl Iterator<Item = &BoundTask<C>> {
        self.tasks.iter()
    }

    /// `(done, total)` for one category.
    pub fn progress(&self, category: ReminderCategory) -> (usize, usize) {
        self.tasks
            .iter()
            .filter(|b| b.task.category == category)
            .fold((0, 0), |(done, total), b| {
                (done + usize::from(b.control.is_checked()), total + 1)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryDocument;

    #[test]
    fn binds_all_sixteen_tasks() {
        let doc = MemoryDocument::load();
        let checklist = bind(&doc).unwrap();
        assert_eq!(checklist.len(), 16);
        assert!(checklist.control("monthly-insurance").is_some());
    }

    #[test]
    fn missing_control_names_the_id() {
        let doc = MemoryDocument::builder()
            .tasks(TASKS.iter().map(|t| t.id).filter(|id| *id != "weekly-router"))
            .build();
        let err = bind(&doc).err().unwrap();
        assert_eq!(
            err,
            ChecklistError::MissingControl {
                id: "weekly-router".into()
            }
        );
    }

    #[test]
    fn missing_container_is_reported() {
        let doc = MemoryDocument::builder()
            .tasks(TASKS.iter().map(|t| t.id).filter(|id| *id != "daily-logs"))
            .orphan("daily-logs")
            .build();
        let err = bind(&doc).err().unwrap();
        assert_eq!(err.task_id(), "daily-logs");
        assert!(matches!(err, ChecklistError::MissingContainer { .. }));
    }

    #[test]
    fn failed_bind_attaches_nothing() {
        let doc = MemoryDocument::builder()
            .tasks(["daily-backup", "daily-updates"])
            .build();
        assert!(bind(&doc).is_err());

        let backup = doc.checkbox("daily-backup").unwrap();
        backup.click();
        assert!(!backup.container().unwrap().has_class(DONE_CLASS));
    }

    #[test]
    fn marker_is_applied_at_most_once() {
        let row = crate::memory::MemoryContainer::default();
        apply_marker(&row, true);
        apply_marker(&row, true);
        assert_eq!(row.classes(), vec![DONE_CLASS.to_string()]);

        apply_marker(&row, false);
        assert!(row.classes().is_empty());
    }

    #[test]
    fn progress_counts_checked_tasks_per_category() {
        let doc = MemoryDocument::load();
        let checklist = bind(&doc).unwrap();
        doc.checkbox("weekly-email").unwrap().click();
        doc.checkbox("weekly-2fa").unwrap().click();
        doc.checkbox("monthly-ai").unwrap().click();

        assert_eq!(checklist.progress(ReminderCategory::Daily), (0, 4));
        assert_eq!(checklist.progress(ReminderCategory::Weekly), (2, 5));
        assert_eq!(checklist.progress(ReminderCategory::Monthly), (1, 7));
    }
}
