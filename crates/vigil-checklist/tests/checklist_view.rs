use vigil_checklist::{bind, Checkable, Markable, MemoryDocument, DONE_CLASS};
use vigil_core::tasks::task_ids;

fn done_markers(doc: &MemoryDocument, id: &str) -> usize {
    doc.checkbox(id)
        .and_then(|c| c.container())
        .map(|c| c.classes().iter().filter(|class| *class == DONE_CLASS).count())
        .unwrap_or(0)
}

#[test]
fn toggle_daily_backup_adds_and_removes_marker() {
    let doc = MemoryDocument::load();
    let _checklist = bind(&doc).unwrap();
    let backup = doc.checkbox("daily-backup").unwrap();
    let row = backup.container().unwrap();

    backup.set_checked(true);
    assert!(row.has_class("task-done"));

    backup.set_checked(false);
    assert!(!row.has_class("task-done"));
}

#[test]
fn every_task_gets_exactly_one_marker_and_toggles_back() {
    let doc = MemoryDocument::load();
    let _checklist = bind(&doc).unwrap();

    for id in task_ids() {
        let checkbox = doc.checkbox(id).unwrap();
        assert_eq!(done_markers(&doc, id), 0, "{id} starts unmarked");

        checkbox.click();
        assert!(checkbox.is_checked());
        assert_eq!(done_markers(&doc, id), 1, "{id} marked once");

        checkbox.click();
        assert!(!checkbox.is_checked());
        assert_eq!(done_markers(&doc, id), 0, "{id} back to original state");
    }
}

#[test]
fn repeated_checks_never_stack_markers() {
    let doc = MemoryDocument::load();
    let _checklist = bind(&doc).unwrap();
    let logs = doc.checkbox("daily-logs").unwrap();

    logs.set_checked(true);
    logs.set_checked(true);
    assert_eq!(done_markers(&doc, "daily-logs"), 1);
}

#[test]
fn rebinding_a_document_does_not_stack_markers() {
    let doc = MemoryDocument::load();
    let _first = bind(&doc).unwrap();
    let _second = bind(&doc).unwrap();

    for id in task_ids() {
        let checkbox = doc.checkbox(id).unwrap();
        checkbox.click();
        assert_eq!(done_markers(&doc, id), 1, "{id} marked once by two bindings");
        checkbox.click();
        assert_eq!(done_markers(&doc, id), 0, "{id} cleared");
    }
}

#[test]
fn toggles_are_independent_per_task() {
    let doc = MemoryDocument::load();
    let _checklist = bind(&doc).unwrap();

    doc.checkbox("weekly-2fa").unwrap().click();

    for id in task_ids().filter(|id| *id != "weekly-2fa") {
        assert_eq!(done_markers(&doc, id), 0, "{id} untouched");
    }
    assert_eq!(done_markers(&doc, "weekly-2fa"), 1);
}

#[test]
fn reload_resets_every_task() {
    let doc = MemoryDocument::load();
    let _checklist = bind(&doc).unwrap();
    for id in task_ids() {
        doc.checkbox(id).unwrap().click();
    }

    let reloaded = doc.reload();
    let _checklist = bind(&reloaded).unwrap();
    for id in task_ids() {
        assert!(!reloaded.checkbox(id).unwrap().is_checked(), "{id} unchecked");
        assert_eq!(done_markers(&reloaded, id), 0, "{id} unmarked");
    }
}
