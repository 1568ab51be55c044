//! Capabilities a rendering surface provides to the checklist binder.

/// An element that carries style classes (the task row).
pub trait Markable {
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
}

/// A checkbox-like control bound to one task.
pub trait Checkable {
    type Container: Markable + 'static;

    fn is_checked(&self) -> bool;

    /// The control's immediate containing element.
    fn container(&self) -> Option<Self::Container>;

    /// Register `handler` to run with the new state after every user toggle.
    fn connect_toggled<F: Fn(bool) + 'static>(&self, handler: F);
}

/// A loaded checklist document: resolves task ids to controls.
pub trait ChecklistDocument {
    type Control: Checkable;

    fn control(&self, id: &str) -> Option<Self::Control>;
}
