//! In-memory checklist document, used in tests and headless runs.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use vigil_core::tasks::task_ids;

use crate::surface::{Checkable, ChecklistDocument, Markable};

/// A row's class list. Unlike a toolkit widget it does not merge repeated
/// adds, so a marker applied twice shows up twice.
#[derive(Clone, Default)]
pub struct MemoryContainer {
    classes: Rc<RefCell<Vec<String>>>,
}

impl MemoryContainer {
    /// Classes in the order they were added, duplicates included.
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().clone()
    }
}

impl Markable for MemoryContainer {
    fn add_class(&self, class: &str) {
        self.classes.borrow_mut().push(class.to_string());
    }

    fn remove_class(&self, class: &str) {
        self.classes.borrow_mut().retain(|c| c != class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.borrow().iter().any(|c| c == class)
    }
}

type Listener = Rc<dyn Fn(bool)>;

struct CheckboxState {
    checked: Cell<bool>,
    container: Option<MemoryContainer>,
    listeners: RefCell<Vec<Listener>>,
}

/// A checkbox that can be driven as if by the user.
#[derive(Clone)]
pub struct MemoryCheckbox {
    state: Rc<CheckboxState>,
}

impl MemoryCheckbox {
    fn new(container: Option<MemoryContainer>) -> Self {
        Self {
            state: Rc::new(CheckboxState {
                checked: Cell::new(false),
                container,
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Flip the checkbox and fire its change listeners.
    pub fn click(&self) {
        self.set_checked(!self.is_checked());
    }

    /// Set the state; listeners fire only when it actually changes.
    pub fn set_checked(&self, checked: bool) {
        if self.state.checked.replace(checked) == checked {
            return;
        }
        // Snapshot so a listener may register further listeners.
        let listeners: Vec<Listener> = self.state.listeners.borrow().clone();
        for listener in listeners {
            listener(checked);
        }
    }
}

impl Checkable for MemoryCheckbox {
    type Container = MemoryContainer;

    fn is_checked(&self) -> bool {
        self.state.checked.get()
    }

    fn container(&self) -> Option<MemoryContainer> {
        self.state.container.clone()
    }

    fn connect_toggled<F: Fn(bool) + 'static>(&self, handler: F) {
        self.state.listeners.borrow_mut().push(Rc::new(handler));
    }
}

/// Layout of a document: each id and whether its checkbox sits in a container.
#[derive(Clone, Default)]
pub struct MemoryDocumentBuilder {
    layout: Vec<(String, bool)>,
}

impl MemoryDocumentBuilder {
    pub fn tasks<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.layout
            .extend(ids.into_iter().map(|id| (id.into(), true)));
        self
    }

    /// A checkbox with no containing element.
    pub fn orphan(mut self, id: impl Into<String>) -> Self {
        self.layout.push((id.into(), false));
        self
    }

    pub fn build(self) -> MemoryDocument {
        let controls = self
            .layout
            .iter()
            .map(|(id, contained)| {
                let container = contained.then(MemoryContainer::default);
                (id.clone(), MemoryCheckbox::new(container))
            })
            .collect();
        MemoryDocument {
            layout: self,
            controls,
        }
    }
}

/// A freshly loaded document: every checkbox unchecked, no markers.
pub struct MemoryDocument {
    layout: MemoryDocumentBuilder,
    controls: HashMap<String, MemoryCheckbox>,
}

impl MemoryDocument {
    /// The standard checklist with all sixteen tasks.
    pub fn load() -> Self {
        Self::builder().tasks(task_ids()).build()
    }

    pub fn builder() -> MemoryDocumentBuilder {
        MemoryDocumentBuilder::default()
    }

    /// Reload from the same layout. No state survives.
    pub fn reload(&self) -> Self {
        self.layout.clone().build()
    }

    pub fn checkbox(&self, id: &str) -> Option<MemoryCheckbox> {
        self.controls.get(id).cloned()
    }
}

impl ChecklistDocument for MemoryDocument {
    type Control = MemoryCheckbox;

    fn control(&self, id: &str) -> Option<MemoryCheckbox> {
        self.checkbox(id)
    }
}
