//! GTK rendering of the checklist document.

use gtk4::prelude::*;
use tracing::warn;
use vigil_checklist::{Checkable, Checklist, ChecklistDocument, Markable};
use vigil_core::{Result, VigilError};

pub const CHECKLIST_UI: &str = include_str!("../resources/checklist.ui");
const CHECKLIST_CSS: &str = include_str!("../resources/checklist.css");
const ROOT_ID: &str = "checklist-root";

/// A task's check button.
#[derive(Clone)]
pub struct TaskCheck(gtk4::CheckButton);

/// The row box holding a task's check button.
#[derive(Clone)]
pub struct TaskRow(gtk4::Widget);

impl Markable for TaskRow {
    fn add_class(&self, class: &str) {
        self.0.add_css_class(class);
    }

    fn remove_class(&self, class: &str) {
        self.0.remove_css_class(class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.has_css_class(class)
    }
}

impl Checkable for TaskCheck {
    type Container = TaskRow;

    fn is_checked(&self) -> bool {
        self.0.is_active()
    }

    fn container(&self) -> Option<TaskRow> {
        self.0.parent().map(TaskRow)
    }

    fn connect_toggled<F: Fn(bool) + 'static>(&self, handler: F) {
        self.0.connect_toggled(move |button| handler(button.is_active()));
    }
}

/// A checklist document instantiated from the embedded builder file.
pub struct GtkDocument {
    builder: gtk4::Builder,
}

impl GtkDocument {
    /// Parse a fresh copy of the document; every checkbox starts unchecked.
    pub fn load() -> Self {
        Self {
            builder: gtk4::Builder::from_string(CHECKLIST_UI),
        }
    }

    pub fn root(&self) -> Result<gtk4::Widget> {
        self.builder
            .object::<gtk4::Widget>(ROOT_ID)
            .ok_or_else(|| VigilError::Document(format!("no `{ROOT_ID}` object")))
    }
}

impl ChecklistDocument for GtkDocument {
    type Control = TaskCheck;

    fn control(&self, id: &str) -> Option<TaskCheck> {
        self.builder.object::<gtk4::CheckButton>(id).map(TaskCheck)
    }
}

/// A loaded, bound checklist and the widget tree that displays it.
pub struct LoadedChecklist {
    pub root: gtk4::Widget,
    pub checklist: Checklist<TaskCheck>,
}

/// Load the document and bind every task. Fails on the first missing element.
pub fn load_checklist() -> Result<LoadedChecklist> {
    let doc = GtkDocument::load();
    let root = doc.root()?;
    let checklist =
        vigil_checklist::bind(&doc).map_err(|e| VigilError::Document(e.to_string()))?;
    Ok(LoadedChecklist { root, checklist })
}

/// Install the checklist stylesheet on the default display.
pub fn load_css() {
    let Some(display) = gtk4::gdk::Display::default() else {
        warn!("no default display — checklist stylesheet not loaded");
        return;
    };
    let provider = gtk4::CssProvider::new();
    provider.load_from_string(CHECKLIST_CSS);
    gtk4::style_context_add_provider_for_display(
        &display,
        &provider,
        gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
    );
}
