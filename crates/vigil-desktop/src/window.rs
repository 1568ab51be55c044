use gtk4::prelude::*;
use tracing::info;
use vigil_checklist::Checklist;
use vigil_core::lifecycle::{HostWindow, WindowFactory, WindowSpec};
use vigil_core::Result;

use crate::view::{self, TaskCheck};

/// Builds the main window on `app` and loads the checklist into it.
pub struct GtkWindowFactory {
    app: gtk4::Application,
}

impl GtkWindowFactory {
    pub fn new(app: &gtk4::Application) -> Self {
        Self { app: app.clone() }
    }
}

impl WindowFactory for GtkWindowFactory {
    type Window = MainWindow;

    fn create_window(&self, spec: &WindowSpec) -> Result<MainWindow> {
        let loaded = view::load_checklist()?;
        let window = gtk4::ApplicationWindow::builder()
            .application(&self.app)
            .title(spec.title)
            .default_width(spec.width)
            .default_height(spec.height)
            .child(&loaded.root)
            .build();
        Ok(MainWindow {
            window,
            checklist: loaded.checklist,
        })
    }
}

pub struct MainWindow {
    window: gtk4::ApplicationWindow,
    checklist: Checklist<TaskCheck>,
}

impl MainWindow {
    /// Replace the document with a freshly loaded copy. All checkboxes reset.
    pub fn reload(&mut self) -> Result<()> {
        let loaded = view::load_checklist()?;
        self.window.set_child(Some(&loaded.root));
        self.checklist = loaded.checklist;
        info!(tasks = self.checklist.len(), "checklist reloaded");
        Ok(())
    }
}

impl HostWindow for MainWindow {
    fn is_open(&self) -> bool {
        self.window.is_visible()
    }

    fn present(&self) {
        self.window.present();
    }
}
