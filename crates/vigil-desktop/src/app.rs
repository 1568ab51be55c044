use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use gtk4::prelude::*;
use gtk4::{gio, glib};
use tracing::{error, info, warn};
use vigil_core::config::APP_ID;
use vigil_core::lifecycle::{AppContext, ClosePolicy, CloseOutcome};
use vigil_notify::Notifier;
use vigil_scheduler::ReminderScheduler;

use crate::view;
use crate::window::GtkWindowFactory;

type Context = Rc<RefCell<AppContext<GtkWindowFactory>>>;

/// State shared by the GTK signal handlers for the life of the process.
struct Shell {
    ctx: Context,
    notifier: Arc<dyn Notifier>,
    scheduler: RefCell<Option<ReminderScheduler>>,
    hold: RefCell<Option<gio::ApplicationHoldGuard>>,
    failure: RefCell<Option<anyhow::Error>>,
}

/// Run the GTK application until it quits.
///
/// Returns the armed scheduler (if startup got that far) so the caller can
/// shut it down on its runtime.
pub fn run(notifier: Arc<dyn Notifier>) -> anyhow::Result<Option<ReminderScheduler>> {
    let app = gtk4::Application::builder().application_id(APP_ID).build();
    let shell = Rc::new(Shell {
        ctx: Rc::new(RefCell::new(AppContext::new(
            GtkWindowFactory::new(&app),
            ClosePolicy::platform_default(),
        ))),
        notifier,
        scheduler: RefCell::new(None),
        hold: RefCell::new(None),
        failure: RefCell::new(None),
    });

    app.connect_startup(glib::clone!(
        #[strong]
        shell,
        move |app| {
            view::load_css();
            install_actions(app, &shell.ctx);
            if shell.ctx.borrow().policy() == ClosePolicy::StayResident {
                *shell.hold.borrow_mut() = Some(app.hold());
            }
        }
    ));

    app.connect_activate(glib::clone!(
        #[strong]
        shell,
        move |app| on_activate(app, &shell)
    ));

    app.connect_window_removed(glib::clone!(
        #[strong]
        shell,
        move |app, _| {
            if !app.windows().is_empty() {
                return;
            }
            let outcome = shell.ctx.borrow_mut().on_all_windows_closed();
            if outcome == CloseOutcome::Quit {
                app.quit();
            }
        }
    ));

    // No command-line surface: hand GTK the program name only.
    let argv: Vec<String> = std::env::args().take(1).collect();
    let code = app.run_with_args(&argv);
    info!(?code, "application exited");

    let scheduler = shell.scheduler.borrow_mut().take();
    if let Some(err) = shell.failure.borrow_mut().take() {
        return Err(err);
    }
    Ok(scheduler)
}

/// The first activation is application-ready: create the window and arm the
/// reminders. Later activations only make sure a window is showing.
fn on_activate(app: &gtk4::Application, shell: &Shell) {
    let ready = shell.ctx.borrow().is_ready();
    // Bind the result first so the context borrow ends before any quit().
    let result = if ready {
        shell.ctx.borrow_mut().on_activate().map(|_| false)
    } else {
        shell.ctx.borrow_mut().on_ready()
    };
    let arm = match result {
        Ok(arm) => arm,
        Err(e) => {
            error!(code = e.code(), "window creation failed: {e}");
            fail(app, shell, e.into());
            return;
        }
    };
    if !arm {
        return;
    }
    match vigil_scheduler::spawn_scheduler(Arc::clone(&shell.notifier)) {
        Ok(scheduler) => *shell.scheduler.borrow_mut() = Some(scheduler),
        Err(e) => {
            error!("reminder scheduler failed to start: {e}");
            fail(app, shell, e.into());
        }
    }
}

fn fail(app: &gtk4::Application, shell: &Shell, err: anyhow::Error) {
    *shell.failure.borrow_mut() = Some(err);
    shell.hold.borrow_mut().take();
    app.quit();
}

/// `app.reload` (Ctrl+R) reloads the checklist document, resetting every task.
fn install_actions(app: &gtk4::Application, ctx: &Context) {
    let reload = gio::SimpleAction::new("reload", None);
    reload.connect_activate(glib::clone!(
        #[strong]
        ctx,
        move |_, _| {
            let mut ctx = ctx.borrow_mut();
            let Some(window) = ctx.window_mut() else {
                return;
            };
            if let Err(e) = window.reload() {
                warn!(code = e.code(), "checklist reload failed: {e}");
            }
        }
    ));
    app.add_action(&reload);
    app.set_accels_for_action("app.reload", &["<Control>r"]);
}
