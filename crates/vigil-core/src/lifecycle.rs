//! Window host lifecycle, independent of the UI toolkit.
//!
//! [`AppContext`] owns the single top-level window (if any) and decides what
//! happens on the three application events: ready, activate and
//! all-windows-closed. The toolkit frontend supplies a [`WindowFactory`] and
//! forwards its signals here.

use tracing::{debug, info};

use crate::error::Result;

pub const WINDOW_WIDTH: i32 = 800;
pub const WINDOW_HEIGHT: i32 = 600;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowSpec {
    pub title: &'static str,
    pub width: i32,
    pub height: i32,
}

pub const MAIN_WINDOW: WindowSpec = WindowSpec {
    title: "Vigil — Security Checklist",
    width: WINDOW_WIDTH,
    height: WINDOW_HEIGHT,
};

/// A live top-level window created by a [`WindowFactory`].
pub trait HostWindow {
    /// False once the user has closed the window.
    fn is_open(&self) -> bool;
    /// Raise the window to the front.
    fn present(&self);
}

/// Creates the main window and loads the checklist document into it.
pub trait WindowFactory {
    type Window: HostWindow;

    fn create_window(&self, spec: &WindowSpec) -> Result<Self::Window>;
}

/// What to do when the last window closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosePolicy {
    Quit,
    /// Keep the process alive without windows (macOS dock convention).
    StayResident,
}

impl ClosePolicy {
    pub fn platform_default() -> Self {
        if cfg!(target_os = "macos") {
            ClosePolicy::StayResident
        } else {
            ClosePolicy::Quit
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Created,
    Presented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    Quit,
    KeepRunning,
}

pub struct AppContext<F: WindowFactory> {
    factory: F,
    window: Option<F::Window>,
    policy: ClosePolicy,
    ready: bool,
}

impl<F: WindowFactory> AppContext<F> {
    pub fn new(factory: F, policy: ClosePolicy) -> Self {
        Self {
            factory,
            window: None,
            policy,
            ready: false,
        }
    }

    pub fn policy(&self) -> ClosePolicy {
        self.policy
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Application-ready: create the main window.
    ///
    /// Returns `Ok(true)` on the first call only; the caller arms the reminder
    /// scheduler exactly then. Later calls behave like [`Self::on_activate`].
    pub fn on_ready(&mut self) -> Result<bool> {
        if self.ready {
            self.on_activate()?;
            return Ok(false);
        }
        self.open_window()?;
        self.ready = true;
        info!("application ready");
        Ok(true)
    }

    /// Activate: create a window if none is open, otherwise raise the existing one.
    pub fn on_activate(&mut self) -> Result<Activation> {
        match self.window.as_ref().filter(|w| w.is_open()) {
            Some(window) => {
                debug!("activate: presenting existing window");
                window.present();
                Ok(Activation::Presented)
            }
            None => {
                self.open_window()?;
                Ok(Activation::Created)
            }
        }
    }

    /// All windows closed: forget the handle and apply the close policy.
    pub fn on_all_windows_closed(&mut self) -> CloseOutcome {
        self.window = None;
        match self.policy {
            ClosePolicy::Quit => {
                info!("last window closed, quitting");
                CloseOutcome::Quit
            }
            ClosePolicy::StayResident => {
                info!("last window closed, staying resident");
                CloseOutcome::KeepRunning
            }
        }
    }

    pub fn window(&self) -> Option<&F::Window> {
        self.window.as_ref()
    }

    pub fn window_mut(&mut self) -> Option<&mut F::Window> {
        self.window.as_mut()
    }

    pub fn has_open_window(&self) -> bool {
        self.window.as_ref().is_some_and(|w| w.is_open())
    }

    fn open_window(&mut self) -> Result<()> {
        let window = self.factory.create_window(&MAIN_WINDOW)?;
        info!(
            width = MAIN_WINDOW.width,
            height = MAIN_WINDOW.height,
            "main window created"
        );
        window.present();
        self.window = Some(window);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VigilError;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[derive(Clone)]
    struct FakeWindow {
        open: Rc<Cell<bool>>,
        presented: Rc<Cell<u32>>,
    }

    impl HostWindow for FakeWindow {
        fn is_open(&self) -> bool {
            self.open.get()
        }
        fn present(&self) {
            self.presented.set(self.presented.get() + 1);
        }
    }

    #[derive(Default)]
    struct FakeFactory {
        created: RefCell<Vec<(WindowSpec, FakeWindow)>>,
        fail: bool,
    }

    impl WindowFactory for &FakeFactory {
        type Window = FakeWindow;

        fn create_window(&self, spec: &WindowSpec) -> Result<FakeWindow> {
            if self.fail {
                return Err(VigilError::Window("no display".into()));
            }
            let window = FakeWindow {
                open: Rc::new(Cell::new(true)),
                presented: Rc::new(Cell::new(0)),
            };
            self.created.borrow_mut().push((spec.clone(), window.clone()));
            Ok(window)
        }
    }

    #[test]
    fn ready_creates_one_800_by_600_window() {
        let factory = FakeFactory::default();
        let mut ctx = AppContext::new(&factory, ClosePolicy::Quit);

        assert!(ctx.on_ready().unwrap());
        let created = factory.created.borrow();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].0.width, 800);
        assert_eq!(created[0].0.height, 600);
        assert!(ctx.has_open_window());
    }

    #[test]
    fn second_ready_does_not_rearm() {
        let factory = FakeFactory::default();
        let mut ctx = AppContext::new(&factory, ClosePolicy::Quit);

        assert!(ctx.on_ready().unwrap());
        assert!(!ctx.on_ready().unwrap());
        assert_eq!(factory.created.borrow().len(), 1);
    }

    #[test]
    fn activate_with_open_window_presents_it() {
        let factory = FakeFactory::default();
        let mut ctx = AppContext::new(&factory, ClosePolicy::Quit);
        ctx.on_ready().unwrap();

        assert_eq!(ctx.on_activate().unwrap(), Activation::Presented);
        assert_eq!(factory.created.borrow().len(), 1);
        assert_eq!(factory.created.borrow()[0].1.presented.get(), 2);
    }

    #[test]
    fn activate_after_close_creates_new_window() {
        let factory = FakeFactory::default();
        let mut ctx = AppContext::new(&factory, ClosePolicy::StayResident);
        ctx.on_ready().unwrap();

        factory.created.borrow()[0].1.open.set(false);
        assert_eq!(ctx.on_all_windows_closed(), CloseOutcome::KeepRunning);
        assert!(!ctx.has_open_window());

        assert_eq!(ctx.on_activate().unwrap(), Activation::Created);
        assert_eq!(factory.created.borrow().len(), 2);
        assert!(ctx.has_open_window());
    }

    #[test]
    fn stale_handle_is_replaced_on_activate() {
        let factory = FakeFactory::default();
        let mut ctx = AppContext::new(&factory, ClosePolicy::Quit);
        ctx.on_ready().unwrap();
        factory.created.borrow()[0].1.open.set(false);

        assert_eq!(ctx.on_activate().unwrap(), Activation::Created);
    }

    #[test]
    fn quit_policy_quits_when_last_window_closes() {
        let factory = FakeFactory::default();
        let mut ctx = AppContext::new(&factory, ClosePolicy::Quit);
        ctx.on_ready().unwrap();

        assert_eq!(ctx.on_all_windows_closed(), CloseOutcome::Quit);
        assert!(ctx.window().is_none());
    }

    #[test]
    fn window_failure_is_fatal_to_ready() {
        let factory = FakeFactory {
            fail: true,
            ..Default::default()
        };
        let mut ctx = AppContext::new(&factory, ClosePolicy::Quit);

        let err = ctx.on_ready().unwrap_err();
        assert_eq!(err.code(), "WINDOW_ERROR");
        assert!(!ctx.is_ready());
    }

    #[test]
    fn platform_policy() {
        let expected = if cfg!(target_os = "macos") {
            ClosePolicy::StayResident
        } else {
            ClosePolicy::Quit
        };
        assert_eq!(ClosePolicy::platform_default(), expected);
    }
}
