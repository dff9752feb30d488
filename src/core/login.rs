use std::cell::RefCell;
use std::rc::{Rc, Weak};

pub const SIMULATED_LOGIN_DELAY_MS: u32 = 2000;
pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful! (Simulated)";

pub const IDLE_LABEL_HTML: &str = "Sign In";
pub const LOADING_LABEL_HTML: &str = "<span class=\"loader\"></span> Signing In...";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Loading,
}

/// Everything the submit button shows for a given state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonAppearance {
    pub disabled: bool,
    pub label_html: &'static str,
    pub opacity: &'static str,
    pub cursor: &'static str,
}

impl ButtonState {
    pub fn appearance(self) -> ButtonAppearance {
        match self {
            ButtonState::Idle => ButtonAppearance {
                disabled: false,
                label_html: IDLE_LABEL_HTML,
                opacity: "1",
                cursor: "pointer",
            },
            ButtonState::Loading => ButtonAppearance {
                disabled: true,
                label_html: LOADING_LABEL_HTML,
                opacity: "0.7",
                cursor: "not-allowed",
            },
        }
    }
}

/// Surface the login flow draws on. Calls are made with no login state
/// borrowed, so an implementation may call back into `SimulatedLogin`.
pub trait LoginView {
    fn apply(&self, appearance: &ButtonAppearance);
    /// Blocking, user-facing completion signal.
    fn notify_success(&self, message: &str);
}

/// A scheduled one-shot callback that has not fired yet.
pub trait DeferredCall {
    fn cancel(self);
}

/// One-shot deferred execution on the host's event loop.
pub trait Timer {
    type Handle: DeferredCall;
    fn defer(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> anyhow::Result<Self::Handle>;
}

struct LoginState<H> {
    state: ButtonState,
    pending: Option<H>,
}

/// Form submission stand-in: loading state for a fixed delay, then success.
pub struct SimulatedLogin<V, T: Timer> {
    inner: Rc<RefCell<LoginState<T::Handle>>>,
    view: Rc<V>,
    timer: Rc<T>,
}

impl<V, T: Timer> Clone for SimulatedLogin<V, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            view: self.view.clone(),
            timer: self.timer.clone(),
        }
    }
}

impl<V, T> SimulatedLogin<V, T>
where
    V: LoginView + 'static,
    T: Timer + 'static,
{
    pub fn new(view: V, timer: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LoginState {
                state: ButtonState::Idle,
                pending: None,
            })),
            view: Rc::new(view),
            timer: Rc::new(timer),
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> ButtonState {
        self.inner.borrow().state
    }

    #[allow(dead_code)]
    pub fn is_pending(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }

    /// Start the simulated call. Returns `Ok(false)` when one is already in
    /// flight; the new submission is dropped.
    pub fn submit(&self) -> anyhow::Result<bool> {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.state == ButtonState::Loading {
                log::debug!("[login] submit ignored: request in flight");
                return Ok(false);
            }
            inner.state = ButtonState::Loading;
        }
        self.view.apply(&ButtonState::Loading.appearance());

        let weak: Weak<RefCell<LoginState<T::Handle>>> = Rc::downgrade(&self.inner);
        let view = self.view.clone();
        let scheduled = self.timer.defer(
            SIMULATED_LOGIN_DELAY_MS,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Self::complete(&inner, &view);
                }
            }),
        );

        match scheduled {
            Ok(handle) => {
                let mut inner = self.inner.borrow_mut();
                // A timer that fires synchronously has already completed us.
                if inner.state == ButtonState::Loading && inner.pending.is_none() {
                    inner.pending = Some(handle);
                }
                Ok(true)
            }
            Err(e) => {
                self.inner.borrow_mut().state = ButtonState::Idle;
                self.view.apply(&ButtonState::Idle.appearance());
                Err(e.context("scheduling simulated login"))
            }
        }
    }

    /// Abort an in-flight call without raising the success signal.
    #[allow(dead_code)]
    pub fn cancel(&self) -> bool {
        let handle = {
            let mut inner = self.inner.borrow_mut();
            let handle = inner.pending.take();
            if handle.is_some() {
                inner.state = ButtonState::Idle;
            }
            handle
        };
        match handle {
            Some(handle) => {
                handle.cancel();
                self.view.apply(&ButtonState::Idle.appearance());
                log::info!("[login] simulated request cancelled");
                true
            }
            None => false,
        }
    }

    fn complete(inner: &RefCell<LoginState<T::Handle>>, view: &V) {
        {
            let mut inner = inner.borrow_mut();
            if inner.state != ButtonState::Loading {
                return;
            }
            inner.pending = None;
            inner.state = ButtonState::Idle;
        }
        view.apply(&ButtonState::Idle.appearance());
        log::info!("[login] simulated request finished");
        view.notify_success(LOGIN_SUCCESS_MESSAGE);
    }
}
