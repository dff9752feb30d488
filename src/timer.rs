use crate::core::{DeferredCall, Timer};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `setTimeout`-backed one-shot timer.
pub struct WindowTimer {
    window: web::Window,
}

impl WindowTimer {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

pub struct TimeoutHandle {
    window: web::Window,
    id: i32,
}

impl DeferredCall for TimeoutHandle {
    fn cancel(self) {
        self.window.clear_timeout_with_handle(self.id);
    }
}

impl Timer for WindowTimer {
    type Handle = TimeoutHandle;

    fn defer(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> anyhow::Result<TimeoutHandle> {
        // The JS function frees itself after its single call. A cancelled
        // timeout leaks it, which is bounded by one per cancel.
        let js_cb = Closure::once_into_js(move || callback());
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                js_cb.unchecked_ref::<js_sys::Function>(),
                delay_ms.min(i32::MAX as u32) as i32,
            )
            .map_err(|e| anyhow::anyhow!("setTimeout failed: {:?}", e))?;
        Ok(TimeoutHandle {
            window: self.window.clone(),
            id,
        })
    }
}
