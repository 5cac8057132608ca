//! Timeout plumbing: a trailing debounce and a one-shot delay.

use wasm_bindgen::{closure::Closure, JsCast, JsValue};

/// Trailing debounce over `setTimeout`: every `schedule` cancels the
/// pending fire and starts the full quiet window over, so the action runs
/// at most once per quiet period.
pub struct Debounce {
    delay_ms: i32,
    timer: Option<i32>,
    // Kept alive until the timeout fires or is cancelled.
    callback: Option<Closure<dyn FnMut()>>,
}

impl Debounce {
    pub fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            timer: None,
            callback: None,
        }
    }

    pub fn schedule<F: FnMut() + 'static>(&mut self, action: F) -> Result<(), JsValue> {
        self.cancel();
        let callback = Closure::wrap(Box::new(action) as Box<dyn FnMut()>);
        let window = web_sys::window().ok_or("no window")?;
        let id = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            self.delay_ms,
        )?;
        self.timer = Some(id);
        self.callback = Some(callback);
        Ok(())
    }

    pub fn cancel(&mut self) {
        if let Some(id) = self.timer.take() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
        }
        self.callback = None;
    }
}

/// Run `action` once after `delay_ms`. The closure frees itself when it
/// runs.
pub fn after<F: FnOnce() + 'static>(delay_ms: i32, action: F) {
    let callback = Closure::once_into_js(action);
    if let Some(window) = web_sys::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    }
}
