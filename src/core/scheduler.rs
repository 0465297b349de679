//! Cancellable one-shot timers.
//!
//! A [`Scheduler`] hands out a handle per scheduled callback. Dropping the
//! handle cancels the callback if it has not run yet, so whoever owns the
//! handle controls the timer's lifetime.

use gloo_timers::callback::Timeout;

/// Source of one-shot delayed callbacks.
pub trait Scheduler {
    /// Cancels the pending callback when dropped.
    type Handle: 'static;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Handle returned by [`BrowserScheduler`].
pub type BrowserTimer = Timeout;

/// `setTimeout`-backed scheduler for the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn test_browser_timeout_fires() {
        let hit = Rc::new(Cell::new(false));
        let h = Rc::clone(&hit);
        let _handle = BrowserScheduler.schedule(10, Box::new(move || h.set(true)));
        TimeoutFuture::new(50).await;
        assert!(hit.get());
    }

    #[wasm_bindgen_test]
    async fn test_browser_timeout_cancelled_on_drop() {
        let hit = Rc::new(Cell::new(false));
        let h = Rc::clone(&hit);
        let handle = BrowserScheduler.schedule(10, Box::new(move || h.set(true)));
        drop(handle);
        TimeoutFuture::new(50).await;
        assert!(!hit.get());
    }
}
