//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen_futures::JsFuture;
use web_sys::Window;

use crate::core::error::ContactError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Navigate the current tab to `url` (used for `mailto:` links, which hand
/// off to the mail client without leaving the page).
pub fn open_url(url: &str) -> Result<(), ContactError> {
    let window = window().ok_or(ContactError::NoWindow)?;
    window
        .location()
        .set_href(url)
        .map_err(|e| ContactError::Navigation(js_error_message(&e)))
}

/// Write text to the system clipboard.
pub async fn copy_to_clipboard(text: &str) -> Result<(), ContactError> {
    let window = window().ok_or(ContactError::NoWindow)?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| ContactError::Clipboard(js_error_message(&e)))
}

/// Jump back to the top of the page when a new panel mounts.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            js_sys::Reflect::get(value, &"message".into())
                .ok()
                .and_then(|m| m.as_string())
        })
        .unwrap_or_else(|| "Unknown error".to_string())
}
