//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current viewport size as `(width, height)` in CSS pixels.
///
/// Falls back to `(0.0, 0.0)` outside a browser.
pub fn viewport_size() -> (f64, f64) {
    let Some(window) = window() else {
        return (0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

/// Check if the viewport is narrow (phone or small tablet).
///
/// Uses a breakpoint of 768px (common tablet/desktop threshold).
pub fn is_narrow(width: f64) -> bool {
    width > 0.0 && width < 768.0
}

/// Reload the current page.
pub fn reload() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}
