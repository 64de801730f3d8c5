//! Utility modules for browser APIs.
//!
//! Provides:
//! - [`clipboard`] - Copy element text to the system clipboard
//! - [`dom`] - Window and viewport access
//! - [`logger`] - `log` backend writing to the browser console

pub mod clipboard;
pub mod dom;
pub mod logger;
