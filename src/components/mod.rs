//! UI components built with Leptos.
//!
//! - [`Header`] - Title, session name and login
//! - [`StatusLine`] - Transient success and error messages
//! - [`Editor`] - Manifest form bound to the draft
//! - [`Preview`] - JSON preview with copy to clipboard
//! - [`ManifestList`] - Saved manifests with edit and delete
//! - [`icons`] - Centralized icon definitions (change theme here)

mod editor;
mod header;
pub mod icons;
mod manifest_list;
mod preview;
mod status_line;

pub use editor::Editor;
pub use header::Header;
pub use manifest_list::ManifestList;
pub use preview::Preview;
pub use status_line::StatusLine;
