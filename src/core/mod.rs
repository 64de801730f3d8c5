//! Core business logic for the manifest editor.
//!
//! This module provides:
//! - [`FileSystem`] the storage seam, with the webnative implementation
//! - [`ManifestStore`] the on-disk layout of manifests
//! - [`Controller`] startup sequence and command handling

mod controller;
pub mod error;
pub mod fs;
#[cfg(any(test, feature = "mock"))]
mod memory_fs;
#[cfg(any(test, feature = "mock"))]
mod offline;
pub mod session;
pub mod store;
#[cfg_attr(feature = "mock", allow(dead_code))]
pub mod webnative;

pub use controller::Controller;
pub use fs::{FileSystem, FsPath};
#[cfg(any(test, feature = "mock"))]
pub use memory_fs::MemoryFs;
#[cfg(any(test, feature = "mock"))]
pub use offline::OfflineBridge;
pub use session::{Session, SessionBridge, Workspace};
pub use store::ManifestStore;
