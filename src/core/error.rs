//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FsError`] - Filesystem operations (webnative or in-memory)
//! - [`SessionError`] - Webnative SDK initialization and auth redirects
//! - [`StoreError`] - Manifest persistence on top of a filesystem
//! - [`ClipboardError`] - DOM selection and copy command failures

use thiserror::Error;

/// Filesystem operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// Path does not exist
    #[error("no such file or directory: {0}")]
    NotFound(String),
    /// Expected a directory, found a file
    #[error("not a directory: {0}")]
    NotADirectory(String),
    /// Expected a file, found a directory
    #[error("is a directory: {0}")]
    IsADirectory(String),
    /// Tried to create something that is already there as a file
    #[error("file exists: {0}")]
    AlreadyExists(String),
    /// The SDK promise rejected or a JS call threw
    #[error("filesystem call `{method}` failed: {message}")]
    Js { method: String, message: String },
    /// File content was not valid UTF-8 text
    #[error("file is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

/// Session bridge errors for the webnative SDK.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Browser window not available
    #[error("browser window not available")]
    NoWindow,
    /// SDK script not loaded
    #[error("webnative SDK not loaded")]
    SdkMissing,
    /// Failed to build the request object
    #[error("failed to create webnative request")]
    RequestCreationFailed,
    /// The SDK promise rejected
    #[error("webnative request rejected: {0}")]
    Rejected(String),
    /// The SDK returned a scenario we do not know
    #[error("unknown session scenario: {0}")]
    UnknownScenario(String),
    /// An authenticated scenario without a filesystem
    #[error("session has no filesystem")]
    MissingFilesystem,
}

/// Manifest persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A command arrived before startup finished.
    #[error("storage is not ready yet")]
    NotReady,
    /// The user is not signed in, so there is no filesystem.
    #[error("sign in to store manifests")]
    Unavailable,
    /// Short name is empty or would escape its directory.
    #[error("invalid short name: {0:?}")]
    InvalidShortName(String),
    /// Stored JSON could not be parsed.
    #[error("manifest {short_name:?} is corrupt: {message}")]
    Parse { short_name: String, message: String },
    /// Manifest could not be serialized.
    #[error("failed to serialize manifest: {0}")]
    Serialize(String),
    #[error(transparent)]
    Fs(#[from] FsError),
}

/// Clipboard copy errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    /// Browser window or document not available
    #[error("browser document not available")]
    NoDocument,
    /// No element with the requested id
    #[error("element not found: #{0}")]
    ElementNotFound(String),
    /// Selection or range API failed
    #[error("text selection unavailable")]
    SelectionUnavailable,
    /// The browser refused the copy command
    #[error("copy command was refused")]
    CopyRefused,
}

/// Any failure surfaced by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}
