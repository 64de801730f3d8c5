//! Filesystem abstraction over the user's app storage.
//!
//! The app never sees absolute WNFS paths. Every [`FsPath`] is relative to
//! the application's own directory (`private/Apps/<creator>/<name>` in
//! webnative terms), which keeps the store logic backend-agnostic.

use std::fmt;

use async_trait::async_trait;

use crate::core::error::FsError;

/// Path relative to the application root, stored as segments.
///
/// The empty path is the application root itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FsPath {
    segments: Vec<String>,
}

impl FsPath {
    /// The application root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from segments. Empty segments are dropped.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(Into::into)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Append one segment.
    pub fn join(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        let segment = segment.into();
        if !segment.is_empty() {
            segments.push(segment);
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Parent path, or `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        let (_, rest) = self.segments.split_last()?;
        Some(Self {
            segments: rest.to_vec(),
        })
    }

    /// Last segment, or `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Whether `self` is `other` or lies beneath it.
    pub fn starts_with(&self, other: &FsPath) -> bool {
        self.segments.starts_with(&other.segments)
    }
}

impl fmt::Display for FsPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.segments.join("/"))
        }
    }
}

/// Operations the app needs from a user filesystem.
///
/// Mirrors the subset of the webnative `fs` API the app uses. Mutations are
/// local until [`FileSystem::publish`] is called.
#[async_trait(?Send)]
pub trait FileSystem {
    /// Resolve a path inside the app namespace.
    fn app_path(&self, segments: &[&str]) -> FsPath {
        FsPath::from_segments(segments.iter().copied())
    }

    async fn exists(&self, path: &FsPath) -> Result<bool, FsError>;

    /// Create a directory, including missing parents.
    async fn mkdir(&self, path: &FsPath) -> Result<(), FsError>;

    /// Names of the direct children of a directory.
    async fn ls(&self, path: &FsPath) -> Result<Vec<String>, FsError>;

    /// Read a file as UTF-8 text.
    async fn read(&self, path: &FsPath) -> Result<String, FsError>;

    /// Write a file, replacing any previous content.
    async fn write(&self, path: &FsPath, content: &str) -> Result<(), FsError>;

    /// Remove a file or directory.
    async fn rm(&self, path: &FsPath) -> Result<(), FsError>;

    /// Make pending changes durable.
    async fn publish(&self) -> Result<(), FsError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_path() {
        let root = FsPath::root();
        assert!(root.is_root());
        assert_eq!(root.parent(), None);
        assert_eq!(root.file_name(), None);
        assert_eq!(root.to_string(), ".");
    }

    #[test]
    fn test_join_and_display() {
        let path = FsPath::root().join("myapp").join("myapp.json");
        assert_eq!(path.to_string(), "myapp/myapp.json");
        assert_eq!(path.file_name(), Some("myapp.json"));
        assert_eq!(path.parent(), Some(FsPath::from_segments(["myapp"])));
    }

    #[test]
    fn test_empty_segments_dropped() {
        let path = FsPath::from_segments(["", "a", "", "b"]);
        assert_eq!(path.segments(), ["a", "b"]);
        assert_eq!(FsPath::root().join(""), FsPath::root());
    }

    #[test]
    fn test_starts_with() {
        let dir = FsPath::from_segments(["a"]);
        let file = dir.join("a.json");
        assert!(file.starts_with(&dir));
        assert!(file.starts_with(&FsPath::root()));
        assert!(!dir.starts_with(&file));
    }
}
