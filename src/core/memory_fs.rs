//! In-memory filesystem.
//!
//! Backs the `mock` build (offline development without a Fission account)
//! and every store/controller test. Mirrors webnative semantics where the
//! app depends on them: `mkdir` and `write` create missing parents, `rm`
//! removes a whole subtree, and nothing is durable until `publish`.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::core::error::FsError;
use crate::core::fs::{FileSystem, FsPath};

#[derive(Clone, Debug, PartialEq, Eq)]
enum Node {
    Directory,
    File(String),
}

/// Filesystem that keeps every node in a sorted map.
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RefCell<BTreeMap<FsPath, Node>>,
    calls: RefCell<Vec<String>>,
    publishes: Cell<usize>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a file directly, bypassing the call log. Used to seed fixtures.
    #[cfg(test)]
    pub fn insert_file(&self, path: &FsPath, content: &str) {
        let mut nodes = self.nodes.borrow_mut();
        Self::create_parents(&mut nodes, path);
        nodes.insert(path.clone(), Node::File(content.to_string()));
    }

    /// Whether `path` is a directory.
    #[cfg(test)]
    pub fn is_dir(&self, path: &FsPath) -> bool {
        matches!(self.nodes.borrow().get(path), Some(Node::Directory))
    }

    /// Content of a file, if present.
    #[cfg(test)]
    pub fn file(&self, path: &FsPath) -> Option<String> {
        match self.nodes.borrow().get(path) {
            Some(Node::File(content)) => Some(content.clone()),
            _ => None,
        }
    }

    /// Every operation performed through the [`FileSystem`] trait, in order.
    #[cfg(test)]
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Number of `publish` calls so far.
    #[cfg(test)]
    pub fn publish_count(&self) -> usize {
        self.publishes.get()
    }

    fn record(&self, method: &str, path: Option<&FsPath>) {
        let entry = match path {
            Some(path) => format!("{method} {path}"),
            None => method.to_string(),
        };
        self.calls.borrow_mut().push(entry);
    }

    fn create_parents(nodes: &mut BTreeMap<FsPath, Node>, path: &FsPath) {
        let mut current = path.parent();
        while let Some(dir) = current {
            nodes.entry(dir.clone()).or_insert(Node::Directory);
            current = dir.parent();
        }
    }
}

#[async_trait(?Send)]
impl FileSystem for MemoryFs {
    async fn exists(&self, path: &FsPath) -> Result<bool, FsError> {
        self.record("exists", Some(path));
        Ok(self.nodes.borrow().contains_key(path))
    }

    async fn mkdir(&self, path: &FsPath) -> Result<(), FsError> {
        self.record("mkdir", Some(path));
        let mut nodes = self.nodes.borrow_mut();
        if let Some(Node::File(_)) = nodes.get(path) {
            return Err(FsError::AlreadyExists(path.to_string()));
        }
        Self::create_parents(&mut nodes, path);
        nodes.insert(path.clone(), Node::Directory);
        Ok(())
    }

    async fn ls(&self, path: &FsPath) -> Result<Vec<String>, FsError> {
        self.record("ls", Some(path));
        let nodes = self.nodes.borrow();
        match nodes.get(path) {
            None => return Err(FsError::NotFound(path.to_string())),
            Some(Node::File(_)) => return Err(FsError::NotADirectory(path.to_string())),
            Some(Node::Directory) => {}
        }

        let depth = path.segments().len() + 1;
        Ok(nodes
            .keys()
            .filter(|p| p.segments().len() == depth && p.starts_with(path))
            .filter_map(|p| p.file_name().map(str::to_string))
            .collect())
    }

    async fn read(&self, path: &FsPath) -> Result<String, FsError> {
        self.record("read", Some(path));
        match self.nodes.borrow().get(path) {
            Some(Node::File(content)) => Ok(content.clone()),
            Some(Node::Directory) => Err(FsError::IsADirectory(path.to_string())),
            None => Err(FsError::NotFound(path.to_string())),
        }
    }

    async fn write(&self, path: &FsPath, content: &str) -> Result<(), FsError> {
        self.record("write", Some(path));
        let mut nodes = self.nodes.borrow_mut();
        if let Some(Node::Directory) = nodes.get(path) {
            return Err(FsError::IsADirectory(path.to_string()));
        }
        Self::create_parents(&mut nodes, path);
        nodes.insert(path.clone(), Node::File(content.to_string()));
        Ok(())
    }

    async fn rm(&self, path: &FsPath) -> Result<(), FsError> {
        self.record("rm", Some(path));
        let mut nodes = self.nodes.borrow_mut();
        if !nodes.contains_key(path) {
            return Err(FsError::NotFound(path.to_string()));
        }
        nodes.retain(|p, _| !p.starts_with(path));
        Ok(())
    }

    async fn publish(&self) -> Result<(), FsError> {
        self.record("publish", None);
        self.publishes.set(self.publishes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> FsPath {
        FsPath::from_segments(segments.iter().copied())
    }

    #[tokio::test]
    async fn test_root_absent_until_created() {
        let fs = MemoryFs::new();
        assert!(!fs.exists(&FsPath::root()).await.unwrap());
        fs.mkdir(&FsPath::root()).await.unwrap();
        assert!(fs.exists(&FsPath::root()).await.unwrap());
        assert!(fs.ls(&FsPath::root()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_creates_parents() {
        let fs = MemoryFs::new();
        fs.write(&path(&["a", "a.json"]), "{}").await.unwrap();
        assert!(fs.is_dir(&path(&["a"])));
        assert!(fs.is_dir(&FsPath::root()));
        assert_eq!(fs.read(&path(&["a", "a.json"])).await.unwrap(), "{}");
    }

    #[tokio::test]
    async fn test_ls_lists_direct_children_only() {
        let fs = MemoryFs::new();
        fs.insert_file(&path(&["b", "b.json"]), "{}");
        fs.insert_file(&path(&["a", "a.json"]), "{}");
        assert_eq!(fs.ls(&FsPath::root()).await.unwrap(), ["a", "b"]);
        assert_eq!(fs.ls(&path(&["a"])).await.unwrap(), ["a.json"]);
    }

    #[tokio::test]
    async fn test_ls_missing_and_file_paths() {
        let fs = MemoryFs::new();
        fs.insert_file(&path(&["a", "a.json"]), "{}");
        assert_eq!(
            fs.ls(&path(&["missing"])).await,
            Err(FsError::NotFound("missing".to_string()))
        );
        assert_eq!(
            fs.ls(&path(&["a", "a.json"])).await,
            Err(FsError::NotADirectory("a/a.json".to_string()))
        );
    }

    #[tokio::test]
    async fn test_read_errors() {
        let fs = MemoryFs::new();
        fs.mkdir(&path(&["a"])).await.unwrap();
        assert_eq!(
            fs.read(&path(&["a"])).await,
            Err(FsError::IsADirectory("a".to_string()))
        );
        assert_eq!(
            fs.read(&path(&["b"])).await,
            Err(FsError::NotFound("b".to_string()))
        );
    }

    #[tokio::test]
    async fn test_rm_removes_subtree() {
        let fs = MemoryFs::new();
        fs.insert_file(&path(&["a", "a.json"]), "{}");
        fs.rm(&path(&["a"])).await.unwrap();
        assert!(!fs.exists(&path(&["a", "a.json"])).await.unwrap());
        assert!(fs.rm(&path(&["a"])).await.is_err());
    }

    #[tokio::test]
    async fn test_mkdir_over_file_fails() {
        let fs = MemoryFs::new();
        fs.insert_file(&path(&["a"]), "x");
        assert_eq!(
            fs.mkdir(&path(&["a"])).await,
            Err(FsError::AlreadyExists("a".to_string()))
        );
    }

    #[tokio::test]
    async fn test_call_log_and_publish_count() {
        let fs = MemoryFs::new();
        fs.mkdir(&FsPath::root()).await.unwrap();
        fs.publish().await.unwrap();
        assert_eq!(fs.calls(), ["mkdir .", "publish"]);
        assert_eq!(fs.publish_count(), 1);
    }
}
