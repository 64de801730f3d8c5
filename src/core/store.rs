//! Manifest persistence.
//!
//! Storage layout under the app root:
//!
//! ```text
//! <short_name>/
//!     <short_name>.json
//! ```
//!
//! A manifest exists only when both its directory and its JSON file exist.
//! Deleting removes the file but leaves the directory in place.

use std::rc::Rc;

use futures::future::try_join_all;
use log::{debug, info, warn};

use crate::config::MANIFEST_EXTENSION;
use crate::core::error::StoreError;
use crate::core::fs::{FileSystem, FsPath};
use crate::models::Manifest;

/// Check that a short name is usable as a single path segment.
pub fn validate_short_name(short_name: &str) -> Result<(), StoreError> {
    let invalid = short_name.trim().is_empty()
        || short_name == "."
        || short_name == ".."
        || short_name.contains('/');

    if invalid {
        Err(StoreError::InvalidShortName(short_name.to_string()))
    } else {
        Ok(())
    }
}

/// Manifest repository over a user filesystem.
#[derive(Clone)]
pub struct ManifestStore {
    fs: Rc<dyn FileSystem>,
}

impl ManifestStore {
    pub fn new(fs: Rc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// The app root directory.
    pub fn root(&self) -> FsPath {
        self.fs.app_path(&[])
    }

    /// Directory holding a manifest.
    pub fn directory(&self, short_name: &str) -> Result<FsPath, StoreError> {
        validate_short_name(short_name)?;
        Ok(self.fs.app_path(&[short_name]))
    }

    /// JSON file holding a manifest.
    pub fn file_path(&self, short_name: &str) -> Result<FsPath, StoreError> {
        let file_name = format!("{short_name}.{MANIFEST_EXTENSION}");
        Ok(self.directory(short_name)?.join(file_name))
    }

    /// Create the app root if it is missing.
    ///
    /// Returns `true` when the directory had to be created.
    pub async fn ensure_root(&self) -> Result<bool, StoreError> {
        let root = self.root();
        if self.fs.exists(&root).await? {
            return Ok(false);
        }

        info!("creating app directory");
        self.fs.mkdir(&root).await?;
        self.fs.publish().await?;
        Ok(true)
    }

    /// Load every stored manifest, sorted by short name.
    ///
    /// Reads run concurrently. The first read or parse failure fails the
    /// whole listing; no partial list is returned.
    pub async fn list(&self) -> Result<Vec<Manifest>, StoreError> {
        let names = self.fs.ls(&self.root()).await?;
        debug!("listing {} entries", names.len());

        let loaded = try_join_all(names.iter().map(|name| self.load_entry(name))).await?;

        let mut manifests: Vec<Manifest> = loaded.into_iter().flatten().collect();
        manifests.sort_by(|a, b| a.short_name.cmp(&b.short_name));
        Ok(manifests)
    }

    /// Load a single manifest by short name.
    pub async fn load(&self, short_name: &str) -> Result<Manifest, StoreError> {
        let path = self.file_path(short_name)?;
        let text = self.fs.read(&path).await?;
        parse_manifest(short_name, &text)
    }

    /// Persist a manifest, overwriting any previous content.
    pub async fn save(&self, manifest: &Manifest) -> Result<(), StoreError> {
        let directory = self.directory(&manifest.short_name)?;
        let path = self.file_path(&manifest.short_name)?;
        let json =
            serde_json::to_string(manifest).map_err(|e| StoreError::Serialize(e.to_string()))?;

        if !self.fs.exists(&directory).await? {
            debug!("creating directory {directory}");
            self.fs.mkdir(&directory).await?;
            self.fs.publish().await?;
        }

        self.fs.write(&path, &json).await?;
        self.fs.publish().await?;
        info!("saved manifest {}", manifest.short_name);
        Ok(())
    }

    /// Remove a manifest's JSON file. The directory is kept.
    pub async fn delete(&self, manifest: &Manifest) -> Result<(), StoreError> {
        let path = self.file_path(&manifest.short_name)?;
        self.fs.rm(&path).await?;
        self.fs.publish().await?;
        info!("deleted manifest {}", manifest.short_name);
        Ok(())
    }

    /// Read one listed entry. Entries without a manifest file are skipped.
    async fn load_entry(&self, name: &str) -> Result<Option<Manifest>, StoreError> {
        let Ok(path) = self.file_path(name) else {
            warn!("skipping entry with unusable name {name:?}");
            return Ok(None);
        };

        if !self.fs.exists(&path).await? {
            debug!("skipping {name}: no {path}");
            return Ok(None);
        }

        let text = self.fs.read(&path).await?;
        let manifest = parse_manifest(name, &text)?;
        if manifest.short_name != name {
            warn!(
                "manifest in {name}/ declares short_name {:?}",
                manifest.short_name
            );
        }
        Ok(Some(manifest))
    }
}

fn parse_manifest(short_name: &str, text: &str) -> Result<Manifest, StoreError> {
    serde_json::from_str(text).map_err(|e| StoreError::Parse {
        short_name: short_name.to_string(),
        message: e.to_string(),
    })
}
