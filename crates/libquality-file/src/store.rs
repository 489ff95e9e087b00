//! Filesystem storage area standing in for browser local storage.
//!
//! Every key lives in one JSON object file, `local_storage.json`, under the
//! store root. Writers hold an exclusive lock on `local_storage.lock` while
//! they read, modify and replace that file.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, instrument, warn};

use libquality_core::error::{Error, StorageError};
use libquality_core::{KeyValueStore, Result};

type StorageArea = BTreeMap<String, String>;

fn map_io(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + '_ {
    move |source| StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}

/// Filesystem-backed [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory is created on first write.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Get the root directory path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the storage area file.
    pub fn area_path(&self) -> PathBuf {
        self.root.join("local_storage.json")
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join("local_storage.lock")
    }

    fn read_area(&self) -> Result<StorageArea> {
        let path = self.area_path();

        if !path.exists() {
            return Ok(StorageArea::new());
        }

        let content = fs::read_to_string(&path).map_err(map_io(&path))?;
        let area = serde_json::from_str(&content).map_err(|e| StorageError::Corrupt {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(area)
    }

    /// Like `read_area`, but a corrupt area file counts as empty so the
    /// next write replaces it.
    fn read_area_for_write(&self) -> Result<StorageArea> {
        match self.read_area() {
            Err(Error::Storage(StorageError::Corrupt { path, reason })) => {
                warn!(%path, %reason, "Discarding corrupt storage area");
                Ok(StorageArea::new())
            }
            other => other,
        }
    }

    /// Replace the storage area file with `area`.
    ///
    /// Writes a sibling temp file and renames it over the old one, so a reader
    /// sees either the previous or the new area.
    fn write_area(&self, area: &StorageArea) -> Result<()> {
        let path = self.area_path();
        let tmp_path = self.root.join("local_storage.json.tmp");

        let content = serde_json::to_string_pretty(area)?;

        let mut file = File::create(&tmp_path).map_err(map_io(&tmp_path))?;
        file.write_all(content.as_bytes())
            .map_err(map_io(&tmp_path))?;
        file.sync_data().map_err(map_io(&tmp_path))?;

        fs::rename(&tmp_path, &path).map_err(map_io(&path))?;

        Ok(())
    }

    /// Run `update` against the storage area under the writer lock.
    fn modify<F>(&self, update: F) -> Result<()>
    where
        F: FnOnce(&mut StorageArea),
    {
        fs::create_dir_all(&self.root).map_err(map_io(&self.root))?;

        let lock_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(map_io(&lock_path))?;

        lock_file.lock_exclusive().map_err(map_io(&lock_path))?;

        let result = self.read_area_for_write().and_then(|mut area| {
            update(&mut area);
            self.write_area(&area)
        });

        lock_file.unlock().map_err(map_io(&lock_path))?;

        result
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut area = self.read_area()?;
        Ok(area.remove(key))
    }

    #[instrument(skip(self, value), fields(root = %self.root.display(), bytes = value.len()))]
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.modify(|area| {
            area.insert(key.to_string(), value.to_string());
        })?;
        debug!("Stored value");
        Ok(())
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn remove(&self, key: &str) -> Result<()> {
        if !self.area_path().exists() {
            return Ok(());
        }

        self.modify(|area| {
            area.remove(key);
        })?;
        debug!("Removed value");
        Ok(())
    }
}
