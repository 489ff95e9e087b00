//! Where the search history lives and how the view is assembled.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use directories::ProjectDirs;

use libquality_core::{ApiUrl, RepositorySearchView};
use libquality_file::FileStore;
use libquality_http::HttpResolver;

/// The search view as wired up by the CLI.
pub type CliView = RepositorySearchView<HttpResolver, FileStore>;

/// Settings shared by every subcommand.
#[derive(Debug, Clone)]
pub struct Context {
    api: String,
    data_dir: Option<PathBuf>,
}

impl Context {
    pub fn new(api: String, data_dir: Option<PathBuf>) -> Self {
        Self { api, data_dir }
    }

    /// Resolve the data directory, creating it if needed.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let dir = match &self.data_dir {
            Some(dir) => dir.clone(),
            None => ProjectDirs::from("", "", "libquality")
                .context("Could not determine data directory")?
                .data_dir()
                .to_path_buf(),
        };

        fs::create_dir_all(&dir).context("Failed to create data directory")?;

        Ok(dir)
    }

    /// Open the storage area holding the history.
    pub fn open_store(&self) -> Result<FileStore> {
        let store = FileStore::new(self.data_dir()?);
        tracing::debug!(root = %store.root().display(), "Opening search history");
        Ok(store)
    }

    /// Build the search view, hydrating the history from disk.
    pub fn open_view(&self) -> Result<CliView> {
        let api = ApiUrl::new(&self.api).context("Invalid API URL")?;
        let resolver = HttpResolver::new(api).context("Failed to create HTTP client")?;

        Ok(RepositorySearchView::initialize(resolver, self.open_store()?))
    }
}
