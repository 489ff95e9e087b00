//! Repository resolution trait.

use async_trait::async_trait;

use crate::Result;
use crate::types::RepositorySummary;

/// A service that maps an `owner/repo` string to its summary.
#[async_trait]
pub trait RepositoryResolver: Send + Sync {
    /// Resolve a repository name.
    ///
    /// `repo_name` is passed through exactly as the user typed it.
    async fn resolve(&self, repo_name: &str) -> Result<RepositorySummary>;
}

#[async_trait]
impl<T: RepositoryResolver + ?Sized> RepositoryResolver for std::sync::Arc<T> {
    async fn resolve(&self, repo_name: &str) -> Result<RepositorySummary> {
        (**self).resolve(repo_name).await
    }
}
