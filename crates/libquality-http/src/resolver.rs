//! Network-backed repository resolver.

use async_trait::async_trait;
use tracing::{debug, instrument};

use libquality_core::{ApiUrl, RepositoryResolver, RepositorySummary, Result};

use crate::client::ApiClient;
use crate::endpoints::{REPOSITORIES, ResolveRepositoryRequest, ResolveRepositoryResponse};

/// [`RepositoryResolver`] that asks the LibQuality backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpResolver {
    client: ApiClient,
}

impl HttpResolver {
    /// Create a resolver for the given API base URL.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(api)?,
        })
    }
}

#[async_trait]
impl RepositoryResolver for HttpResolver {
    #[instrument(skip(self), fields(api = %self.client.api()))]
    async fn resolve(&self, repo_name: &str) -> Result<RepositorySummary> {
        debug!("Resolving repository");

        let request = ResolveRepositoryRequest { repo_name };
        let response: ResolveRepositoryResponse = self.client.post(REPOSITORIES, &request).await?;

        Ok(response.repository)
    }
}
