//! Request and response bodies of the resolution service.

use serde::{Deserialize, Serialize};

use libquality_core::RepositorySummary;

/// Path of the resolution endpoint, relative to the API base.
pub(crate) const REPOSITORIES: &str = "repositories";

/// Request body for `POST /repositories`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResolveRepositoryRequest<'a> {
    pub repo_name: &'a str,
}

/// Response from `POST /repositories`.
#[derive(Debug, Deserialize)]
pub(crate) struct ResolveRepositoryResponse {
    pub repository: RepositorySummary,
}

/// Error body the service may send with a non-2xx status.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
