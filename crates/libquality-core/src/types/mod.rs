//! Core LibQuality types.

mod api_url;
mod repository;

pub use api_url::ApiUrl;
pub use repository::{RepositoryList, RepositorySummary};
