//! libquality-http - HTTP client for the repository resolution service.

mod client;
mod endpoints;
mod resolver;

pub use client::ApiClient;
pub use resolver::HttpResolver;
