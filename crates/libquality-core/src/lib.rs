//! libquality-core - Types, traits and the repository search view.
//!
//! The view in this crate holds no I/O of its own. Network access flows through
//! a [`RepositoryResolver`] and persistence through a [`KeyValueStore`], both
//! injected at construction.
//!
//! # Example
//!
//! ```no_run
//! use libquality_core::{MemoryStore, RepositorySearchView, RepositoryResolver};
//!
//! # async fn example(resolver: impl RepositoryResolver) {
//! let store = MemoryStore::new();
//! let mut view = RepositorySearchView::initialize(resolver, store);
//!
//! view.set_query("facebook/react");
//! let _ = view.submit().await;
//!
//! for card in view.render_list() {
//!     println!("{} -> {}", card.title, card.link);
//! }
//! # }
//! ```

pub mod error;
pub mod memory;
pub mod render;
pub mod traits;
pub mod types;
pub mod view;

pub use error::Error;
pub use memory::MemoryStore;
pub use render::{RepositoryCard, render_list};
pub use traits::{KeyValueStore, RepositoryResolver};
pub use types::{ApiUrl, RepositoryList, RepositorySummary};
pub use view::{REPOSITORIES_KEY, RepositorySearchView, SearchError, load_history};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
