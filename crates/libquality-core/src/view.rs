//! The repository search view.
//!
//! [`RepositorySearchView`] owns the search history and the state of the
//! query field. It hydrates the history from a [`KeyValueStore`] when created,
//! writes the whole history back after every change, and asks a
//! [`RepositoryResolver`] for each submitted name.

use std::fmt;

use tracing::{debug, info, instrument, warn};

use crate::render::{RepositoryCard, render_list};
use crate::traits::{KeyValueStore, RepositoryResolver};
use crate::types::{RepositoryList, RepositorySummary};

/// Storage key holding the search history.
pub const REPOSITORIES_KEY: &str = "@LibQuality:repositories";

/// Application title shown above the search form.
pub const TITLE: &str = "LibQuality";

/// Tagline shown under the title.
pub const SUBTITLE: &str = "This is a simple tool to compare quality of diferent open source libraries available in GitHub";

/// Hint shown in the empty query field.
pub const PLACEHOLDER: &str = "Type repository name. Ex: facebook/react";

/// Label of the submit action.
pub const SUBMIT_LABEL: &str = "Search";

/// Errors surfaced in the view's inline error region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Submitted with nothing typed.
    EmptyInput,

    /// The resolution request failed, whatever the cause.
    ResolutionFailure,
}

impl SearchError {
    /// The fixed user-facing message.
    pub fn message(&self) -> &'static str {
        match self {
            SearchError::EmptyInput => "Type a OWNER/REPOSITORY",
            SearchError::ResolutionFailure => "Sorry... We can't find this repository.",
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for SearchError {}

/// Search form plus the list of previously searched repositories.
///
/// Submissions take `&mut self`, so a single view never has two resolution
/// requests in flight.
#[derive(Debug)]
pub struct RepositorySearchView<R, S> {
    resolver: R,
    store: S,
    repositories: RepositoryList,
    query: String,
    input_error: Option<SearchError>,
}

impl<R, S> RepositorySearchView<R, S>
where
    R: RepositoryResolver,
    S: KeyValueStore,
{
    /// Create the view, hydrating the history from `store`.
    ///
    /// A missing, unreadable or unparseable entry yields an empty history.
    /// The hydrated history is written straight back, the same as after any
    /// other change.
    pub fn initialize(resolver: R, store: S) -> Self {
        let repositories = load_history(&store);
        debug!(count = repositories.len(), "Hydrated search history");

        let view = Self {
            resolver,
            store,
            repositories,
            query: String::new(),
            input_error: None,
        };
        view.on_list_changed();
        view
    }

    /// The search history, oldest first.
    pub fn repositories(&self) -> &RepositoryList {
        &self.repositories
    }

    /// Current text of the query field.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the text of the query field.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The error currently shown, if any.
    pub fn input_error(&self) -> Option<SearchError> {
        self.input_error
    }

    /// The error region text; empty when no error is shown.
    pub fn error_message(&self) -> &'static str {
        self.input_error.map(|e| e.message()).unwrap_or("")
    }

    /// Type `query` into the field and submit it.
    pub async fn submit_query(
        &mut self,
        query: impl Into<String>,
    ) -> Result<RepositorySummary, SearchError> {
        self.set_query(query);
        self.submit().await
    }

    /// Submit the current query.
    ///
    /// An empty query fails without contacting the resolver. On success the
    /// resolved repository is appended to the history, the history is
    /// persisted, and both the query and the error are cleared. On failure
    /// the history and the query are left as they were.
    #[instrument(skip(self), fields(query = %self.query))]
    pub async fn submit(&mut self) -> Result<RepositorySummary, SearchError> {
        if self.query.is_empty() {
            self.input_error = Some(SearchError::EmptyInput);
            return Err(SearchError::EmptyInput);
        }

        match self.resolver.resolve(&self.query).await {
            Ok(repository) => {
                info!(full_name = %repository.full_name, "Repository added to history");
                self.repositories.push(repository.clone());
                self.on_list_changed();
                self.query.clear();
                self.input_error = None;
                Ok(repository)
            }
            Err(e) => {
                info!(error = %e, "Repository resolution failed");
                self.input_error = Some(SearchError::ResolutionFailure);
                Err(SearchError::ResolutionFailure)
            }
        }
    }

    /// Render the history as cards, oldest first.
    pub fn render_list(&self) -> Vec<RepositoryCard> {
        render_list(&self.repositories)
    }

    /// Mirror the whole history to the store.
    ///
    /// Failures are logged and otherwise ignored; the in-memory history stays
    /// authoritative for the rest of the session.
    fn on_list_changed(&self) {
        let json = match self.repositories.to_json() {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, "Failed to encode search history");
                return;
            }
        };

        match self.store.set(REPOSITORIES_KEY, &json) {
            Ok(()) => debug!(count = self.repositories.len(), "Persisted search history"),
            Err(e) => warn!(error = %e, "Failed to persist search history"),
        }
    }
}

/// Read the search history from `store` without writing anything back.
///
/// A missing, unreadable or unparseable entry yields an empty history.
pub fn load_history<S: KeyValueStore>(store: &S) -> RepositoryList {
    let stored = match store.get(REPOSITORIES_KEY) {
        Ok(Some(stored)) => stored,
        Ok(None) => return RepositoryList::new(),
        Err(e) => {
            warn!(error = %e, "Failed to read search history, starting empty");
            return RepositoryList::new();
        }
    };

    RepositoryList::from_json(&stored).unwrap_or_else(|e| {
        warn!(error = %e, "Stored search history is unreadable, starting empty");
        RepositoryList::new()
    })
}
