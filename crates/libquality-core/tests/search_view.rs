//! Search view behaviour against a scripted resolver and an in-memory store.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use libquality_core::error::{Error, ProtocolError, TransportError};
use libquality_core::{
    KeyValueStore, MemoryStore, REPOSITORIES_KEY, RepositoryList, RepositoryResolver,
    RepositorySearchView, RepositorySummary, SearchError,
};

/// Resolver that replays canned outcomes and records every request.
#[derive(Default)]
struct ScriptedResolver {
    outcomes: Mutex<VecDeque<libquality_core::Result<RepositorySummary>>>,
    requests: Mutex<Vec<String>>,
}

impl ScriptedResolver {
    fn new() -> Self {
        Self::default()
    }

    fn then(self, outcome: libquality_core::Result<RepositorySummary>) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl RepositoryResolver for ScriptedResolver {
    async fn resolve(&self, repo_name: &str) -> libquality_core::Result<RepositorySummary> {
        self.requests.lock().unwrap().push(repo_name.to_string());
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected resolve call")
    }
}

fn summary(full_name: &str, language: &str) -> RepositorySummary {
    RepositorySummary {
        full_name: full_name.to_string(),
        owner_avatar_url: format!("https://avatars.githubusercontent.com/{}", full_name),
        language: language.to_string(),
        html_url: format!("https://github.com/{}", full_name),
    }
}

fn not_found() -> Error {
    Error::Protocol(ProtocolError::new(
        404,
        Some("Repository not found".to_string()),
    ))
}

fn stored_list(store: &MemoryStore) -> RepositoryList {
    let json = store.get(REPOSITORIES_KEY).unwrap().expect("history not persisted");
    RepositoryList::from_json(&json).unwrap()
}

#[test]
fn empty_storage_starts_with_empty_list() {
    let view = RepositorySearchView::initialize(ScriptedResolver::new(), MemoryStore::new());
    assert!(view.repositories().is_empty());
}

#[test]
fn stored_history_is_hydrated() {
    let store = MemoryStore::with_entry(
        REPOSITORIES_KEY,
        r#"[{"fullName":"facebook/react","ownerAvatarUrl":"u","language":"JavaScript","htmlURL":"h"}]"#,
    );

    let view = RepositorySearchView::initialize(ScriptedResolver::new(), store);

    let expected = RepositorySummary {
        full_name: "facebook/react".to_string(),
        owner_avatar_url: "u".to_string(),
        language: "JavaScript".to_string(),
        html_url: "h".to_string(),
    };
    assert_eq!(view.repositories().as_slice(), [expected]);
}

#[test]
fn hydration_writes_the_same_history_back() {
    let json = r#"[{"fullName":"facebook/react","ownerAvatarUrl":"u","language":"JavaScript","htmlURL":"h"}]"#;
    let store = MemoryStore::with_entry(REPOSITORIES_KEY, json);

    let _view = RepositorySearchView::initialize(ScriptedResolver::new(), store.clone());

    assert_eq!(store.write_count(), 1);
    assert_eq!(store.get(REPOSITORIES_KEY).unwrap().as_deref(), Some(json));
}

#[tokio::test]
async fn empty_submission_shows_error_without_request() {
    let store = MemoryStore::new();
    let mut view = RepositorySearchView::initialize(ScriptedResolver::new(), store.clone());
    let writes_before = store.write_count();

    let result = view.submit_query("").await;

    assert_eq!(result, Err(SearchError::EmptyInput));
    assert_eq!(view.error_message(), "Type a OWNER/REPOSITORY");
    assert!(view.repositories().is_empty());
    assert_eq!(store.write_count(), writes_before);
}

#[tokio::test]
async fn successful_submission_appends_and_resets_field() {
    let react = summary("facebook/react", "JavaScript");
    let resolver = ScriptedResolver::new().then(Ok(react.clone()));
    let store = MemoryStore::new();
    let mut view = RepositorySearchView::initialize(resolver, store.clone());

    let added = view.submit_query("facebook/react").await.unwrap();

    assert_eq!(added, react);
    assert_eq!(view.repositories().as_slice(), [react.clone()]);
    assert_eq!(view.query(), "");
    assert_eq!(view.input_error(), None);
    assert_eq!(stored_list(&store).as_slice(), [react]);
}

#[tokio::test]
async fn not_found_leaves_history_and_query() {
    let resolver = ScriptedResolver::new().then(Err(not_found()));
    let store = MemoryStore::new();
    let mut view = RepositorySearchView::initialize(resolver, store.clone());
    let writes_before = store.write_count();

    let result = view.submit_query("doesnotexist/repo").await;

    assert_eq!(result, Err(SearchError::ResolutionFailure));
    assert_eq!(view.error_message(), "Sorry... We can't find this repository.");
    assert!(view.repositories().is_empty());
    assert_eq!(view.query(), "doesnotexist/repo");
    assert_eq!(store.write_count(), writes_before);
}

#[tokio::test]
async fn transport_failure_uses_the_same_message() {
    let resolver = ScriptedResolver::new().then(Err(Error::Transport(
        TransportError::Connection {
            message: "connection refused".to_string(),
        },
    )));
    let mut view = RepositorySearchView::initialize(resolver, MemoryStore::new());

    let _ = view.submit_query("facebook/react").await;

    assert_eq!(view.input_error(), Some(SearchError::ResolutionFailure));
    assert_eq!(view.error_message(), "Sorry... We can't find this repository.");
}

#[tokio::test]
async fn success_after_error_clears_it() {
    let vue = summary("vuejs/vue", "TypeScript");
    let resolver = ScriptedResolver::new()
        .then(Err(not_found()))
        .then(Ok(vue.clone()));
    let mut view = RepositorySearchView::initialize(resolver, MemoryStore::new());

    assert!(view.submit_query("vuejs/vu").await.is_err());
    view.set_query("vuejs/vue");
    view.submit().await.unwrap();

    assert_eq!(view.error_message(), "");
    assert_eq!(view.repositories().as_slice(), [vue]);
}

#[tokio::test]
async fn empty_submission_after_failure_replaces_message() {
    let resolver = ScriptedResolver::new().then(Err(not_found()));
    let mut view = RepositorySearchView::initialize(resolver, MemoryStore::new());

    let _ = view.submit_query("nope/nope").await;
    let _ = view.submit_query("").await;

    assert_eq!(view.input_error(), Some(SearchError::EmptyInput));
}

#[tokio::test]
async fn duplicates_are_kept_in_order() {
    let react = summary("facebook/react", "JavaScript");
    let vue = summary("vuejs/vue", "TypeScript");
    let resolver = ScriptedResolver::new()
        .then(Ok(react.clone()))
        .then(Ok(vue.clone()))
        .then(Ok(react.clone()));
    let store = MemoryStore::new();
    let mut view = RepositorySearchView::initialize(resolver, store.clone());

    for name in ["facebook/react", "vuejs/vue", "facebook/react"] {
        view.submit_query(name).await.unwrap();
    }

    let expected = [react.clone(), vue, react];
    assert_eq!(view.repositories().as_slice(), expected);
    assert_eq!(stored_list(&store).as_slice(), expected);

    let titles: Vec<_> = view.render_list().into_iter().map(|c| c.title).collect();
    assert_eq!(titles, ["facebook/react", "vuejs/vue", "facebook/react"]);
}

#[tokio::test]
async fn query_is_sent_exactly_as_typed() {
    let resolver = std::sync::Arc::new(
        ScriptedResolver::new().then(Ok(summary("facebook/react", "JavaScript"))),
    );
    let mut view = RepositorySearchView::initialize(resolver.clone(), MemoryStore::new());

    view.submit_query(" facebook/react ").await.unwrap();

    assert_eq!(resolver.requests(), [" facebook/react "]);
}

#[tokio::test]
async fn history_survives_a_new_view() {
    let react = summary("facebook/react", "JavaScript");
    let store = MemoryStore::new();

    {
        let resolver = ScriptedResolver::new().then(Ok(react.clone()));
        let mut view = RepositorySearchView::initialize(resolver, store.clone());
        view.submit_query("facebook/react").await.unwrap();
    }

    let view = RepositorySearchView::initialize(ScriptedResolver::new(), store);
    assert_eq!(view.repositories().as_slice(), [react]);
}
