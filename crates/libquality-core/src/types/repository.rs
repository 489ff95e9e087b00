//! Repository summary and the persisted search history.

use serde::{Deserialize, Deserializer, Serialize};

use crate::Result;

/// Metadata for one searched repository, as returned by the resolution
/// service and as stored in the search history.
///
/// Field names on the wire are `fullName`, `ownerAvatarUrl`, `language` and
/// `htmlURL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    /// `owner/repo`.
    pub full_name: String,

    /// Avatar image URL of the owning user or organization.
    pub owner_avatar_url: String,

    /// Primary language label.
    ///
    /// Repositories without a detected language come back as `null`; that is
    /// read as an empty label.
    #[serde(deserialize_with = "null_as_empty")]
    pub language: String,

    /// Canonical web URL.
    #[serde(rename = "htmlURL")]
    pub html_url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Ordered search history.
///
/// Insertion order is preserved and duplicates are kept. Serializes as a
/// plain JSON array of [`RepositorySummary`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RepositoryList(Vec<RepositorySummary>);

impl RepositoryList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a list from its stored JSON form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode the list in its stored JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Append an entry after every existing one.
    pub fn push(&mut self, repository: RepositorySummary) {
        self.0.push(repository);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RepositorySummary> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[RepositorySummary] {
        &self.0
    }
}

impl From<Vec<RepositorySummary>> for RepositoryList {
    fn from(entries: Vec<RepositorySummary>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a RepositoryList {
    type Item = &'a RepositorySummary;
    type IntoIter = std::slice::Iter<'a, RepositorySummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn react() -> RepositorySummary {
        RepositorySummary {
            full_name: "facebook/react".to_string(),
            owner_avatar_url: "u".to_string(),
            language: "JavaScript".to_string(),
            html_url: "h".to_string(),
        }
    }

    #[test]
    fn parses_stored_list() {
        let json = r#"[{"fullName":"facebook/react","ownerAvatarUrl":"u","language":"JavaScript","htmlURL":"h"}]"#;
        let list = RepositoryList::from_json(json).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice()[0], react());
    }

    #[test]
    fn encodes_wire_field_names() {
        let list = RepositoryList::from(vec![react()]);
        assert_eq!(
            list.to_json().unwrap(),
            r#"[{"fullName":"facebook/react","ownerAvatarUrl":"u","language":"JavaScript","htmlURL":"h"}]"#
        );
    }

    #[test]
    fn stored_form_reloads_to_equal_list() {
        let mut list = RepositoryList::new();
        list.push(react());
        list.push(RepositorySummary {
            full_name: "rust-lang/rust".to_string(),
            owner_avatar_url: "https://avatars.githubusercontent.com/u/5430905".to_string(),
            language: "Rust".to_string(),
            html_url: "https://github.com/rust-lang/rust".to_string(),
        });
        list.push(react());

        let reloaded = RepositoryList::from_json(&list.to_json().unwrap()).unwrap();
        assert_eq!(reloaded, list);
        assert_eq!(reloaded.len(), 3);
    }

    #[test]
    fn null_language_reads_as_empty() {
        let json = r#"{"fullName":"a/b","ownerAvatarUrl":"u","language":null,"htmlURL":"h"}"#;
        let summary: RepositorySummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.language, "");
    }

    #[test]
    fn missing_field_is_rejected() {
        let json = r#"{"fullName":"a/b","ownerAvatarUrl":"u","language":"Go"}"#;
        assert!(serde_json::from_str::<RepositorySummary>(json).is_err());
    }

    #[test]
    fn non_array_is_rejected() {
        assert!(RepositoryList::from_json(r#"{"fullName":"a/b"}"#).is_err());
    }
}
