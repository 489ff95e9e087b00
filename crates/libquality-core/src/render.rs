//! Projection of the search history into navigable cards.

use serde::Serialize;

use crate::types::RepositorySummary;

/// Route template of the detail view each card links to.
pub const DETAIL_ROUTE: &str = "/repository/:fullName";

/// Separator between language and URL in a card subtitle.
pub const SUBTITLE_SEPARATOR: &str = "  ||  ";

/// One rendered entry of the search history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryCard {
    /// Avatar image; its alt text is the title.
    pub avatar_url: String,
    /// Heading, the repository full name.
    pub title: String,
    /// `language  ||  htmlURL`.
    pub subtitle: String,
    /// Navigation target in the detail route.
    pub link: String,
}

impl RepositoryCard {
    pub fn new(repository: &RepositorySummary) -> Self {
        Self {
            avatar_url: repository.owner_avatar_url.clone(),
            title: repository.full_name.clone(),
            subtitle: format!(
                "{}{}{}",
                repository.language, SUBTITLE_SEPARATOR, repository.html_url
            ),
            link: detail_link(&repository.full_name),
        }
    }
}

/// Fill [`DETAIL_ROUTE`] for one repository.
///
/// The full name goes in unescaped, so `owner/repo` spans two path segments.
pub fn detail_link(full_name: &str) -> String {
    DETAIL_ROUTE.replace(":fullName", full_name)
}

/// Render every entry, oldest search first.
pub fn render_list<'a, I>(repositories: I) -> Vec<RepositoryCard>
where
    I: IntoIterator<Item = &'a RepositorySummary>,
{
    repositories.into_iter().map(RepositoryCard::new).collect()
}
