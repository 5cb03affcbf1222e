use serde::{Deserialize, Serialize};

/// Represents a saved article: one bookmarked resource.
///
/// Serialized field names are the persisted layout — camelCase, matching the
/// JSON array stored in the slot and the export file byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub url: String,
    pub tags: Vec<String>,
    pub notes: String,
    pub is_read: bool,
    pub is_favorite: bool,
    /// ISO 8601, set once at creation.
    pub created_at: String,
    /// ISO 8601, refreshed on every edit.
    pub updated_at: String,
}

/// Wire form of an article, as read from the persisted slot or an import file.
///
/// `isFavorite` stays an `Option` so a record persisted before favorites
/// existed is distinguishable from an explicit `false`; the backfill pass
/// needs that distinction to decide whether a write is due.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub is_read: bool,
    pub is_favorite: Option<bool>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl ArticleRecord {
    /// Converts the wire form into an in-memory article.
    ///
    /// Returns the article and whether `isFavorite` had to be backfilled.
    pub fn into_article(self) -> (Article, bool) {
        let backfilled = self.is_favorite.is_none();
        let article = Article {
            id: self.id,
            title: self.title,
            url: self.url,
            tags: self.tags,
            notes: self.notes,
            is_read: self.is_read,
            is_favorite: self.is_favorite.unwrap_or(false),
            created_at: self.created_at,
            updated_at: self.updated_at,
        };
        (article, backfilled)
    }
}

/// User-supplied fields for creating or editing an article.
///
/// `tags` is the raw comma-separated input string; see [`parse_tags`].
#[derive(Debug, Clone, Default)]
pub struct ArticleDraft {
    pub title: String,
    pub url: String,
    pub tags: String,
    pub notes: String,
}

impl ArticleDraft {
    pub fn new(title: &str, url: &str, tags: &str, notes: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            tags: tags.to_string(),
            notes: notes.to_string(),
        }
    }
}

/// Splits a comma-separated tag string into individual tags.
///
/// Each tag is trimmed and empty entries are dropped. Duplicates are kept —
/// deduplication is not part of the contract.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
