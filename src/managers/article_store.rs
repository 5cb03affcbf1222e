//! Article Store for Bookmarky.
//!
//! Implements `ArticleStoreTrait` — the single source of truth for the article
//! collection and its durability. The full collection is persisted as a JSON
//! array to a [`StorageSlot`] after every mutation.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::storage::StorageSlot;
use crate::types::article::{parse_tags, Article, ArticleDraft, ArticleRecord};
use crate::types::errors::StoreError;

/// Trait defining article store operations.
pub trait ArticleStoreTrait {
    /// Loads the collection from the persisted slot. Returns the article count.
    fn load(&mut self) -> Result<usize, StoreError>;
    /// Persists defaults for fields absent in legacy records. Returns the
    /// number of records fixed; idempotent after the first call per load.
    fn backfill(&mut self) -> Result<usize, StoreError>;
    /// Serializes the full collection and overwrites the persisted slot.
    fn save(&mut self) -> Result<(), StoreError>;
    fn add(&mut self, draft: &ArticleDraft) -> Result<Article, StoreError>;
    fn update(&mut self, id: &str, draft: &ArticleDraft) -> Result<Article, StoreError>;
    /// Removes the article with the given ID. Returns whether one was removed;
    /// an unknown ID is a no-op, not an error.
    fn remove(&mut self, id: &str) -> Result<bool, StoreError>;
    /// Removes every read article. Returns the count removed.
    fn remove_all_read(&mut self) -> Result<usize, StoreError>;
    /// Flips the read flag. Returns whether the article was found.
    fn toggle_read(&mut self, id: &str) -> Result<bool, StoreError>;
    /// Flips the favorite flag. Returns whether the article was found.
    fn toggle_favorite(&mut self, id: &str) -> Result<bool, StoreError>;
    /// Returns an existing article with exactly this URL, if any.
    fn find_duplicate_by_url(&self, url: &str) -> Option<&Article>;
    /// Appends candidates whose URL is not already present. Returns the count
    /// actually added.
    fn import_merge(&mut self, candidates: Vec<ArticleRecord>) -> Result<usize, StoreError>;
    /// Pretty-printed JSON array of the full collection, for external saving.
    fn export_snapshot(&self) -> Result<String, StoreError>;
    /// Read view of the collection, most recently created first.
    fn articles(&self) -> &[Article];
}

/// Article store backed by a storage slot.
pub struct ArticleStore<S: StorageSlot> {
    slot: S,
    articles: Vec<Article>,
    /// Legacy records found by the last `load` that still owe a persisted fix.
    pending_backfill: usize,
}

impl<S: StorageSlot> ArticleStore<S> {
    /// Creates an empty store over the given slot. Call `load` to populate it.
    pub fn new(slot: S) -> Self {
        Self {
            slot,
            articles: Vec::new(),
            pending_backfill: 0,
        }
    }

    /// Returns the underlying slot.
    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Current UTC time as an ISO 8601 string with millisecond precision.
    fn now() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn find_index(&self, id: &str) -> Option<usize> {
        self.articles.iter().position(|a| a.id == id)
    }

    fn validate(draft: &ArticleDraft) -> Result<(), StoreError> {
        if draft.title.trim().is_empty() {
            return Err(StoreError::Validation("Title must not be empty".to_string()));
        }
        if draft.url.trim().is_empty() {
            return Err(StoreError::Validation("URL must not be empty".to_string()));
        }
        Ok(())
    }
}

impl<S: StorageSlot> ArticleStoreTrait for ArticleStore<S> {
    /// Loads the collection from the slot.
    ///
    /// An absent slot starts the collection empty. Malformed or non-array
    /// contents fail with `CorruptState`; the caller may treat that as "start
    /// empty" or surface it. Records missing `isFavorite` are given `false` in
    /// memory and counted for the next `backfill` call.
    fn load(&mut self) -> Result<usize, StoreError> {
        let Some(raw) = self.slot.read()? else {
            self.articles = Vec::new();
            self.pending_backfill = 0;
            return Ok(0);
        };

        let records: Vec<ArticleRecord> = serde_json::from_str(&raw)
            .map_err(|e| StoreError::CorruptState(format!("Failed to parse slot contents: {}", e)))?;

        let mut backfilled = 0;
        self.articles = records
            .into_iter()
            .map(|record| {
                let (article, was_backfilled) = record.into_article();
                if was_backfilled {
                    backfilled += 1;
                }
                article
            })
            .collect();
        self.pending_backfill = backfilled;

        Ok(self.articles.len())
    }

    /// Persists the in-memory defaults applied to legacy records during `load`.
    ///
    /// Writes at most once per load, no matter how many records were fixed;
    /// calling it again produces no further writes.
    fn backfill(&mut self) -> Result<usize, StoreError> {
        if self.pending_backfill == 0 {
            return Ok(0);
        }
        self.save()?;
        Ok(std::mem::take(&mut self.pending_backfill))
    }

    fn save(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.articles)
            .map_err(|e| StoreError::Persistence(format!("Failed to serialize articles: {}", e)))?;
        self.slot.write(&json)
    }

    /// Creates a new article from the draft and prepends it to the collection.
    ///
    /// Assigns a fresh ID and equal creation/update timestamps; the read and
    /// favorite flags default to false.
    fn add(&mut self, draft: &ArticleDraft) -> Result<Article, StoreError> {
        Self::validate(draft)?;

        let now = Self::now();
        let article = Article {
            id: Uuid::new_v4().to_string(),
            title: draft.title.trim().to_string(),
            url: draft.url.trim().to_string(),
            tags: parse_tags(&draft.tags),
            notes: draft.notes.trim().to_string(),
            is_read: false,
            is_favorite: false,
            created_at: now.clone(),
            updated_at: now,
        };

        self.articles.insert(0, article.clone());
        self.save()?;
        Ok(article)
    }

    /// Overwrites the editable fields of an existing article.
    ///
    /// Preserves id, createdAt, and both flags; refreshes updatedAt. The draft
    /// is validated before the id is even looked up, so a rejected edit leaves
    /// the article unchanged, and a blank draft for an unknown id reports
    /// `Validation` rather than `NotFound`.
    fn update(&mut self, id: &str, draft: &ArticleDraft) -> Result<Article, StoreError> {
        Self::validate(draft)?;

        let index = self
            .find_index(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let article = &mut self.articles[index];
        article.title = draft.title.trim().to_string();
        article.url = draft.url.trim().to_string();
        article.tags = parse_tags(&draft.tags);
        article.notes = draft.notes.trim().to_string();
        article.updated_at = Self::now();
        let updated = article.clone();

        self.save()?;
        Ok(updated)
    }

    fn remove(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(index) = self.find_index(id) else {
            return Ok(false);
        };
        self.articles.remove(index);
        self.save()?;
        Ok(true)
    }

    /// Removes every article marked read. Persists only if any were removed,
    /// so calling this on a collection with no read articles writes nothing.
    fn remove_all_read(&mut self) -> Result<usize, StoreError> {
        let before = self.articles.len();
        self.articles.retain(|a| !a.is_read);
        let removed = before - self.articles.len();
        if removed > 0 {
            self.save()?;
        }
        Ok(removed)
    }

    fn toggle_read(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(index) = self.find_index(id) else {
            return Ok(false);
        };
        self.articles[index].is_read = !self.articles[index].is_read;
        self.save()?;
        Ok(true)
    }

    fn toggle_favorite(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(index) = self.find_index(id) else {
            return Ok(false);
        };
        self.articles[index].is_favorite = !self.articles[index].is_favorite;
        self.save()?;
        Ok(true)
    }

    fn find_duplicate_by_url(&self, url: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.url == url)
    }

    /// Merges externally supplied records into the collection.
    ///
    /// A candidate is appended only if its URL is not already present —
    /// including URLs appended earlier in the same batch. Missing favorite
    /// flags are backfilled to false. Persists only if anything was added.
    fn import_merge(&mut self, candidates: Vec<ArticleRecord>) -> Result<usize, StoreError> {
        let mut added = 0;
        for record in candidates {
            if self.articles.iter().any(|a| a.url == record.url) {
                continue;
            }
            let (article, _) = record.into_article();
            self.articles.push(article);
            added += 1;
        }
        if added > 0 {
            self.save()?;
        }
        Ok(added)
    }

    fn export_snapshot(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(&self.articles)
            .map_err(|e| StoreError::Persistence(format!("Failed to serialize articles: {}", e)))
    }

    fn articles(&self) -> &[Article] {
        &self.articles
    }
}

/// Parses an import file into candidate records for [`ArticleStoreTrait::import_merge`].
///
/// The document is accepted only if its top-level value is an array.
pub fn parse_import(json: &str) -> Result<Vec<ArticleRecord>, StoreError> {
    serde_json::from_str(json)
        .map_err(|e| StoreError::CorruptState(format!("Invalid import file: {}", e)))
}

/// Suggested filename for an export snapshot: `bookmarky-export-<date>.json`.
pub fn export_file_name() -> String {
    format!("bookmarky-export-{}.json", Utc::now().format("%Y-%m-%d"))
}
