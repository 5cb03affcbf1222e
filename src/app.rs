//! App Core for Bookmarky.
//!
//! Central struct owning the single article store instance and the current
//! view state. The entry point constructs it once and hands it to whatever
//! view layer is in use; there are no ambient globals.

use crate::managers::article_store::{ArticleStore, ArticleStoreTrait};
use crate::services::article_query::{self, reading_stats, tag_counts, ReadingStats};
use crate::storage::StorageSlot;
use crate::types::article::Article;
use crate::types::errors::StoreError;
use crate::types::view::{SortMode, StatusFilter, ViewState};

/// Application core: one store, one set of view parameters.
pub struct App<S: StorageSlot> {
    pub store: ArticleStore<S>,
    view: ViewState,
}

impl<S: StorageSlot> App<S> {
    /// Creates the app over the given slot, loading the persisted collection
    /// and running the one-time backfill pass for legacy records.
    pub fn new(slot: S) -> Result<Self, StoreError> {
        let mut store = ArticleStore::new(slot);
        store.load()?;
        store.backfill()?;
        Ok(Self {
            store,
            view: ViewState::default(),
        })
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn set_search_text(&mut self, text: &str) {
        self.view.search_text = text.to_string();
    }

    pub fn set_status_filter(&mut self, status: StatusFilter) {
        self.view.status = status;
    }

    pub fn set_sort_mode(&mut self, sort: SortMode) {
        self.view.sort = sort;
    }

    /// Toggles tag selection: selecting the already-selected tag clears it.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.view.selected_tag.as_deref() == Some(tag) {
            self.view.selected_tag = None;
        } else {
            self.view.selected_tag = Some(tag.to_string());
        }
    }

    /// The ordered display list for the current view state.
    pub fn visible_articles(&self) -> Vec<Article> {
        article_query::run(self.store.articles(), &self.view)
    }

    /// Header statistics over the whole collection, ignoring filters.
    pub fn stats(&self) -> ReadingStats {
        reading_stats(self.store.articles())
    }

    /// Tag usage counts for the tag cloud, most used first.
    pub fn tag_cloud(&self) -> Vec<(String, usize)> {
        tag_counts(self.store.articles())
    }
}
