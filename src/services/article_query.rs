//! Article query for Bookmarky.
//!
//! A pure function from (collection, view state) to the ordered display list.
//! No side effects, no persistence, and no error path: with closed filter and
//! sort enums there is no invalid view state to reject.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::types::article::Article;
use crate::types::view::{SortMode, StatusFilter, ViewState};

/// Runs the filter and sort over the collection, returning display copies.
///
/// An article passes when it matches the search text (case-insensitive
/// substring of title, url, or any tag), the status filter, and the selected
/// tag (exact match), all at once. The result is then stably sorted by the
/// view's sort mode, so ties keep their original relative order.
pub fn run(articles: &[Article], view: &ViewState) -> Vec<Article> {
    let needle = view.search_text.to_lowercase();

    let mut shown: Vec<Article> = articles
        .iter()
        .filter(|a| matches_search(a, &needle) && matches_status(a, view.status) && matches_tag(a, view))
        .cloned()
        .collect();

    sort_articles(&mut shown, view.sort);
    shown
}

fn matches_search(article: &Article, needle: &str) -> bool {
    needle.is_empty()
        || article.title.to_lowercase().contains(needle)
        || article.url.to_lowercase().contains(needle)
        || article.tags.iter().any(|t| t.to_lowercase().contains(needle))
}

fn matches_status(article: &Article, status: StatusFilter) -> bool {
    match status {
        StatusFilter::All => true,
        StatusFilter::Read => article.is_read,
        StatusFilter::Unread => !article.is_read,
        StatusFilter::Favorites => article.is_favorite,
    }
}

fn matches_tag(article: &Article, view: &ViewState) -> bool {
    match &view.selected_tag {
        None => true,
        Some(tag) => article.tags.iter().any(|t| t == tag),
    }
}

/// Parses a `createdAt` value: RFC 3339 first, bare `YYYY-MM-DD` as fallback.
fn parse_created(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    value
        .parse::<NaiveDate>()
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Compares two `createdAt` keys. Unparseable values order after all
/// parseable ones regardless of sort direction, never scrambling the rest.
fn cmp_created(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>, descending: bool) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => {
            if descending {
                y.cmp(&x)
            } else {
                x.cmp(&y)
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn sort_articles(articles: &mut [Article], mode: SortMode) {
    match mode {
        SortMode::Newest => articles.sort_by(|a, b| {
            cmp_created(parse_created(&a.created_at), parse_created(&b.created_at), true)
        }),
        SortMode::Oldest => articles.sort_by(|a, b| {
            cmp_created(parse_created(&a.created_at), parse_created(&b.created_at), false)
        }),
        SortMode::TitleAsc => {
            articles.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
        SortMode::TitleDesc => {
            articles.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()))
        }
    }
}

/// Aggregate reading statistics for the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingStats {
    pub total: usize,
    pub read: usize,
    pub unread: usize,
    /// Share of read articles, rounded to the nearest percent. 0 when empty.
    pub progress_percent: u32,
}

pub fn reading_stats(articles: &[Article]) -> ReadingStats {
    let total = articles.len();
    let read = articles.iter().filter(|a| a.is_read).count();
    let progress_percent = if total > 0 {
        (read as f64 / total as f64 * 100.0).round() as u32
    } else {
        0
    };
    ReadingStats {
        total,
        read,
        unread: total - read,
        progress_percent,
    }
}

/// Tag usage counts across the collection, most used first.
///
/// Ties are broken alphabetically so the output is deterministic. The view
/// layer decides how many entries to display.
pub fn tag_counts(articles: &[Article]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for article in articles {
        for tag in &article.tags {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut sorted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect();
    sorted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    sorted
}
