//! Unit tests for the article query: filtering, sorting, stats, tag counts.
//!
//! The query is a pure function, so every test builds a fixed collection and
//! asserts on the returned order directly.

use bookmarky::services::article_query::{reading_stats, run, tag_counts};
use bookmarky::types::article::Article;
use bookmarky::types::view::{SortMode, StatusFilter, ViewState};
use rstest::rstest;

/// Helper: an article with the fields the query cares about.
fn article(title: &str, url: &str, tags: &[&str], created_at: &str) -> Article {
    Article {
        id: format!("id-{}", title),
        title: title.to_string(),
        url: url.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        notes: String::new(),
        is_read: false,
        is_favorite: false,
        created_at: created_at.to_string(),
        updated_at: created_at.to_string(),
    }
}

fn titles(articles: &[Article]) -> Vec<&str> {
    articles.iter().map(|a| a.title.as_str()).collect()
}

// === filtering ===

#[test]
fn empty_collection_yields_empty_result() {
    assert!(run(&[], &ViewState::default()).is_empty());
}

#[test]
fn search_matches_title_url_and_tags_case_insensitively() {
    let collection = vec![
        article("Rust Book", "https://doc.rust-lang.org", &[], "2024-01-01"),
        article("Cooking", "https://food.example/RUSTIC-bread", &[], "2024-01-02"),
        article("Scripting Notes", "https://notes.example", &["python"], "2024-01-03"),
    ];

    let mut view = ViewState::default();
    view.search_text = "rust".to_string();
    assert_eq!(run(&collection, &view).len(), 2);

    // "py" matches only through the "python" tag
    view.search_text = "py".to_string();
    let result = run(&collection, &view);
    assert_eq!(titles(&result), vec!["Scripting Notes"]);
}

#[test]
fn empty_search_passes_everything() {
    let collection = vec![
        article("A", "https://a.example", &[], "2024-01-01"),
        article("B", "https://b.example", &[], "2024-01-02"),
    ];
    assert_eq!(run(&collection, &ViewState::default()).len(), 2);
}

#[test]
fn status_filter_selects_by_flags() {
    let mut read = article("Read", "https://r.example", &[], "2024-01-01");
    read.is_read = true;
    let mut favorite = article("Favorite", "https://f.example", &[], "2024-01-02");
    favorite.is_favorite = true;
    let plain = article("Plain", "https://p.example", &[], "2024-01-03");
    let collection = vec![read, favorite, plain];

    let mut view = ViewState::default();

    view.status = StatusFilter::Read;
    assert_eq!(titles(&run(&collection, &view)), vec!["Read"]);

    view.status = StatusFilter::Unread;
    assert_eq!(run(&collection, &view).len(), 2);

    view.status = StatusFilter::Favorites;
    assert_eq!(titles(&run(&collection, &view)), vec!["Favorite"]);

    view.status = StatusFilter::All;
    assert_eq!(run(&collection, &view).len(), 3);
}

#[test]
fn selected_tag_requires_an_exact_match() {
    let collection = vec![
        article("Tagged", "https://t.example", &["rust"], "2024-01-01"),
        article("Longer Tag", "https://l.example", &["rustlang"], "2024-01-02"),
    ];

    let mut view = ViewState::default();
    view.selected_tag = Some("rust".to_string());
    assert_eq!(titles(&run(&collection, &view)), vec!["Tagged"]);
}

#[test]
fn all_filter_dimensions_apply_together() {
    let mut matching = article("Rust Async", "https://a.example", &["rust"], "2024-01-01");
    matching.is_read = true;
    let mut wrong_status = article("Rust Sync", "https://s.example", &["rust"], "2024-01-02");
    wrong_status.is_read = false;
    let mut wrong_tag = article("Rust Web", "https://w.example", &["web"], "2024-01-03");
    wrong_tag.is_read = true;
    let collection = vec![matching, wrong_status, wrong_tag];

    let view = ViewState {
        search_text: "rust".to_string(),
        status: StatusFilter::Read,
        selected_tag: Some("rust".to_string()),
        sort: SortMode::Newest,
    };
    assert_eq!(titles(&run(&collection, &view)), vec!["Rust Async"]);
}

// === sorting ===

#[rstest]
#[case(SortMode::Newest, vec!["Mid", "Old", "Ancient"])]
#[case(SortMode::Oldest, vec!["Ancient", "Old", "Mid"])]
#[case(SortMode::TitleAsc, vec!["Ancient", "Mid", "Old"])]
#[case(SortMode::TitleDesc, vec!["Old", "Mid", "Ancient"])]
fn sort_modes_order_the_result(#[case] sort: SortMode, #[case] expected: Vec<&str>) {
    let collection = vec![
        article("Old", "https://o.example", &[], "2023-06-15T12:00:00.000Z"),
        article("Ancient", "https://a.example", &[], "2020-01-01T00:00:00.000Z"),
        article("Mid", "https://m.example", &[], "2024-02-01T09:30:00.000Z"),
    ];

    let view = ViewState {
        sort,
        ..ViewState::default()
    };
    assert_eq!(titles(&run(&collection, &view)), expected);
}

#[test]
fn title_sort_ignores_case() {
    let collection = vec![
        article("banana", "https://b.example", &[], "2024-01-01"),
        article("Apple", "https://a.example", &[], "2024-01-02"),
        article("cherry", "https://c.example", &[], "2024-01-03"),
    ];

    let view = ViewState {
        sort: SortMode::TitleAsc,
        ..ViewState::default()
    };
    assert_eq!(titles(&run(&collection, &view)), vec!["Apple", "banana", "cherry"]);
}

#[test]
fn bare_dates_are_parsed_for_date_sorts() {
    let collection = vec![
        article("A", "https://a.example", &[], "2024-01-01"),
        article("B", "https://b.example", &[], "2024-02-01"),
    ];

    let view = ViewState {
        sort: SortMode::Newest,
        ..ViewState::default()
    };
    assert_eq!(titles(&run(&collection, &view)), vec!["B", "A"]);
}

#[rstest]
#[case(SortMode::Newest)]
#[case(SortMode::Oldest)]
fn malformed_created_at_sorts_last_in_both_directions(#[case] sort: SortMode) {
    let collection = vec![
        article("Broken", "https://x.example", &[], "not a date"),
        article("Early", "https://e.example", &[], "2023-01-01"),
        article("Late", "https://l.example", &[], "2024-01-01"),
    ];

    let view = ViewState {
        sort,
        ..ViewState::default()
    };
    let result = run(&collection, &view);
    assert_eq!(result.last().unwrap().title, "Broken");
    assert_eq!(result.len(), 3);
}

#[test]
fn equal_timestamps_keep_original_relative_order() {
    let collection = vec![
        article("First", "https://1.example", &[], "2024-01-01T00:00:00.000Z"),
        article("Second", "https://2.example", &[], "2024-01-01T00:00:00.000Z"),
        article("Third", "https://3.example", &[], "2024-01-01T00:00:00.000Z"),
    ];

    let view = ViewState {
        sort: SortMode::Newest,
        ..ViewState::default()
    };
    assert_eq!(titles(&run(&collection, &view)), vec!["First", "Second", "Third"]);
}

#[test]
fn query_is_deterministic() {
    let collection = vec![
        article("B", "https://b.example", &["x"], "2024-02-01"),
        article("A", "https://a.example", &["y"], "2024-01-01"),
    ];
    let view = ViewState {
        search_text: "example".to_string(),
        sort: SortMode::TitleDesc,
        ..ViewState::default()
    };

    assert_eq!(run(&collection, &view), run(&collection, &view));
}

// === worked examples ===

#[test]
fn unread_newest_example() {
    let mut a = article("A", "https://a.example", &[], "2024-01-01");
    a.is_read = false;
    let mut b = article("B", "https://b.example", &[], "2024-02-01");
    b.is_read = true;
    let collection = vec![a, b];

    let view = ViewState {
        status: StatusFilter::Unread,
        sort: SortMode::Newest,
        ..ViewState::default()
    };
    assert_eq!(titles(&run(&collection, &view)), vec!["A"]);

    let view = ViewState {
        status: StatusFilter::All,
        sort: SortMode::TitleDesc,
        ..ViewState::default()
    };
    assert_eq!(titles(&run(&collection, &view)), vec!["B", "A"]);
}

// === stats and tag counts ===

#[test]
fn reading_stats_counts_and_rounds_progress() {
    let mut collection = vec![
        article("A", "https://a.example", &[], "2024-01-01"),
        article("B", "https://b.example", &[], "2024-01-02"),
        article("C", "https://c.example", &[], "2024-01-03"),
    ];
    collection[0].is_read = true;

    let stats = reading_stats(&collection);
    assert_eq!(stats.total, 3);
    assert_eq!(stats.read, 1);
    assert_eq!(stats.unread, 2);
    // 1/3 rounds to 33
    assert_eq!(stats.progress_percent, 33);
}

#[test]
fn reading_stats_on_empty_collection_is_zero() {
    let stats = reading_stats(&[]);
    assert_eq!(stats.total, 0);
    assert_eq!(stats.progress_percent, 0);
}

#[test]
fn tag_counts_order_by_count_then_name() {
    let collection = vec![
        article("A", "https://a.example", &["rust", "web"], "2024-01-01"),
        article("B", "https://b.example", &["rust", "async"], "2024-01-02"),
        article("C", "https://c.example", &["web"], "2024-01-03"),
    ];

    assert_eq!(
        tag_counts(&collection),
        vec![
            ("rust".to_string(), 2),
            ("web".to_string(), 2),
            ("async".to_string(), 1),
        ]
    );
}

#[test]
fn tag_counts_count_duplicate_tags_within_one_article() {
    let collection = vec![article("A", "https://a.example", &["rust", "rust"], "2024-01-01")];
    assert_eq!(tag_counts(&collection), vec![("rust".to_string(), 2)]);
}
