use std::str::FromStr;

/// Read-status filter applied by the article query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Read,
    Unread,
    Favorites,
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StatusFilter::All),
            "read" => Ok(StatusFilter::Read),
            "unread" => Ok(StatusFilter::Unread),
            "favorites" => Ok(StatusFilter::Favorites),
            other => Err(format!("Unknown status filter: {}", other)),
        }
    }
}

/// Ordering applied to the query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Newest,
    Oldest,
    TitleAsc,
    TitleDesc,
}

impl FromStr for SortMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortMode::Newest),
            "oldest" => Ok(SortMode::Oldest),
            // "title" is the legacy token for ascending title sort
            "title" | "title-asc" => Ok(SortMode::TitleAsc),
            "title-desc" => Ok(SortMode::TitleDesc),
            other => Err(format!("Unknown sort mode: {}", other)),
        }
    }
}

/// User-controlled query parameters. Not persisted across sessions.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Case-insensitive substring matched against title, url, and tags.
    pub search_text: String,
    pub status: StatusFilter,
    /// Exact-match tag selection, if any.
    pub selected_tag: Option<String>,
    pub sort: SortMode,
}
