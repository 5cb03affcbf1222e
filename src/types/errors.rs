use std::fmt;

/// Errors surfaced by the article store.
#[derive(Debug)]
pub enum StoreError {
    /// Article with the given ID was not found.
    NotFound(String),
    /// The persisted slot contains non-array or non-article-shaped data.
    CorruptState(String),
    /// Reading from or writing to the storage slot failed.
    Persistence(String),
    /// A required field was empty or otherwise invalid.
    Validation(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Article not found: {}", id),
            StoreError::CorruptState(msg) => write!(f, "Corrupt persisted state: {}", msg),
            StoreError::Persistence(msg) => write!(f, "Persistence error: {}", msg),
            StoreError::Validation(msg) => write!(f, "Validation failed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}
