use crate::storage::StorageSlot;
use crate::types::errors::StoreError;

/// In-memory storage slot for tests and demos.
///
/// Counts writes so callers can assert on persistence behavior (e.g. that a
/// backfill triggers exactly one write).
#[derive(Debug, Default)]
pub struct MemorySlot {
    contents: Option<String>,
    writes: usize,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot pre-seeded with persisted contents, as if a previous
    /// session had written them.
    pub fn with_contents(contents: &str) -> Self {
        Self {
            contents: Some(contents.to_string()),
            writes: 0,
        }
    }

    /// Number of writes performed since construction.
    pub fn write_count(&self) -> usize {
        self.writes
    }

    /// Raw slot contents, if any.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<(), StoreError> {
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }
}
