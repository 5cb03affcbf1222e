//! Bookmarky persistence seam.
//!
//! The store persists its entire collection to a single key-value slot. The
//! [`StorageSlot`] trait is the narrow read/write interface over that slot, so
//! the store can be backed by any key-value persistence implementation.

pub mod file;
pub mod memory;

pub use file::FileSlot;
pub use memory::MemorySlot;

use crate::types::errors::StoreError;

/// Narrow read/write interface over a single persisted slot.
pub trait StorageSlot {
    /// Reads the slot contents. `None` means nothing has been persisted yet.
    fn read(&self) -> Result<Option<String>, StoreError>;

    /// Overwrites the slot with the given contents. The new contents must
    /// become visible as a whole — a reader never observes a partial write.
    fn write(&mut self, contents: &str) -> Result<(), StoreError>;
}
