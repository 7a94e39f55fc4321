//! Storage Medium
//!
//! Durable key-value medium the item store persists into.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::StoreResult;

/// Synchronous string key-value storage (browser localStorage or memory)
pub trait StorageMedium {
    /// Read the value under `key`, `None` when absent or unreadable
    fn read(&self, key: &str) -> Option<String>;

    /// Overwrite the value under `key`
    fn write(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<M: StorageMedium + ?Sized> StorageMedium for Box<M> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).write(key, value)
    }
}

/// In-memory medium
///
/// Clones share the same entries, so a test can keep a handle and inspect
/// what the store wrote. Also used when the browser denies storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryMedium {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryMedium {
    pub fn new() -> Self {
        Self::default()
    }

    /// Medium pre-seeded with one entry (does not count as a write)
    pub fn with_entry(key: &str, value: &str) -> Self {
        let medium = Self::new();
        medium.entries.borrow_mut().insert(key.to_string(), value.to_string());
        medium
    }

    /// Number of writes performed so far
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageMedium for MemoryMedium {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
