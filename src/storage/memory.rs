// src/storage/memory.rs

//! In-process frontier store.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::FrontierEntry;
use crate::storage::FrontierStore;

/// Mutex-guarded in-memory frontier, for tests and local wiring.
///
/// Keeps the store's multiset semantics: every write appends, duplicates
/// included.
#[derive(Debug, Default)]
pub struct MemoryFrontier {
    entries: Mutex<Vec<FrontierEntry>>,
}

impl MemoryFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries written so far, in write order.
    pub fn entries(&self) -> Vec<FrontierEntry> {
        self.entries.lock().expect("frontier lock poisoned").clone()
    }
}

#[async_trait]
impl FrontierStore for MemoryFrontier {
    async fn put_new_entry(&self, url: &str, depth: u32) -> Result<()> {
        let mut entries = self.entries.lock().expect("frontier lock poisoned");
        entries.push(FrontierEntry::new(url, depth));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn identical_writes_create_independent_entries() {
        let store = MemoryFrontier::new();
        store.put_new_entry("http://a.example", 1).await.unwrap();
        store.put_new_entry("http://a.example", 1).await.unwrap();

        let entries = store.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }

    #[tokio::test]
    async fn preserves_write_order() {
        let store = MemoryFrontier::new();
        store.put_new_entry("http://a.example", 1).await.unwrap();
        store.put_new_entry("http://b.example", 2).await.unwrap();

        let entries = store.entries();
        assert_eq!(entries[0].url, "http://a.example");
        assert_eq!(entries[1].url, "http://b.example");
    }
}
