use super::{prune_entries, DiaryStore};
use crate::error::{KirokuError, Result};
use crate::model::STORE_HEADER;
use std::io;

/// In-memory storage for testing.
/// Does NOT persist data, but mirrors `FileStore` semantics, including the
/// backup-before-write contract, so command-layer tests can assert it.
#[derive(Default)]
pub struct InMemoryStore {
    blob: Option<String>,
    backups: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots taken so far, oldest first.
    pub fn backups(&self) -> &[String] {
        &self.backups
    }

    /// Current raw store content, if the store was ever created.
    pub fn raw(&self) -> Option<&str> {
        self.blob.as_deref()
    }

    fn missing() -> KirokuError {
        KirokuError::Read(io::Error::new(
            io::ErrorKind::NotFound,
            "store does not exist",
        ))
    }
}

impl DiaryStore for InMemoryStore {
    fn ensure_store(&mut self) -> Result<()> {
        if self.blob.is_none() {
            self.blob = Some(format!("{}\n", STORE_HEADER));
        }
        Ok(())
    }

    fn save_all(&mut self, blob: &str) -> Result<()> {
        if let Some(existing) = &self.blob {
            self.backups.push(existing.clone());
        }
        self.blob = Some(blob.to_string());
        Ok(())
    }

    fn delete_entry(&mut self, id: &str) -> Result<()> {
        let current = self.blob.clone().ok_or_else(Self::missing)?;
        self.backups.push(current.clone());
        self.blob = Some(prune_entries(&current, id));
        Ok(())
    }

    fn fetch_all(&mut self) -> Result<String> {
        self.ensure_store()?;
        Ok(self.blob.clone().unwrap_or_default())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Entry;

    /// Build a store payload from entries, header line first.
    pub fn blob_of(entries: &[Entry]) -> String {
        let mut lines = vec![STORE_HEADER.to_string()];
        lines.extend(entries.iter().map(Entry::to_line));
        let mut blob = lines.join("\n");
        blob.push('\n');
        blob
    }

    pub fn entry(id: &str, content: &str) -> Entry {
        Entry {
            id: id.to_string(),
            date: "2024-01-01".to_string(),
            content: content.to_string(),
            category: "misc".to_string(),
            tags: String::new(),
        }
    }

    /// A store seeded through the public save path.
    pub fn seeded_store(entries: &[Entry]) -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store.save_all(&blob_of(entries)).unwrap();
        store
    }
}
