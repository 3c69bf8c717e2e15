//! # Storage Layer
//!
//! This module defines the storage abstraction for kiroku. The [`DiaryStore`]
//! trait is the narrow interface the rest of the crate talks to; everything
//! about durability and consistency lives behind it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The store is one flat CSV file, header line first
//!   - Every destructive write to an existing store is preceded by a
//!     timestamped snapshot in the backup directory
//!   - Writes go through a temp file plus rename
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Records its snapshots so tests can assert the backup invariant
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <data dir>/
//! ├── diaries.csv                      # the store, header line first
//! └── backups/
//!     └── diaries-<timestamp>.csv      # one full copy per mutation
//! ```
//!
//! ## Consistency Contract
//!
//! There is no in-process locking and no write queue. Two concurrent
//! mutations may interleave, last writer wins; the contract is only that
//! every successful mutation was preceded by its own backup, so any
//! overwritten generation of the store remains recoverable. Stronger
//! guarantees (locking, a single-writer queue) could be added behind this
//! trait without changing callers.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for diary persistence.
///
/// Payloads crossing this boundary are whole-store blobs that have already
/// been validated and sanitized by the command layer.
pub trait DiaryStore {
    /// Create the store with a bare header line if it does not exist yet.
    /// A no-op when the file is already there, whatever its content.
    fn ensure_store(&mut self) -> Result<()>;

    /// Replace the whole store with `blob`. When the store already exists,
    /// a backup of the previous content is taken first; the write never
    /// proceeds without one.
    fn save_all(&mut self, blob: &str) -> Result<()>;

    /// Rewrite the store without the entry lines whose id field equals
    /// `id`. Removing an id that is not present succeeds and leaves the
    /// entries unchanged.
    fn delete_entry(&mut self, id: &str) -> Result<()>;

    /// Whole store content, header first. Bootstraps a missing store.
    fn fetch_all(&mut self) -> Result<String>;
}

/// Drop every entry line whose id field matches `id` exactly.
///
/// The match is a string-prefix test against `"{id},"`; the trailing comma
/// keeps `"1"` from also matching `"10"`. Ids are compared as written, so
/// `"01"` and `"1"` are different ids. Blank lines are dropped in the
/// rewrite and the result carries no trailing newline.
pub fn prune_entries(blob: &str, id: &str) -> String {
    let mut lines = blob.split('\n');
    let header = lines.next().unwrap_or("");
    let needle = format!("{},", id);

    let mut kept = vec![header.to_string()];
    kept.extend(
        lines
            .filter(|line| !line.trim().is_empty())
            .filter(|line| !line.starts_with(&needle))
            .map(|line| line.to_string()),
    );
    kept.join("\n")
}
