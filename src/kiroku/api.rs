//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for every diary operation, whatever the client. It dispatches
//! to the right command and returns structured `Result` types; business
//! logic stays in `commands/*.rs` and presentation stays with the caller.
//!
//! `KirokuApi<S: DiaryStore>` is generic over the storage backend:
//! production uses `KirokuApi<FileStore>`, tests use
//! `KirokuApi<InMemoryStore>` and never touch the filesystem.

use crate::commands;
use crate::error::Result;
use crate::model::LogEntry;
use crate::store::DiaryStore;

pub struct KirokuApi<S: DiaryStore> {
    store: S,
    paths: commands::KirokuPaths,
}

impl<S: DiaryStore> KirokuApi<S> {
    pub fn new(store: S, paths: commands::KirokuPaths) -> Self {
        Self { store, paths }
    }

    /// Create the store file if missing; no-op otherwise.
    pub fn ensure_store(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store)
    }

    /// Replace the whole store with a validated, sanitized payload.
    pub fn save_all(&mut self, blob: &str) -> Result<commands::CmdResult> {
        commands::save::run(&mut self.store, blob)
    }

    /// Remove the entries with the given id; idempotent.
    pub fn delete_entry(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    /// Raw store content, header first.
    pub fn fetch_all(&mut self) -> Result<commands::CmdResult> {
        commands::fetch::run(&mut self.store)
    }

    /// Store content parsed into entries for display.
    pub fn list_entries(&mut self) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store)
    }

    /// Append client log entries to today's log file.
    pub fn append_logs(&self, entries: &[LogEntry]) -> Result<commands::CmdResult> {
        commands::logs::run(&self.paths, entries)
    }

    pub fn paths(&self) -> &commands::KirokuPaths {
        &self.paths
    }
}

pub use commands::{CmdMessage, CmdResult, KirokuPaths, MessageLevel};
