//! # Kiroku Architecture
//!
//! Kiroku is a **UI-agnostic diary-persistence library**. The CLI binary that ships with
//! it is just one client; the same core could sit behind an HTTP handler or any other
//! request layer.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                              │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Payload validation, sanitization, orchestration          │
//! │  - Operates on Rust types, returns Rust types               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DiaryStore trait                                │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Store
//!
//! All entries live in a single flat file. The first line is a fixed column header
//! (`id,date,content,category,tags`); every following non-blank line is one entry,
//! comma-separated in header order. There is no quoting grammar: a comma inside a
//! field is split like any other comma. That keeps the file trivially appendable and
//! readable in spreadsheet software, and it is why writes are whole-file replacements
//! rather than record-level edits.
//!
//! ## The Safety Invariant
//!
//! Before any destructive write to an existing store, a timestamped full copy lands in
//! the backup directory. A mutation whose backup fails is aborted. Backups are never
//! pruned and never read back by the running service; restoring one is a manual
//! operational action.
//!
//! ## Concurrency Stance
//!
//! Each save/delete runs backup-then-write with no in-process locking. Two concurrent
//! mutations can interleave and the last writer wins, but each carries its own backup,
//! so no generation of the store is ever unrecoverable. The store file itself is
//! replaced via temp-file-plus-rename, so readers never observe a torn write.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Validation and orchestration for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`sanitize`]: Cell-level formula-injection defense
//! - [`logbook`]: Date-named application log files
//! - [`model`]: Core data types (`Entry`, `LogEntry`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod logbook;
pub mod model;
pub mod sanitize;
pub mod store;
