//! Date-named application log files.
//!
//! Log entries arrive from the client in batches and are appended to
//! `logs/YYYY-MM-DD.log`. The log is a plain sink: unlike the diary store
//! it has no header, no backups, and is never read back by the service.
//!
//! Level and timestamp validity are carried by the types in [`crate::model`];
//! what is checked here is the free-text message, and backticks in free text
//! are escaped before anything is written.

use crate::error::{KirokuError, Result};
use crate::model::LogEntry;
use chrono::Utc;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Messages longer than this are rejected rather than truncated.
pub const MAX_MESSAGE_LEN: usize = 1000;

pub struct Logbook {
    log_dir: PathBuf,
}

impl Logbook {
    pub fn new(log_dir: PathBuf) -> Self {
        Self { log_dir }
    }

    pub fn log_dir(&self) -> &Path {
        &self.log_dir
    }

    /// Append a batch of entries to today's log file. The whole batch is
    /// validated before a single byte is written.
    pub fn append(&self, entries: &[LogEntry]) -> Result<()> {
        for entry in entries {
            validate_entry(entry)?;
        }
        if entries.is_empty() {
            return Ok(());
        }

        fs::create_dir_all(&self.log_dir)?;
        let file_name = format!("{}.log", Utc::now().format("%Y-%m-%d"));
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.log_dir.join(file_name))?;

        let mut payload = entries
            .iter()
            .map(format_entry)
            .collect::<Vec<_>>()
            .join("\n");
        payload.push('\n');
        file.write_all(payload.as_bytes())?;
        Ok(())
    }
}

fn validate_entry(entry: &LogEntry) -> Result<()> {
    if entry.message.is_empty() {
        return Err(KirokuError::Validation(
            "log message must not be empty".to_string(),
        ));
    }
    if entry.message.len() > MAX_MESSAGE_LEN {
        return Err(KirokuError::Validation(format!(
            "log message too long: {} characters",
            entry.message.len()
        )));
    }
    Ok(())
}

/// `[timestamp] level: message`, with the optional error payload
/// pretty-printed on the following lines.
fn format_entry(entry: &LogEntry) -> String {
    let timestamp = entry.timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ");
    let mut line = format!("[{}] {}: {}", timestamp, entry.level, escape(&entry.message));
    if let Some(error) = &entry.error {
        let detail = serde_json::to_string_pretty(error)
            .unwrap_or_else(|e| format!("Error serializing error: {}", e));
        line.push('\n');
        line.push_str(&escape(&detail));
    }
    line
}

fn escape(text: &str) -> String {
    text.replace('`', "\\`")
}
