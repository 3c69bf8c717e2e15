use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First line of every valid store file. Byte-identical on every store,
/// columns in this exact order.
pub const STORE_HEADER: &str = "id,date,content,category,tags";

/// One diary entry, one line in the store.
///
/// The `id` is caller-supplied and numeric-looking; the store itself does
/// not enforce uniqueness. All fields are plain strings and must not contain
/// commas or newlines; there is no quoting grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub date: String,
    pub content: String,
    pub category: String,
    pub tags: String,
}

impl Entry {
    /// Parse one store line. Returns `None` for blank lines.
    ///
    /// Cells are split on bare commas; anything past the fourth comma stays
    /// together as `tags`. Missing trailing cells come back empty.
    pub fn from_line(line: &str) -> Option<Self> {
        if line.trim().is_empty() {
            return None;
        }
        let mut cells = line.splitn(5, ',');
        Some(Self {
            id: cells.next().unwrap_or("").to_string(),
            date: cells.next().unwrap_or("").to_string(),
            content: cells.next().unwrap_or("").to_string(),
            category: cells.next().unwrap_or("").to_string(),
            tags: cells.next().unwrap_or("").to_string(),
        })
    }

    /// Serialize back into a store line, header order.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{},{},{}",
            self.id, self.date, self.content, self.category, self.tags
        )
    }
}

/// Severity of a client log entry. Anything else is rejected at the parse
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
    Debug,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "debug" => Ok(LogLevel::Debug),
            other => Err(format!("unknown log level: {}", other)),
        }
    }
}

/// One application log line, appended to a date-named file.
///
/// Not part of the diary store: no header, no backups. The optional `error`
/// payload is arbitrary JSON from the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            error: None,
        }
    }
}
