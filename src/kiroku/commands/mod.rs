use crate::model::Entry;
use std::path::PathBuf;

pub mod delete;
pub mod fetch;
pub mod init;
pub mod list;
pub mod logs;
pub mod save;

/// Filesystem locations for the pieces that live outside the store proper.
#[derive(Debug, Clone)]
pub struct KirokuPaths {
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured result every command returns to its caller.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Raw store content, for the fetch path.
    pub blob: Option<String>,
    /// Parsed entries, for the listing path.
    pub listed_entries: Vec<Entry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_blob(mut self, blob: String) -> Self {
        self.blob = Some(blob);
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<Entry>) -> Self {
        self.listed_entries = entries;
        self
    }
}
