use crate::commands::{CmdMessage, CmdResult, KirokuPaths};
use crate::error::Result;
use crate::logbook::Logbook;
use crate::model::LogEntry;

/// Append a batch of client log entries to today's log file.
pub fn run(paths: &KirokuPaths, entries: &[LogEntry]) -> Result<CmdResult> {
    let logbook = Logbook::new(paths.log_dir.clone());
    logbook.append(entries)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "{} log entries recorded.",
        entries.len()
    )));
    Ok(result)
}
