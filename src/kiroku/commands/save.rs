use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KirokuError, Result};
use crate::model::STORE_HEADER;
use crate::sanitize::sanitize_blob;
use crate::store::DiaryStore;

/// Replace the whole store with `blob`.
///
/// The payload is the full replacement content, not a single appended
/// record: the caller resends the entire dataset each time. That trade-off
/// keeps the write path a single atomic blob replacement, which the delete
/// path relies on too.
///
/// Order of operations: validate, sanitize, then hand to the store (which
/// snapshots the previous generation before writing).
pub fn run<S: DiaryStore>(store: &mut S, blob: &str) -> Result<CmdResult> {
    validate_payload(blob)?;
    let sanitized = sanitize_blob(blob);
    store.save_all(&sanitized)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Diary saved."));
    Ok(result)
}

/// The first line must be the fixed column header, newline-terminated.
/// Nothing is persisted before this check passes. A store failing it is
/// rejected wholesale, never partially parsed.
fn validate_payload(blob: &str) -> Result<()> {
    let header_line = format!("{}\n", STORE_HEADER);
    if !blob.starts_with(&header_line) {
        return Err(KirokuError::Validation(
            "payload must begin with the store column header".to_string(),
        ));
    }
    Ok(())
}
