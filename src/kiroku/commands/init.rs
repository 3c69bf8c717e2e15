use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DiaryStore;

/// Make sure the store exists with a valid header. Idempotent: an existing
/// store is left alone, whatever its content; header validation belongs to
/// the save path.
pub fn run<S: DiaryStore>(store: &mut S) -> Result<CmdResult> {
    store.ensure_store()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Diary store ready."));
    Ok(result)
}
