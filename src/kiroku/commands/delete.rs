use crate::commands::{CmdMessage, CmdResult};
use crate::error::{KirokuError, Result};
use crate::store::DiaryStore;

/// Remove the entries whose id field equals `id` exactly.
///
/// Deleting an id that is not in the store is not an error: the store is
/// rewritten unchanged and success is reported.
pub fn run<S: DiaryStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    validate_id(id)?;
    store.delete_entry(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Entry {} deleted.", id)));
    Ok(result)
}

/// Ids must be non-empty and parse as a finite number. The store match is
/// still a string-prefix test against `"{id},"`, never a parsed-field
/// comparison; this gate only keeps malformed requests out.
fn validate_id(id: &str) -> Result<()> {
    let numeric = id.parse::<f64>().map(|n| n.is_finite()).unwrap_or(false);
    if id.is_empty() || !numeric {
        return Err(KirokuError::Validation(format!(
            "invalid entry id: {:?}",
            id
        )));
    }
    Ok(())
}
