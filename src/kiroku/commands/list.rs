use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Entry;
use crate::store::DiaryStore;

/// Parse the store into entries for display. Blank lines are skipped; the
/// header line is not an entry.
pub fn run<S: DiaryStore>(store: &mut S) -> Result<CmdResult> {
    let blob = store.fetch_all()?;
    let entries: Vec<Entry> = blob
        .split('\n')
        .skip(1)
        .filter_map(Entry::from_line)
        .collect();

    Ok(CmdResult::default().with_listed_entries(entries))
}
