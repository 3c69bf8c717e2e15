use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DiaryStore;

/// Return the raw store, header first. A missing store is bootstrapped
/// rather than reported as an error; a failed read never fabricates data.
pub fn run<S: DiaryStore>(store: &mut S) -> Result<CmdResult> {
    let blob = store.fetch_all()?;
    Ok(CmdResult::default().with_blob(blob))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::save;
    use crate::store::memory::fixtures::{blob_of, entry};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn bootstraps_missing_store() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store).unwrap();
        assert_eq!(result.blob.as_deref(), Some("id,date,content,category,tags\n"));
    }

    #[test]
    fn returns_saved_payload_verbatim() {
        let mut store = InMemoryStore::new();
        let blob = blob_of(&[entry("1", "hello")]);

        save::run(&mut store, &blob).unwrap();
        let result = run(&mut store).unwrap();
        assert_eq!(result.blob.as_deref(), Some(blob.as_str()));
    }
}
