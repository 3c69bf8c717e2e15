use super::{prune_entries, DiaryStore};
use crate::error::{KirokuError, Result};
use crate::model::STORE_HEADER;
use chrono::Utc;
use std::fs;
use std::path::{Path, PathBuf};

/// Production store: one flat CSV file plus a directory of snapshots.
pub struct FileStore {
    store_path: PathBuf,
    backup_dir: PathBuf,
}

impl FileStore {
    pub fn new(store_path: PathBuf, backup_dir: PathBuf) -> Self {
        Self {
            store_path,
            backup_dir,
        }
    }

    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    pub fn backup_dir(&self) -> &Path {
        &self.backup_dir
    }

    /// Copy the current store byte-for-byte into the backup directory under
    /// a timestamped name. Colons are not filename-safe everywhere, so the
    /// timestamp uses dashes; a counter suffix keeps same-millisecond
    /// snapshots distinct.
    ///
    /// Callers only invoke this when the store exists. A failure here
    /// aborts the pending mutation.
    fn backup(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.backup_dir).map_err(KirokuError::Backup)?;

        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S%.3fZ").to_string();
        let mut backup_path = self.backup_dir.join(format!("diaries-{}.csv", timestamp));
        let mut n = 1;
        while backup_path.exists() {
            backup_path = self
                .backup_dir
                .join(format!("diaries-{}-{}.csv", timestamp, n));
            n += 1;
        }

        fs::copy(&self.store_path, &backup_path).map_err(KirokuError::Backup)?;
        Ok(backup_path)
    }

    /// Replace the store content in one logical step: write a sibling temp
    /// file, then rename it over the store. Readers never see a torn write.
    fn write_store(&self, blob: &str) -> Result<()> {
        if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent).map_err(KirokuError::Write)?;
        }
        let tmp_path = self.store_path.with_extension("csv.tmp");
        fs::write(&tmp_path, blob).map_err(KirokuError::Write)?;
        fs::rename(&tmp_path, &self.store_path).map_err(KirokuError::Write)?;
        Ok(())
    }

    fn read_store(&self) -> Result<String> {
        fs::read_to_string(&self.store_path).map_err(KirokuError::Read)
    }
}

impl DiaryStore for FileStore {
    fn ensure_store(&mut self) -> Result<()> {
        if self.store_path.exists() {
            return Ok(());
        }
        self.write_store(&format!("{}\n", STORE_HEADER))
    }

    fn save_all(&mut self, blob: &str) -> Result<()> {
        if self.store_path.exists() {
            self.backup()?;
        }
        self.write_store(blob)
    }

    fn delete_entry(&mut self, id: &str) -> Result<()> {
        let current = self.read_store()?;
        self.backup()?;
        self.write_store(&prune_entries(&current, id))
    }

    fn fetch_all(&mut self) -> Result<String> {
        self.ensure_store()?;
        self.read_store()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> FileStore {
        FileStore::new(
            temp.path().join("diaries.csv"),
            temp.path().join("backups"),
        )
    }

    fn backup_files(store: &FileStore) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = match fs::read_dir(store.backup_dir()) {
            Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
            Err(_) => Vec::new(),
        };
        files.sort();
        files
    }

    #[test]
    fn ensure_store_creates_header_only_file() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        store.ensure_store().unwrap();
        let content = fs::read_to_string(store.store_path()).unwrap();
        assert_eq!(content, "id,date,content,category,tags\n");
    }

    #[test]
    fn ensure_store_is_idempotent_and_preserves_content() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        let blob = "id,date,content,category,tags\n1,d,x,c,\n";

        store.save_all(blob).unwrap();
        store.ensure_store().unwrap();
        store.ensure_store().unwrap();

        assert_eq!(fs::read_to_string(store.store_path()).unwrap(), blob);
    }

    #[test]
    fn first_save_takes_no_backup() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        store
            .save_all("id,date,content,category,tags\n1,d,x,c,\n")
            .unwrap();
        assert!(backup_files(&store).is_empty());
    }

    #[test]
    fn overwrite_backs_up_previous_generation() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        let first = "id,date,content,category,tags\n1,d,first,c,\n";
        let second = "id,date,content,category,tags\n2,d,second,c,\n";

        store.save_all(first).unwrap();
        store.save_all(second).unwrap();

        let backups = backup_files(&store);
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), first);
        assert_eq!(fs::read_to_string(store.store_path()).unwrap(), second);
    }

    #[test]
    fn every_mutation_gets_its_own_backup() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        let blob = "id,date,content,category,tags\n1,d,x,c,\n2,d,y,c,\n";

        store.save_all(blob).unwrap();
        store.save_all(blob).unwrap();
        store.save_all(blob).unwrap();
        store.delete_entry("1").unwrap();

        // Three mutations against an existing store, three snapshots, even
        // when several land within the same millisecond.
        assert_eq!(backup_files(&store).len(), 3);
    }

    #[test]
    fn delete_prunes_and_snapshots_prior_state() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        let blob = "id,date,content,category,tags\n1,d,first,c,\n10,d,second,c,\n";

        store.save_all(blob).unwrap();
        store.delete_entry("1").unwrap();

        let content = fs::read_to_string(store.store_path()).unwrap();
        assert_eq!(content, "id,date,content,category,tags\n10,d,second,c,");

        let backups = backup_files(&store);
        assert_eq!(backups.len(), 1);
        assert_eq!(fs::read_to_string(&backups[0]).unwrap(), blob);
    }

    #[test]
    fn delete_on_missing_store_is_a_read_error() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        let err = store.delete_entry("1").unwrap_err();
        assert!(matches!(err, KirokuError::Read(_)));
        // No snapshot of a store that never existed.
        assert!(backup_files(&store).is_empty());
    }

    #[test]
    fn fetch_bootstraps_missing_store() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        let blob = store.fetch_all().unwrap();
        assert_eq!(blob, "id,date,content,category,tags\n");
        assert!(store.store_path().exists());
    }

    #[test]
    fn fetch_returns_exactly_what_was_saved() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        let blob = "id,date,content,category,tags\n1,2024-01-01,hello,misc,\n";

        store.save_all(blob).unwrap();
        assert_eq!(store.fetch_all().unwrap(), blob);
    }

    #[test]
    fn temp_file_does_not_linger() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);

        store
            .save_all("id,date,content,category,tags\n1,d,x,c,\n")
            .unwrap();
        assert!(!temp.path().join("diaries.csv.tmp").exists());
    }
}
