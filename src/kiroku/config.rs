use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORE_FILE: &str = "diaries.csv";
const DEFAULT_BACKUP_DIR: &str = "backups";
const DEFAULT_LOG_DIR: &str = "logs";

/// Configuration for kiroku, stored in `<data dir>/config.json`.
///
/// All values are names relative to the data directory; absolute layout is
/// the binary's concern.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KirokuConfig {
    /// File name of the primary store
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Directory holding the pre-write snapshots
    #[serde(default = "default_backup_dir")]
    pub backup_dir: String,

    /// Directory holding the date-named log files
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

fn default_store_file() -> String {
    DEFAULT_STORE_FILE.to_string()
}

fn default_backup_dir() -> String {
    DEFAULT_BACKUP_DIR.to_string()
}

fn default_log_dir() -> String {
    DEFAULT_LOG_DIR.to_string()
}

impl Default for KirokuConfig {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            backup_dir: default_backup_dir(),
            log_dir: default_log_dir(),
        }
    }
}

impl KirokuConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: KirokuConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}
