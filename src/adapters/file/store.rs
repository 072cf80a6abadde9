//! Key-value directory store for the snapshot

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::models::AppData;
use crate::core::ports::{DATA_KEY, SnapshotStore};
use crate::error::{ChittyError, Result};

/// Snapshot store backed by `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    /// Directory holding the records
    dir: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store rooted at `dir` (created lazily on first save)
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Directory holding the records
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the record for `key`
    #[must_use]
    pub fn record_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    fn read_record(&self, key: &str) -> Result<Option<String>> {
        let path = self.record_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ChittyError::io(path, e)),
        }
    }

    /// Write the record through a temporary sibling so a crash mid-write
    /// leaves the previous record intact
    fn write_record(&self, key: &str, content: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| ChittyError::io(&self.dir, e))?;

        let path = self.record_path(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, content).map_err(|e| ChittyError::io(&tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| ChittyError::io(&path, e))?;
        Ok(())
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self) -> Result<Option<AppData>> {
        let Some(content) = self.read_record(DATA_KEY)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, data: &AppData) -> Result<()> {
        let content = serde_json::to_string(data)?;
        self.write_record(DATA_KEY, &content)?;
        debug!("Saved snapshot to {}", self.record_path(DATA_KEY).display());
        Ok(())
    }

    /// Rename the record to `<key>.json.corrupt-<utc timestamp>`
    fn set_aside(&self) -> Result<Option<PathBuf>> {
        let path = self.record_path(DATA_KEY);
        if !path.exists() {
            return Ok(None);
        }
        let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S%.3fZ");
        let target = self.dir.join(format!("{DATA_KEY}.json.corrupt-{stamp}"));
        fs::rename(&path, &target).map_err(|e| ChittyError::io(&path, e))?;
        warn!("Moved unreadable snapshot to {}", target.display());
        Ok(Some(target))
    }
}
