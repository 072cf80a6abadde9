//! Snapshot persistence port
//!
//! Defines the interface for durably saving and loading the whole snapshot.

use std::path::PathBuf;

use crate::core::models::AppData;
use crate::error::Result;

/// Fixed key the snapshot is stored under
pub const DATA_KEY: &str = "app-data";

/// Durable storage for the application snapshot
///
/// Implementations keep exactly one record: every save overwrites the
/// previous snapshot in full.
pub trait SnapshotStore: Send + Sync {
    /// Load the persisted snapshot
    ///
    /// Returns `Ok(None)` on first run, when nothing has been saved yet.
    fn load(&self) -> Result<Option<AppData>>;

    /// Overwrite the persisted snapshot
    fn save(&self, data: &AppData) -> Result<()>;

    /// Move an unreadable record out of the way of the next save
    ///
    /// Returns where the record now lives, or `None` if the backend cannot
    /// keep it aside. In that case the caller must not save over it.
    fn set_aside(&self) -> Result<Option<PathBuf>> {
        Ok(None)
    }
}

/// A shared handle saves through to the shared store
impl<T: SnapshotStore> SnapshotStore for std::sync::Arc<T> {
    fn load(&self) -> Result<Option<AppData>> {
        (**self).load()
    }

    fn save(&self, data: &AppData) -> Result<()> {
        (**self).save(data)
    }

    fn set_aside(&self) -> Result<Option<PathBuf>> {
        (**self).set_aside()
    }
}
