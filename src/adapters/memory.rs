//! In-process snapshot storage
//!
//! Keeps the saved snapshot in memory. Used for ephemeral sessions and by
//! tests, which can also make saves fail on purpose.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::core::models::AppData;
use crate::core::ports::SnapshotStore;
use crate::error::{ChittyError, Result};

/// Snapshot store that never touches the disk
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    record: Mutex<Option<AppData>>,
    saves: AtomicUsize,
    fail_saves: AtomicBool,
    fail_loads: AtomicBool,
}

impl MemorySnapshotStore {
    /// Empty store (first run)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store that already holds a snapshot
    #[must_use]
    pub fn with_snapshot(data: AppData) -> Self {
        Self {
            record: Mutex::new(Some(data)),
            ..Self::default()
        }
    }

    /// Make subsequent saves fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Make loads fail as if the record were unreadable
    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// The last saved snapshot
    #[must_use]
    pub fn saved(&self) -> Option<AppData> {
        self.record.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<AppData>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(ChittyError::io(
                "memory",
                std::io::Error::other("simulated load failure"),
            ));
        }
        Ok(self.saved())
    }

    fn save(&self, data: &AppData) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(ChittyError::io(
                "memory",
                std::io::Error::other("simulated save failure"),
            ));
        }
        *self.record.lock().unwrap_or_else(PoisonError::into_inner) = Some(data.clone());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
