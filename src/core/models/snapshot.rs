//! The snapshot document
//!
//! [`AppData`] is the single root document: the unit of persistence, export
//! and import. There is no partial persistence.

use serde::{Deserialize, Serialize};

use super::{Pool, Reminder};
use crate::error::{ChittyError, Result};

/// Schema version written into new snapshots
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Fallback name for a reminder whose pool no longer exists
pub const UNKNOWN_POOL: &str = "Unknown chitty";

/// Name of the field that must hold the pool array
const POOLS_FIELD: &str = "chitties";

/// Whole application document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppData {
    /// Schema version tag
    #[serde(default = "default_version")]
    pub version: String,

    /// Last modification time (RFC 3339)
    #[serde(default = "now_rfc3339")]
    pub last_updated: String,

    /// All pools with their nested members, payments and properties
    pub chitties: Vec<Pool>,

    /// All reminders
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

fn default_version() -> String {
    SCHEMA_VERSION.to_string()
}

fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

impl Default for AppData {
    fn default() -> Self {
        Self {
            version: default_version(),
            last_updated: now_rfc3339(),
            chitties: Vec::new(),
            reminders: Vec::new(),
        }
    }
}

impl AppData {
    /// Validation predicate applied at the import boundary
    ///
    /// A candidate is acceptable only if it is an object carrying a
    /// `chitties` array (possibly empty). Nothing else is checked here.
    pub fn validate_document(candidate: &serde_json::Value) -> Result<()> {
        match candidate.get(POOLS_FIELD) {
            Some(serde_json::Value::Array(_)) => Ok(()),
            Some(_) => Err(ChittyError::Validation(format!("`{POOLS_FIELD}` is not an array"))),
            None => Err(ChittyError::Validation(format!("missing `{POOLS_FIELD}` array"))),
        }
    }

    /// Validate a JSON document and decode it into a snapshot
    pub fn from_document(candidate: serde_json::Value) -> Result<Self> {
        Self::validate_document(&candidate)?;
        Ok(serde_json::from_value(candidate)?)
    }

    /// Find a pool by id
    #[must_use]
    pub fn pool(&self, id: &str) -> Option<&Pool> {
        self.chitties.iter().find(|c| c.id == id)
    }

    /// Find a reminder by id
    #[must_use]
    pub fn reminder(&self, id: &str) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    /// Name of the pool a reminder points at, or [`UNKNOWN_POOL`]
    #[must_use]
    pub fn reminder_pool_name(&self, reminder: &Reminder) -> &str {
        self.pool(&reminder.chitty_id).map_or(UNKNOWN_POOL, |c| c.name.as_str())
    }
}
