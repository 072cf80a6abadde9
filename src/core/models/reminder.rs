//! Reminder model
//!
//! A dated note pointing at a pool by id. Reminders are not owned by pools:
//! deleting the pool leaves the reminder behind with a dangling reference.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::date;

/// A dated note about a pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Referenced pool id (may no longer exist)
    pub chitty_id: String,

    /// The single firing date
    #[serde(with = "date")]
    pub date: NaiveDate,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Caller-editable reminder fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDraft {
    /// Referenced pool id
    pub chitty_id: String,
    /// Firing date
    pub date: NaiveDate,
    /// Optional free-text note
    pub note: Option<String>,
}

impl ReminderDraft {
    /// Materialize the reminder with its generated identity
    #[must_use]
    pub fn into_reminder(self, id: String) -> Reminder {
        Reminder {
            id,
            chitty_id: self.chitty_id,
            date: self.date,
            note: self.note,
        }
    }
}
