//! Member model
//!
//! A participant in exactly one pool. Payments point at members by id.

use serde::{Deserialize, Serialize};

/// A pool participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Display name
    pub name: String,

    /// Optional phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Optional email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// When the member joined (RFC 3339)
    #[serde(default)]
    pub joined_date: String,
}

/// Caller-editable member fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberDraft {
    /// Display name
    pub name: String,
    /// Optional phone number
    pub phone: Option<String>,
    /// Optional email address
    pub email: Option<String>,
}

impl MemberDraft {
    /// Draft with only a name
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Materialize the member with its generated identity and join time
    #[must_use]
    pub fn into_member(self, id: String, joined_date: String) -> Member {
        Member {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            joined_date,
        }
    }
}
