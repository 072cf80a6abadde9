//! Property model
//!
//! Collateral recorded against a pool. `pending_amount` is user-entered and
//! is never recomputed from `value` and `given_amount`.

use serde::{Deserialize, Serialize};

/// A collateral record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Name of the holder
    pub holder_name: String,

    /// Free-text location
    #[serde(default)]
    pub location: String,

    /// Free-text measurement or notes
    #[serde(default)]
    pub measurement: String,

    /// Declared value
    #[serde(default)]
    pub value: f64,

    /// Amount advanced against the property
    #[serde(default)]
    pub given_amount: f64,

    /// Amount still pending
    #[serde(default)]
    pub pending_amount: f64,
}

/// Caller-editable property fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyDraft {
    /// Name of the holder
    pub holder_name: String,
    /// Free-text location
    pub location: String,
    /// Free-text measurement or notes
    pub measurement: String,
    /// Declared value
    pub value: f64,
    /// Amount advanced against the property
    pub given_amount: f64,
    /// Amount still pending; `None` means `value - given_amount`
    pub pending_amount: Option<f64>,
}

impl PropertyDraft {
    /// Suggested pending amount when the caller leaves it blank
    #[must_use]
    pub fn suggested_pending(&self) -> f64 {
        self.value - self.given_amount
    }

    /// Materialize the property with the given identity
    #[must_use]
    pub fn into_property(self, id: String) -> Property {
        let pending_amount = self.pending_amount.unwrap_or_else(|| self.suggested_pending());
        Property {
            id,
            holder_name: self.holder_name,
            location: self.location,
            measurement: self.measurement,
            value: self.value,
            given_amount: self.given_amount,
            pending_amount,
        }
    }
}
