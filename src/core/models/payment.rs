//! Payment model
//!
//! One installment record against a member, keyed by the 1-based month
//! index within the pool. Nothing prevents two payments for the same
//! (pool, member, month).

use serde::{Deserialize, Serialize};

/// An installment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Owning pool id
    pub chitty_id: String,

    /// Paying member id
    pub member_id: String,

    /// Month within the pool's duration, starting at 1
    ///
    /// Any JSON number is accepted on load.
    pub month_index: f64,

    /// Amount paid
    pub amount: f64,

    /// When the payment was logged (RFC 3339)
    #[serde(default)]
    pub date: String,

    /// Payment status
    #[serde(default)]
    pub status: PaymentStatus,

    /// Optional free-text notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Payment status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    /// Received
    #[default]
    Paid,
    /// Expected but not yet received
    Pending,
    /// Not received for the month
    Missed,
    /// Unrecognized stored value, written back as is
    Other(String),
}

impl PaymentStatus {
    /// Wire name
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Missed => "missed",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for PaymentStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "paid" => Self::Paid,
            "pending" => Self::Pending,
            "missed" => Self::Missed,
            _ => Self::Other(raw),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "paid" => Ok(Self::Paid),
            "pending" => Ok(Self::Pending),
            "missed" => Ok(Self::Missed),
            _ => Err(format!("Invalid payment status: {s}. Use: paid, pending, missed")),
        }
    }
}

/// Caller-editable payment fields
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDraft {
    /// Owning pool id
    pub chitty_id: String,
    /// Paying member id
    pub member_id: String,
    /// Month within the pool's duration, starting at 1
    pub month_index: f64,
    /// Amount paid
    pub amount: f64,
    /// Payment status
    pub status: PaymentStatus,
    /// Optional free-text notes
    pub notes: Option<String>,
}

impl PaymentDraft {
    /// Materialize the payment with its generated identity and timestamp
    #[must_use]
    pub fn into_payment(self, id: String, date: String) -> Payment {
        Payment {
            id,
            chitty_id: self.chitty_id,
            member_id: self.member_id,
            month_index: self.month_index,
            amount: self.amount,
            date,
            status: self.status,
            notes: self.notes,
        }
    }
}
