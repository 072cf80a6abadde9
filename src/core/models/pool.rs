//! Pool ("chitty") model
//!
//! A fixed-duration savings circle with a periodic installment. A pool owns
//! its members, payments and properties by composition: dropping the pool
//! drops all three.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Member, Payment, PaymentStatus, Property, date};

/// Fallback name for a payment whose member no longer exists
pub const UNKNOWN_MEMBER: &str = "Member";

/// A savings pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    /// Unique identifier (UUID v4)
    pub id: String,

    /// Display name
    pub name: String,

    /// Optional external reference number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chitty_no: Option<String>,

    /// Branch or location label
    #[serde(default)]
    pub branch: String,

    /// Optional owner label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,

    /// Total duration in months
    ///
    /// Any JSON number is accepted on load.
    pub total_months: f64,

    /// Fixed periodic installment
    pub installment_amount: f64,

    /// First month of the pool
    #[serde(with = "date")]
    pub start_date: NaiveDate,

    /// Lifecycle status (free-form transitions)
    #[serde(default)]
    pub status: PoolStatus,

    /// Auction amount, meaningful once auctioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auction_amount: Option<f64>,

    /// Final settlement amount, meaningful once auctioned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_amount: Option<f64>,

    /// Collateral records, absent until the first one is added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,

    /// Participants
    #[serde(default)]
    pub members: Vec<Member>,

    /// Installment records
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// Pool lifecycle status
///
/// Stored values outside the known three are kept verbatim in
/// [`PoolStatus::Other`] and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum PoolStatus {
    /// Collecting installments, not yet auctioned
    #[default]
    Running,
    /// Collecting installments after the auction
    RunningAuctioned,
    /// Finished
    Completed,
    /// Unrecognized stored value
    Other(String),
}

impl PoolStatus {
    /// Running or running+auctioned
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Running | Self::RunningAuctioned)
    }

    /// Wire name
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Running => "running",
            Self::RunningAuctioned => "running+auctioned",
            Self::Completed => "completed",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for PoolStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "running" => Self::Running,
            "running+auctioned" => Self::RunningAuctioned,
            "completed" => Self::Completed,
            _ => Self::Other(raw),
        }
    }
}

impl From<PoolStatus> for String {
    fn from(status: PoolStatus) -> Self {
        match status {
            PoolStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PoolStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "+").as_str() {
            "running" => Ok(Self::Running),
            "running+auctioned" | "auctioned" => Ok(Self::RunningAuctioned),
            "completed" | "complete" | "done" => Ok(Self::Completed),
            _ => Err(format!(
                "Invalid status: {s}. Use: running, running+auctioned, completed"
            )),
        }
    }
}

/// Caller-editable pool fields (everything but identity, members and payments)
#[derive(Debug, Clone, PartialEq)]
pub struct PoolDraft {
    /// Display name
    pub name: String,
    /// Optional external reference number
    pub chitty_no: Option<String>,
    /// Branch or location label
    pub branch: String,
    /// Optional owner label
    pub owned_by: Option<String>,
    /// Total duration in months
    pub total_months: f64,
    /// Fixed periodic installment
    pub installment_amount: f64,
    /// First month of the pool
    pub start_date: NaiveDate,
    /// Lifecycle status
    pub status: PoolStatus,
    /// Auction amount
    pub auction_amount: Option<f64>,
    /// Final settlement amount
    pub final_amount: Option<f64>,
    /// Initial collateral records
    pub properties: Option<Vec<Property>>,
}

impl PoolDraft {
    /// Draft with the required fields; everything else empty
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        total_months: u32,
        installment_amount: f64,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            chitty_no: None,
            branch: String::new(),
            owned_by: None,
            total_months: f64::from(total_months),
            installment_amount,
            start_date,
            status: PoolStatus::default(),
            auction_amount: None,
            final_amount: None,
            properties: None,
        }
    }

    /// Check the positivity invariant before handing the draft to the store
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Pool name must not be empty".to_string());
        }
        if !(self.total_months.is_finite() && self.total_months > 0.0) {
            return Err("Total months must be positive".to_string());
        }
        if !(self.installment_amount.is_finite() && self.installment_amount > 0.0) {
            return Err("Installment amount must be positive".to_string());
        }
        Ok(())
    }

    /// Materialize the pool with its generated identity and no children
    #[must_use]
    pub fn into_pool(self, id: String) -> Pool {
        Pool {
            id,
            name: self.name,
            chitty_no: self.chitty_no,
            branch: self.branch,
            owned_by: self.owned_by,
            total_months: self.total_months,
            installment_amount: self.installment_amount,
            start_date: self.start_date,
            status: self.status,
            auction_amount: self.auction_amount,
            final_amount: self.final_amount,
            properties: self.properties,
            members: Vec::new(),
            payments: Vec::new(),
        }
    }
}

impl Pool {
    /// Properties as a slice (empty when none were ever added)
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        self.properties.as_deref().unwrap_or_default()
    }

    /// Whether at least one property is recorded
    #[must_use]
    pub fn has_properties(&self) -> bool {
        !self.properties().is_empty()
    }

    /// Find a member by id
    #[must_use]
    pub fn member(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Member name for display, falling back to [`UNKNOWN_MEMBER`]
    #[must_use]
    pub fn member_name(&self, id: &str) -> &str {
        self.member(id).map_or(UNKNOWN_MEMBER, |m| m.name.as_str())
    }

    /// Copy of this pool with `property` appended
    #[must_use]
    pub fn with_property(&self, property: Property) -> Self {
        let mut properties = self.properties().to_vec();
        properties.push(property);
        Self {
            properties: Some(properties),
            ..self.clone()
        }
    }

    /// Copy of this pool with the property of the same id substituted
    ///
    /// Unknown ids leave the property list unchanged.
    #[must_use]
    pub fn with_updated_property(&self, property: Property) -> Self {
        let properties = self
            .properties()
            .iter()
            .map(|p| if p.id == property.id { property.clone() } else { p.clone() })
            .collect();
        Self {
            properties: Some(properties),
            ..self.clone()
        }
    }

    /// Copy of this pool without the property of the given id
    #[must_use]
    pub fn without_property(&self, property_id: &str) -> Self {
        let properties = self.properties().iter().filter(|p| p.id != property_id).cloned().collect();
        Self {
            properties: Some(properties),
            ..self.clone()
        }
    }

    /// Sum of payments marked paid
    #[must_use]
    pub fn total_paid(&self) -> f64 {
        self.payments
            .iter()
            .filter(|p| p.status == PaymentStatus::Paid)
            .map(|p| p.amount)
            .sum()
    }

    /// Full value of the pool over its duration
    #[must_use]
    pub fn total_value(&self) -> f64 {
        self.installment_amount * self.total_months
    }
}
