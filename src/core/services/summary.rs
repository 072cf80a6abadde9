//! Read-only views derived from a snapshot
//!
//! Dashboard counters, the upcoming-reminder list, the recent-payment feed,
//! the member directory and property totals. Nothing here mutates state.

use std::cmp::Reverse;

use chrono::DateTime;
use serde::Serialize;

use crate::core::models::{AppData, Pool, PoolStatus, Reminder};

/// How many reminders the dashboard shows
pub const UPCOMING_REMINDER_LIMIT: usize = 4;

/// How many payments the activity feed shows
pub const ACTIVITY_FEED_LIMIT: usize = 6;

/// Pool counters for the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// All pools
    pub total: usize,
    /// Running or running+auctioned
    pub active: usize,
    /// Running+auctioned
    pub auctioned: usize,
    /// Running and not yet auctioned
    pub coming_auctions: usize,
    /// Pools with at least one property
    pub with_properties: usize,
}

/// A payment joined with the names it points at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    /// Payment id
    pub payment_id: String,
    /// Pool name
    pub chitty_name: String,
    /// Member name, "Member" if the member is gone
    pub member_name: String,
    /// Month index
    pub month_index: f64,
    /// Amount
    pub amount: f64,
    /// When logged (RFC 3339)
    pub date: String,
}

/// A member joined with its pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    /// Member id
    pub member_id: String,
    /// Member name
    pub name: String,
    /// Optional phone
    pub phone: Option<String>,
    /// Optional email
    pub email: Option<String>,
    /// Owning pool id
    pub chitty_id: String,
    /// Owning pool name
    pub chitty_name: String,
}

/// Sums across a set of properties
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PropertyTotals {
    /// Number of properties
    pub count: usize,
    /// Sum of declared values
    pub value: f64,
    /// Sum of amounts advanced
    pub given: f64,
    /// Sum of pending amounts
    pub pending: f64,
}

/// Payment progress for one pool
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PoolProgress {
    /// Number of payment records
    pub payments: usize,
    /// Sum of paid amounts
    pub paid: f64,
    /// Installment times duration
    pub expected_per_member: f64,
}

/// Count pools by status
#[must_use]
pub fn dashboard_stats(data: &AppData) -> DashboardStats {
    let count = |f: &dyn Fn(&Pool) -> bool| data.chitties.iter().filter(|&c| f(c)).count();
    DashboardStats {
        total: data.chitties.len(),
        active: count(&|c| c.status.is_active()),
        auctioned: count(&|c| c.status == PoolStatus::RunningAuctioned),
        coming_auctions: count(&|c| c.status == PoolStatus::Running),
        with_properties: count(&Pool::has_properties),
    }
}

/// Reminders ordered by date, earliest first
#[must_use]
pub fn reminders_by_date(data: &AppData) -> Vec<&Reminder> {
    let mut reminders: Vec<&Reminder> = data.reminders.iter().collect();
    reminders.sort_by_key(|r| r.date);
    reminders
}

/// The first few reminders by date
#[must_use]
pub fn upcoming_reminders(data: &AppData, limit: usize) -> Vec<&Reminder> {
    reminders_by_date(data).into_iter().take(limit).collect()
}

/// Most recent payments across all pools, newest first
///
/// Dates are compared as instants, so offsets may differ. Payments whose
/// date does not parse go last.
#[must_use]
pub fn activity_feed(data: &AppData, limit: usize) -> Vec<ActivityEntry> {
    let mut entries: Vec<ActivityEntry> = data
        .chitties
        .iter()
        .flat_map(|c| {
            c.payments.iter().map(move |p| ActivityEntry {
                payment_id: p.id.clone(),
                chitty_name: c.name.clone(),
                member_name: c.member_name(&p.member_id).to_string(),
                month_index: p.month_index,
                amount: p.amount,
                date: p.date.clone(),
            })
        })
        .collect();
    entries.sort_by_cached_key(|e| Reverse(DateTime::parse_from_rfc3339(&e.date).ok()));
    entries.truncate(limit);
    entries
}

/// Every member of every pool
#[must_use]
pub fn member_directory(data: &AppData) -> Vec<DirectoryEntry> {
    data.chitties
        .iter()
        .flat_map(|c| {
            c.members.iter().map(move |m| DirectoryEntry {
                member_id: m.id.clone(),
                name: m.name.clone(),
                phone: m.phone.clone(),
                email: m.email.clone(),
                chitty_id: c.id.clone(),
                chitty_name: c.name.clone(),
            })
        })
        .collect()
}

/// Totals over every property of the given pools
#[must_use]
pub fn property_totals<'a>(pools: impl IntoIterator<Item = &'a Pool>) -> PropertyTotals {
    pools
        .into_iter()
        .flat_map(Pool::properties)
        .fold(PropertyTotals::default(), |acc, p| PropertyTotals {
            count: acc.count + 1,
            value: acc.value + p.value,
            given: acc.given + p.given_amount,
            pending: acc.pending + p.pending_amount,
        })
}

/// Payment progress for a pool
#[must_use]
pub fn pool_progress(pool: &Pool) -> PoolProgress {
    PoolProgress {
        payments: pool.payments.len(),
        paid: pool.total_paid(),
        expected_per_member: pool.total_value(),
    }
}
