//! Shared test fixtures and helpers
//!
//! This module provides common builders for chitty tests.

use std::sync::Arc;

use chitty::Store;
use chitty::adapters::MemorySnapshotStore;
use chitty::core::models::{MemberDraft, PaymentDraft, PaymentStatus, PoolDraft, ReminderDraft};
use chrono::NaiveDate;

/// Calendar date shorthand
pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The "Diwali Fund": 20 months of ₹5000 from 2024-01-01
pub fn diwali_fund() -> PoolDraft {
    PoolDraft::new("Diwali Fund", 20, 5000.0, day(2024, 1, 1))
}

/// A store over an in-memory persistence port, plus a handle to that port
pub fn memory_store() -> (Arc<MemorySnapshotStore>, Store) {
    let persistence = Arc::new(MemorySnapshotStore::new());
    let store = Store::open(Box::new(Arc::clone(&persistence)));
    (persistence, store)
}

/// A paid installment for `member_id`
pub fn payment(chitty_id: &str, member_id: &str, month_index: u32, amount: f64) -> PaymentDraft {
    PaymentDraft {
        chitty_id: chitty_id.to_string(),
        member_id: member_id.to_string(),
        month_index: f64::from(month_index),
        amount,
        status: PaymentStatus::Paid,
        notes: None,
    }
}

/// A reminder without a note
pub fn reminder(chitty_id: &str, date: NaiveDate) -> ReminderDraft {
    ReminderDraft {
        chitty_id: chitty_id.to_string(),
        date,
        note: None,
    }
}

/// A store holding the Diwali Fund with one member, one payment and one reminder
///
/// Returns the store and the pool, member and reminder ids.
pub fn populated_store() -> (Arc<MemorySnapshotStore>, Store, String, String, String) {
    let (persistence, mut store) = memory_store();
    let pool_id = store.create_pool(diwali_fund());
    let member_id = store.add_member(&pool_id, MemberDraft::named("Lakshmi"));
    store.add_payment(payment(&pool_id, &member_id, 1, 5000.0));
    let reminder_id = store.add_reminder(reminder(&pool_id, day(2024, 2, 5)));
    (persistence, store, pool_id, member_id, reminder_id)
}
