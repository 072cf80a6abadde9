//! Snapshot reducer
//!
//! Every change to the snapshot is expressed as an [`Action`] and applied by
//! [`reduce`], a total function from (old snapshot, action) to a new
//! snapshot. The input is never mutated. Lookups that miss leave the
//! collections unchanged instead of failing.

use crate::core::models::{AppData, Member, Payment, Pool, Reminder};

/// A named change to the snapshot
///
/// Entities arrive fully formed: identity and timestamps are assigned by
/// the caller (see [`crate::core::store::Store`]) before dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Install a whole snapshot (startup load and import)
    ReplaceSnapshot(AppData),
    /// Append a pool
    AddPool(Pool),
    /// Substitute the pool with the same id
    UpdatePool(Pool),
    /// Remove a pool and everything it owns
    DeletePool(String),
    /// Append a member to a pool
    AddMember {
        /// Owning pool
        chitty_id: String,
        /// The new member
        member: Member,
    },
    /// Append a payment to the pool named by `payment.chitty_id`
    AddPayment(Payment),
    /// Append a reminder
    AddReminder(Reminder),
    /// Remove a reminder
    DeleteReminder(String),
    /// Remove a member from a pool
    DeleteMember {
        /// Owning pool
        chitty_id: String,
        /// Member to remove
        member_id: String,
    },
    /// Remove a payment from a pool
    DeletePayment {
        /// Owning pool
        chitty_id: String,
        /// Payment to remove
        payment_id: String,
    },
    /// Remove a property from a pool
    DeleteProperty {
        /// Owning pool
        chitty_id: String,
        /// Property to remove
        property_id: String,
    },
}

impl Action {
    /// Short action name for logging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ReplaceSnapshot(_) => "replace_snapshot",
            Self::AddPool(_) => "add_pool",
            Self::UpdatePool(_) => "update_pool",
            Self::DeletePool(_) => "delete_pool",
            Self::AddMember { .. } => "add_member",
            Self::AddPayment(_) => "add_payment",
            Self::AddReminder(_) => "add_reminder",
            Self::DeleteReminder(_) => "delete_reminder",
            Self::DeleteMember { .. } => "delete_member",
            Self::DeletePayment { .. } => "delete_payment",
            Self::DeleteProperty { .. } => "delete_property",
        }
    }
}

/// Apply `action` to `state`, stamping the result with `now`
///
/// `ReplaceSnapshot` installs its payload exactly, including its own
/// `last_updated`. Every other action refreshes `last_updated`.
#[must_use]
pub fn reduce(state: &AppData, action: Action, now: &str) -> AppData {
    let mut next = AppData {
        last_updated: now.to_string(),
        ..state.clone()
    };

    match action {
        Action::ReplaceSnapshot(data) => return data,
        Action::AddPool(pool) => next.chitties.push(pool),
        Action::UpdatePool(pool) => {
            next.chitties = map_pool(&next.chitties, &pool.id.clone(), |_| pool.clone());
        },
        Action::DeletePool(id) => next.chitties.retain(|c| c.id != id),
        Action::AddMember { chitty_id, member } => {
            next.chitties = map_pool(&next.chitties, &chitty_id, |c| {
                let mut members = c.members.clone();
                members.push(member.clone());
                Pool { members, ..c.clone() }
            });
        },
        Action::AddPayment(payment) => {
            next.chitties = map_pool(&next.chitties, &payment.chitty_id.clone(), |c| {
                let mut payments = c.payments.clone();
                payments.push(payment.clone());
                Pool { payments, ..c.clone() }
            });
        },
        Action::AddReminder(reminder) => next.reminders.push(reminder),
        Action::DeleteReminder(id) => next.reminders.retain(|r| r.id != id),
        Action::DeleteMember {
            chitty_id,
            member_id,
        } => {
            next.chitties = map_pool(&next.chitties, &chitty_id, |c| Pool {
                members: c.members.iter().filter(|m| m.id != member_id).cloned().collect(),
                ..c.clone()
            });
        },
        Action::DeletePayment {
            chitty_id,
            payment_id,
        } => {
            next.chitties = map_pool(&next.chitties, &chitty_id, |c| Pool {
                payments: c.payments.iter().filter(|p| p.id != payment_id).cloned().collect(),
                ..c.clone()
            });
        },
        Action::DeleteProperty {
            chitty_id,
            property_id,
        } => {
            next.chitties = map_pool(&next.chitties, &chitty_id, |c| {
                // a pool that never had properties keeps `None`
                if c.properties.is_none() { c.clone() } else { c.without_property(&property_id) }
            });
        },
    }

    next
}

/// Rebuild the pool list, transforming only the pool with `id`
fn map_pool(pools: &[Pool], id: &str, f: impl Fn(&Pool) -> Pool) -> Vec<Pool> {
    pools.iter().map(|c| if c.id == id { f(c) } else { c.clone() }).collect()
}
