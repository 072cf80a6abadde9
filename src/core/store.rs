//! The snapshot store
//!
//! Holds the single current [`AppData`] and exposes the fixed operation set.
//! Each operation builds the new entity (fresh UUID, timestamps), runs the
//! reducer and then saves the whole snapshot through the injected
//! [`SnapshotStore`]. Saving is best-effort: a failed save is logged and
//! the in-memory snapshot stays as it is.
//!
//! A record that fails to load is never saved over. It is set aside
//! first, and if that is not possible saves stay off until an import
//! replaces the snapshot.

use log::{debug, warn};
use uuid::Uuid;

use crate::core::models::{
    AppData, MemberDraft, PaymentDraft, Pool, PoolDraft, Reminder, ReminderDraft,
};
use crate::core::ports::SnapshotStore;
use crate::core::services::reducer::{Action, reduce};

/// In-memory snapshot plus its persistence port
pub struct Store {
    data: AppData,
    persistence: Box<dyn SnapshotStore>,
    saves_blocked: bool,
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("pools", &self.data.chitties.len())
            .field("reminders", &self.data.reminders.len())
            .field("last_updated", &self.data.last_updated)
            .field("saves_blocked", &self.saves_blocked)
            .finish_non_exhaustive()
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

impl Store {
    /// Create a store with an empty snapshot, without loading
    #[must_use]
    pub fn new(persistence: Box<dyn SnapshotStore>) -> Self {
        Self {
            data: AppData::default(),
            persistence,
            saves_blocked: false,
        }
    }

    /// Create a store and populate it from durable storage
    ///
    /// A missing record (first run) or a failed load both start empty. On a
    /// failed load the unreadable record is set aside before anything can
    /// overwrite it.
    #[must_use]
    pub fn open(persistence: Box<dyn SnapshotStore>) -> Self {
        let mut store = Self::new(persistence);
        match store.persistence.load() {
            Ok(Some(data)) => {
                debug!(
                    "Loaded snapshot: {} pool(s), {} reminder(s)",
                    data.chitties.len(),
                    data.reminders.len()
                );
                store.data = reduce(&store.data, Action::ReplaceSnapshot(data), &now());
            },
            Ok(None) => debug!("No saved snapshot, starting empty"),
            Err(e) => {
                warn!("Failed to load saved snapshot, starting empty: {e}");
                store.saves_blocked = match store.persistence.set_aside() {
                    Ok(Some(_)) => false,
                    Ok(None) => {
                        warn!("Saved snapshot could not be set aside, saving is off until import");
                        true
                    },
                    Err(e) => {
                        warn!("Failed to set aside saved snapshot, saving is off until import: {e}");
                        true
                    },
                };
            },
        }
        store
    }

    /// Whether saves are held back to protect an unreadable record
    #[must_use]
    pub const fn saves_blocked(&self) -> bool {
        self.saves_blocked
    }

    /// Current snapshot
    #[must_use]
    pub const fn snapshot(&self) -> &AppData {
        &self.data
    }

    /// Find a pool by id
    #[must_use]
    pub fn pool(&self, id: &str) -> Option<&Pool> {
        self.data.pool(id)
    }

    /// Name of a reminder's pool, or "Unknown chitty" if it is gone
    #[must_use]
    pub fn reminder_pool_name(&self, reminder: &Reminder) -> &str {
        self.data.reminder_pool_name(reminder)
    }

    /// Apply an action, then save the result
    pub fn dispatch(&mut self, action: Action) {
        debug!("dispatch {}", action.name());
        self.data = reduce(&self.data, action, &now());
        self.persist();
    }

    fn persist(&self) {
        if self.saves_blocked {
            warn!("Not saving: the stored snapshot could not be read");
            return;
        }
        if let Err(e) = self.persistence.save(&self.data) {
            warn!("Failed to save snapshot: {e}");
        }
    }

    /// Replace the snapshot wholesale (import)
    ///
    /// Also turns saving back on after a failed load.
    pub fn replace_snapshot(&mut self, data: AppData) {
        self.saves_blocked = false;
        self.dispatch(Action::ReplaceSnapshot(data));
    }

    /// Create a pool with no members or payments, returning its id
    pub fn create_pool(&mut self, draft: PoolDraft) -> String {
        let id = new_id();
        self.dispatch(Action::AddPool(draft.into_pool(id.clone())));
        id
    }

    /// Substitute the pool with the same id; unknown ids are ignored
    pub fn replace_pool(&mut self, pool: Pool) {
        self.dispatch(Action::UpdatePool(pool));
    }

    /// Remove a pool with its members, payments and properties
    ///
    /// Reminders pointing at the pool are kept.
    pub fn delete_pool(&mut self, id: &str) {
        self.dispatch(Action::DeletePool(id.to_string()));
    }

    /// Append a member to a pool, returning the member id
    ///
    /// The member is silently dropped if the pool does not exist.
    pub fn add_member(&mut self, chitty_id: &str, draft: MemberDraft) -> String {
        let id = new_id();
        let member = draft.into_member(id.clone(), now());
        self.dispatch(Action::AddMember {
            chitty_id: chitty_id.to_string(),
            member,
        });
        id
    }

    /// Append a payment to its owning pool, returning the payment id
    ///
    /// Dropped if `draft.chitty_id` names no pool.
    pub fn add_payment(&mut self, draft: PaymentDraft) -> String {
        let id = new_id();
        self.dispatch(Action::AddPayment(draft.into_payment(id.clone(), now())));
        id
    }

    /// Append a reminder, returning its id
    ///
    /// The referenced pool does not have to exist.
    pub fn add_reminder(&mut self, draft: ReminderDraft) -> String {
        let id = new_id();
        self.dispatch(Action::AddReminder(draft.into_reminder(id.clone())));
        id
    }

    /// Remove a reminder
    pub fn delete_reminder(&mut self, id: &str) {
        self.dispatch(Action::DeleteReminder(id.to_string()));
    }

    /// Remove a member from a pool; its payments are kept
    pub fn delete_member(&mut self, chitty_id: &str, member_id: &str) {
        self.dispatch(Action::DeleteMember {
            chitty_id: chitty_id.to_string(),
            member_id: member_id.to_string(),
        });
    }

    /// Remove a payment from a pool
    pub fn delete_payment(&mut self, chitty_id: &str, payment_id: &str) {
        self.dispatch(Action::DeletePayment {
            chitty_id: chitty_id.to_string(),
            payment_id: payment_id.to_string(),
        });
    }

    /// Remove a property from a pool
    pub fn delete_property(&mut self, chitty_id: &str, property_id: &str) {
        self.dispatch(Action::DeleteProperty {
            chitty_id: chitty_id.to_string(),
            property_id: property_id.to_string(),
        });
    }
}
