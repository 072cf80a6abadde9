//! Tests for the snapshot store operations

use chitty::core::models::{MemberDraft, UNKNOWN_POOL};

use crate::common::{day, diwali_fund, memory_store, payment, populated_store, reminder};

// =============================================================================
// POOL OPERATIONS
// =============================================================================

#[test]
fn test_create_pool_assigns_unique_ids() {
    let (_, mut store) = memory_store();
    let a = store.create_pool(diwali_fund());
    let b = store.create_pool(diwali_fund());

    assert_ne!(a, b);
    assert_eq!(store.snapshot().chitties.len(), 2);
}

#[test]
fn test_create_pool_keeps_fields_and_starts_empty() {
    let (_, mut store) = memory_store();
    let mut draft = diwali_fund();
    draft.branch = "Thrissur".to_string();
    draft.chitty_no = Some("KSFE-42".to_string());
    let id = store.create_pool(draft);

    let pool = store.pool(&id).unwrap();
    assert_eq!(pool.name, "Diwali Fund");
    assert_eq!(pool.branch, "Thrissur");
    assert_eq!(pool.chitty_no.as_deref(), Some("KSFE-42"));
    assert_eq!(pool.start_date, day(2024, 1, 1));
    assert!(pool.members.is_empty());
    assert!(pool.payments.is_empty());
    assert!(pool.properties.is_none());
}

#[test]
fn test_replace_pool_is_idempotent() {
    let (_, mut store, pool_id, _, _) = populated_store();
    let mut edited = store.pool(&pool_id).unwrap().clone();
    edited.name = "Onam Fund".to_string();

    store.replace_pool(edited.clone());
    let once = store.snapshot().chitties.clone();
    store.replace_pool(edited);

    assert_eq!(store.snapshot().chitties, once);
    assert_eq!(store.pool(&pool_id).unwrap().name, "Onam Fund");
}

#[test]
fn test_replace_unknown_pool_is_noop() {
    let (_, mut store, pool_id, _, _) = populated_store();
    let before = store.snapshot().chitties.clone();

    let mut stray = store.pool(&pool_id).unwrap().clone();
    stray.id = "missing".to_string();
    store.replace_pool(stray);

    assert_eq!(store.snapshot().chitties, before);
}

#[test]
fn test_delete_pool_keeps_other_pools_and_reminders() {
    let (_, mut store, pool_id, _, reminder_id) = populated_store();
    let other = store.create_pool(diwali_fund());

    store.delete_pool(&pool_id);

    let data = store.snapshot();
    assert_eq!(data.chitties.len(), 1);
    assert_eq!(data.chitties[0].id, other);
    let orphan = data.reminder(&reminder_id).unwrap();
    assert_eq!(store.reminder_pool_name(orphan), UNKNOWN_POOL);
}

#[test]
fn test_delete_unknown_pool_is_noop() {
    let (_, mut store, _, _, _) = populated_store();
    let before = store.snapshot().chitties.clone();
    store.delete_pool("missing");
    assert_eq!(store.snapshot().chitties, before);
}

// =============================================================================
// CHILD RECORDS
// =============================================================================

#[test]
fn test_add_member_records_join_time() {
    let (_, mut store) = memory_store();
    let pool_id = store.create_pool(diwali_fund());
    let draft = MemberDraft {
        phone: Some("9447000000".to_string()),
        ..MemberDraft::named("Lakshmi")
    };
    let member_id = store.add_member(&pool_id, draft);

    let member = store.pool(&pool_id).unwrap().member(&member_id).unwrap();
    assert_eq!(member.name, "Lakshmi");
    assert_eq!(member.phone.as_deref(), Some("9447000000"));
    assert!(chrono::DateTime::parse_from_rfc3339(&member.joined_date).is_ok());
}

#[test]
fn test_add_member_to_missing_pool_is_dropped() {
    let (_, mut store, _, _, _) = populated_store();
    let before = store.snapshot().chitties.clone();
    store.add_member("missing", MemberDraft::named("Ghost"));
    assert_eq!(store.snapshot().chitties, before);
}

#[test]
fn test_add_payment_to_missing_pool_is_dropped() {
    let (_, mut store, _, member_id, _) = populated_store();
    let before = store.snapshot().chitties.clone();
    store.add_payment(payment("missing", &member_id, 2, 5000.0));
    assert_eq!(store.snapshot().chitties, before);
}

#[test]
fn test_duplicate_payments_are_allowed() {
    let (_, mut store, pool_id, member_id, _) = populated_store();
    store.add_payment(payment(&pool_id, &member_id, 1, 5000.0));
    assert_eq!(store.pool(&pool_id).unwrap().payments.len(), 2);
}

#[test]
fn test_add_reminder_for_missing_pool_is_kept() {
    let (_, mut store) = memory_store();
    let id = store.add_reminder(reminder("missing", day(2024, 3, 1)));

    let data = store.snapshot();
    let stored = data.reminder(&id).unwrap();
    assert_eq!(data.reminder_pool_name(stored), UNKNOWN_POOL);
}

#[test]
fn test_delete_reminder() {
    let (_, mut store, _, _, reminder_id) = populated_store();
    store.delete_reminder("missing");
    assert_eq!(store.snapshot().reminders.len(), 1);

    store.delete_reminder(&reminder_id);
    assert!(store.snapshot().reminders.is_empty());
}

#[test]
fn test_delete_member_keeps_payments() {
    let (_, mut store, pool_id, member_id, _) = populated_store();
    store.delete_member(&pool_id, &member_id);

    let pool = store.pool(&pool_id).unwrap();
    assert!(pool.members.is_empty());
    assert_eq!(pool.payments.len(), 1);
    assert_eq!(pool.member_name(&pool.payments[0].member_id), "Member");
}

#[test]
fn test_delete_payment() {
    let (_, mut store, pool_id, _, _) = populated_store();
    let payment_id = store.pool(&pool_id).unwrap().payments[0].id.clone();

    store.delete_payment("missing", &payment_id);
    assert_eq!(store.pool(&pool_id).unwrap().payments.len(), 1);

    store.delete_payment(&pool_id, &payment_id);
    assert!(store.pool(&pool_id).unwrap().payments.is_empty());
}

// =============================================================================
// PERSISTENCE POLICY
// =============================================================================

#[test]
fn test_every_mutation_is_saved() {
    let (persistence, mut store) = memory_store();
    assert_eq!(persistence.save_count(), 0);

    let pool_id = store.create_pool(diwali_fund());
    store.add_member(&pool_id, MemberDraft::named("Lakshmi"));
    store.delete_reminder("missing");

    assert_eq!(persistence.save_count(), 3);
    assert_eq!(persistence.saved().as_ref(), Some(store.snapshot()));
}

#[test]
fn test_failed_save_keeps_memory_snapshot() {
    let (persistence, mut store) = memory_store();
    let first = store.create_pool(diwali_fund());
    persistence.set_fail_saves(true);

    let second = store.create_pool(diwali_fund());

    assert!(store.pool(&second).is_some());
    let saved = persistence.saved().unwrap();
    assert!(saved.pool(&first).is_some());
    assert!(saved.pool(&second).is_none());

    persistence.set_fail_saves(false);
    store.delete_pool(&first);
    assert_eq!(persistence.saved().as_ref(), Some(store.snapshot()));
}

#[test]
fn test_open_restores_saved_snapshot() {
    let (persistence, store, pool_id, _, _) = populated_store();
    let expected = store.snapshot().clone();
    drop(store);

    let reopened = chitty::Store::open(Box::new(persistence));
    assert_eq!(reopened.snapshot(), &expected);
    assert!(reopened.pool(&pool_id).is_some());
}

#[test]
fn test_mutations_touch_last_updated() {
    let (_, mut store) = memory_store();
    let mut stale = store.snapshot().clone();
    stale.last_updated = "2000-01-01T00:00:00+00:00".to_string();
    store.replace_snapshot(stale);
    assert_eq!(store.snapshot().last_updated, "2000-01-01T00:00:00+00:00");

    store.create_pool(diwali_fund());
    assert_ne!(store.snapshot().last_updated, "2000-01-01T00:00:00+00:00");
}

#[test]
fn test_open_installs_saved_snapshot_exactly() {
    let mut saved = chitty::core::models::AppData::default();
    saved.last_updated = "2024-02-01T09:30:00.000Z".to_string();
    saved.chitties.push(diwali_fund().into_pool("c1".to_string()));

    let persistence = chitty::adapters::MemorySnapshotStore::with_snapshot(saved.clone());
    let store = chitty::Store::open(Box::new(persistence));

    assert_eq!(store.snapshot(), &saved);
}

#[test]
fn test_unreadable_record_is_never_saved_over() {
    let (persistence, mut store, pool_id, _, _) = populated_store();
    let original = persistence.saved().unwrap();
    drop(store);

    persistence.set_fail_loads(true);
    store = chitty::Store::open(Box::new(std::sync::Arc::clone(&persistence)));
    assert!(store.snapshot().chitties.is_empty());
    assert!(store.saves_blocked());

    let saves = persistence.save_count();
    store.create_pool(diwali_fund());
    assert_eq!(persistence.save_count(), saves);
    assert_eq!(persistence.saved().unwrap(), original);

    // An import replaces the snapshot and turns saving back on
    store.replace_snapshot(original.clone());
    assert!(!store.saves_blocked());
    assert_eq!(persistence.save_count(), saves + 1);
    assert!(persistence.saved().unwrap().pool(&pool_id).is_some());
}
