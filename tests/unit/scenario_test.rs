//! The Diwali Fund walkthrough: create, pay, delete

use chitty::core::models::UNKNOWN_POOL;

use crate::common::{day, diwali_fund, memory_store, payment, reminder};

#[test]
fn test_diwali_fund_lifecycle() {
    let (persistence, mut store) = memory_store();

    // Create
    let pool_id = store.create_pool(diwali_fund());
    let data = store.snapshot();
    assert_eq!(data.chitties.len(), 1);
    let pool = &data.chitties[0];
    assert_eq!(pool.total_months, 20.0);
    assert!((pool.installment_amount - 5000.0).abs() < f64::EPSILON);
    assert!(pool.members.is_empty());
    assert!(pool.payments.is_empty());

    // Pay month 3
    let reminder_id = store.add_reminder(reminder(&pool_id, day(2024, 3, 10)));
    let before = store.pool(&pool_id).unwrap().clone();
    store.add_payment(payment(&pool_id, "m-1", 3, 5000.0));

    let pool = store.pool(&pool_id).unwrap();
    assert_eq!(pool.payments.len(), 1);
    assert_eq!(pool.payments[0].month_index, 3.0);
    assert!((pool.payments[0].amount - 5000.0).abs() < f64::EPSILON);
    assert_eq!(pool.members, before.members);
    assert_eq!(pool.properties, before.properties);

    // Delete
    store.delete_pool(&pool_id);
    let data = store.snapshot();
    assert!(data.chitties.is_empty());
    let orphan = data.reminder(&reminder_id).unwrap();
    assert_eq!(data.reminder_pool_name(orphan), UNKNOWN_POOL);

    // Every step was saved
    assert_eq!(persistence.saved().as_ref(), Some(store.snapshot()));
}
