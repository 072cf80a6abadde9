//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use chitty::core::models::{AppData, PoolStatus};
use chitty::core::services::{PropertyTotals, dashboard_stats};
use chitty::output::{
    DashboardResult, OperationResult, OutputMode, PaymentInfo, PoolInfo, PropertyListResult,
    ReminderInfo, format_amount,
};

use crate::common::{day, diwali_fund, payment, populated_store, reminder};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn amounts_drop_zero_fraction() {
    assert_eq!(format_amount(5000.0), "₹5000");
    assert_eq!(format_amount(2500.5), "₹2500.50");
}

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn operation_result_skips_missing_id() {
    let json = serde_json::to_string(&OperationResult::ok("Signed out")).unwrap();
    assert_eq!(json, r#"{"success":true,"message":"Signed out"}"#);

    let json = serde_json::to_string(&OperationResult::ok_with_id("Created", "c1")).unwrap();
    assert!(json.contains(r#""id":"c1""#));
}

#[test]
fn pool_info_counts_children() {
    let (_, store, pool_id, _, _) = populated_store();
    let info = PoolInfo::from(store.pool(&pool_id).unwrap());

    assert_eq!(info.members, 1);
    assert_eq!(info.payments, 1);
    assert_eq!(info.properties, 0);
    assert_eq!(info.start_date, "2024-01-01");

    let json = serde_json::to_string(&info).unwrap();
    assert!(json.contains(r#""status":"running""#));
}

#[test]
fn payment_info_falls_back_to_member_label() {
    let (_, mut store, pool_id, _, _) = populated_store();
    store.add_payment(payment(&pool_id, "gone", 2, 5000.0));
    let pool = store.pool(&pool_id).unwrap();

    let known = PaymentInfo::new(pool, &pool.payments[0]);
    let unknown = PaymentInfo::new(pool, &pool.payments[1]);
    assert_eq!(known.member_name, "Lakshmi");
    assert_eq!(unknown.member_name, "Member");
    assert_eq!(unknown.status, "paid");
}

#[test]
fn reminder_info_names_missing_pool() {
    let mut data = AppData::default();
    let pool = diwali_fund().into_pool("c1".to_string());
    data.chitties.push(pool);
    data.reminders.push(reminder("c1", day(2024, 2, 1)).into_reminder("r1".to_string()));
    data.reminders.push(reminder("c2", day(2024, 2, 2)).into_reminder("r2".to_string()));

    let known = ReminderInfo::new(&data, &data.reminders[0]);
    let unknown = ReminderInfo::new(&data, &data.reminders[1]);
    assert_eq!(known.chitty_name, "Diwali Fund");
    assert_eq!(unknown.chitty_name, "Unknown chitty");
    assert_eq!(unknown.date, "2024-02-02");
}

#[test]
fn dashboard_result_serialization() {
    let mut data = AppData::default();
    let mut draft = diwali_fund();
    draft.status = PoolStatus::RunningAuctioned;
    data.chitties.push(draft.into_pool("c1".to_string()));

    let result = DashboardResult {
        stats: dashboard_stats(&data),
        last_updated: data.last_updated.clone(),
        upcoming_reminders: vec![],
        running: vec![],
        activity: vec![],
    };

    let json: serde_json::Value = serde_json::to_value(&result).unwrap();
    assert_eq!(json["stats"]["total"], 1);
    assert_eq!(json["stats"]["auctioned"], 1);
    assert_eq!(json["stats"]["coming_auctions"], 0);
}

#[test]
fn property_list_serialization() {
    let result = PropertyListResult {
        totals: PropertyTotals::default(),
        properties: vec![],
    };
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains(r#""count":0"#));
    assert!(json.contains(r#""properties":[]"#));
}
