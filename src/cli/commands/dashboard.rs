//! Dashboard command

use super::Context;
use chitty::core::models::PoolStatus;
use chitty::core::services::{
    ACTIVITY_FEED_LIMIT, UPCOMING_REMINDER_LIMIT, activity_feed, dashboard_stats, upcoming_reminders,
};
use chitty::output::{DashboardResult, PoolInfo, ReminderInfo, Render};

/// Show counters, upcoming reminders, running pools and recent payments
pub fn dashboard(ctx: &Context) -> anyhow::Result<()> {
    let store = ctx.open_store();
    let data = store.snapshot();

    DashboardResult {
        stats: dashboard_stats(data),
        last_updated: data.last_updated.clone(),
        upcoming_reminders: upcoming_reminders(data, UPCOMING_REMINDER_LIMIT)
            .into_iter()
            .map(|r| ReminderInfo::new(data, r))
            .collect(),
        running: data
            .chitties
            .iter()
            .filter(|c| c.status == PoolStatus::Running)
            .map(PoolInfo::from)
            .collect(),
        activity: activity_feed(data, ACTIVITY_FEED_LIMIT),
    }
    .render(ctx.mode());
    Ok(())
}
