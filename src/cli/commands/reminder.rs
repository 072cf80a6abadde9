//! Reminder commands - add, list, remove

use super::{Context, parse_date};
use crate::cli::app::ReminderAction;
use chitty::core::models::ReminderDraft;
use chitty::core::services::reminders_by_date;
use chitty::output::{OperationResult, ReminderInfo, ReminderListResult, Render};

/// Handle reminder subcommands
pub fn reminder(action: ReminderAction, ctx: &Context) -> anyhow::Result<()> {
    match action {
        ReminderAction::Add { pool, date, note } => {
            let date = parse_date(&date)?;
            let mut store = ctx.open_store();
            if store.pool(&pool).is_none() {
                log::warn!("No chitty with id {pool}; the reminder will show as unknown");
            }

            let id = store.add_reminder(ReminderDraft {
                chitty_id: pool,
                date,
                note: note.filter(|s| !s.is_empty()),
            });
            OperationResult::ok_with_id(format!("Added reminder for {date}"), id).render(ctx.mode());
            Ok(())
        },
        ReminderAction::List => {
            let store = ctx.open_store();
            let data = store.snapshot();
            let reminders: Vec<ReminderInfo> =
                reminders_by_date(data).into_iter().map(|r| ReminderInfo::new(data, r)).collect();

            ReminderListResult {
                total: reminders.len(),
                reminders,
            }
            .render(ctx.mode());
            Ok(())
        },
        ReminderAction::Remove { id } => {
            let mut store = ctx.open_store();
            if store.snapshot().reminder(&id).is_none() {
                anyhow::bail!("Reminder not found: {id}");
            }

            store.delete_reminder(&id);
            OperationResult::ok_with_id("Removed reminder", id).render(ctx.mode());
            Ok(())
        },
    }
}
