//! Payment commands - add, list, remove

use anyhow::anyhow;

use super::{Context, parse_amount, require_pool};
use crate::cli::app::PaymentAction;
use chitty::core::models::{PaymentDraft, PaymentStatus};
use chitty::output::{OperationResult, PaymentInfo, PaymentListResult, Render};

/// Handle payment subcommands
pub fn payment(action: PaymentAction, ctx: &Context) -> anyhow::Result<()> {
    match action {
        PaymentAction::Add {
            pool,
            member,
            month,
            amount,
            status,
            notes,
        } => {
            let status: PaymentStatus = status.parse().map_err(|e: String| anyhow!(e))?;
            let mut store = ctx.open_store();
            let target = require_pool(&store, &pool)?;

            let member_name = target
                .member(&member)
                .map(|m| m.name.clone())
                .ok_or_else(|| anyhow!("Member not found in '{}': {member}", target.name))?;
            if month == 0 || f64::from(month) > target.total_months {
                anyhow::bail!(
                    "Invalid month: {month}. '{}' runs for months 1 to {}",
                    target.name,
                    target.total_months
                );
            }
            let amount = parse_amount("amount", amount.unwrap_or(target.installment_amount))?;

            let id = store.add_payment(PaymentDraft {
                chitty_id: pool,
                member_id: member,
                month_index: f64::from(month),
                amount,
                status,
                notes: notes.filter(|s| !s.is_empty()),
            });

            OperationResult::ok_with_id(format!("Recorded month {month} payment for {member_name}"), id)
                .render(ctx.mode());
            Ok(())
        },
        PaymentAction::List { pool, member } => {
            let store = ctx.open_store();
            if let Some(id) = &pool {
                require_pool(&store, id)?;
            }

            let payments: Vec<PaymentInfo> = store
                .snapshot()
                .chitties
                .iter()
                .filter(|c| pool.as_ref().is_none_or(|id| &c.id == id))
                .flat_map(|c| c.payments.iter().map(move |p| PaymentInfo::new(c, p)))
                .filter(|p| member.as_ref().is_none_or(|id| &p.member_id == id))
                .collect();

            PaymentListResult {
                total: payments.len(),
                payments,
            }
            .render(ctx.mode());
            Ok(())
        },
        PaymentAction::Remove { pool, payment } => {
            let mut store = ctx.open_store();
            if !require_pool(&store, &pool)?.payments.iter().any(|p| p.id == payment) {
                anyhow::bail!("Payment not found: {payment}");
            }

            store.delete_payment(&pool, &payment);
            OperationResult::ok_with_id("Removed payment", payment).render(ctx.mode());
            Ok(())
        },
    }
}
