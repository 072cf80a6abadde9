//! Pool commands - add, list, show, edit, remove

use anyhow::anyhow;

use super::{Context, parse_amount, parse_date, require_pool};
use crate::cli::app::PoolAction;
use chitty::core::models::{Pool, PoolDraft, PoolStatus};
use chitty::core::services::pool_progress;
use chitty::output::{OperationResult, PoolInfo, PoolListResult, PoolShowResult, Render};

/// Handle pool subcommands
pub fn pool(action: PoolAction, ctx: &Context) -> anyhow::Result<()> {
    match action {
        PoolAction::Add {
            name,
            months,
            installment,
            start,
            chitty_no,
            branch,
            owned_by,
            status,
            auction_amount,
            final_amount,
        } => {
            let start_date = match start {
                Some(s) => parse_date(&s)?,
                None => chrono::Local::now().date_naive(),
            };
            let draft = PoolDraft {
                chitty_no,
                branch,
                owned_by,
                status: status.parse().map_err(|e: String| anyhow!(e))?,
                auction_amount: auction_amount.map(|a| parse_amount("auction amount", a)).transpose()?,
                final_amount: final_amount.map(|a| parse_amount("final amount", a)).transpose()?,
                ..PoolDraft::new(name, months, installment, start_date)
            };
            add(draft, ctx)
        },
        PoolAction::List { status } => list(status.as_deref(), ctx),
        PoolAction::Show { id } => show(&id, ctx),
        PoolAction::Edit {
            id,
            name,
            months,
            installment,
            start,
            chitty_no,
            branch,
            owned_by,
            status,
            auction_amount,
            final_amount,
        } => {
            let mut store = ctx.open_store();
            let mut updated = require_pool(&store, &id)?.clone();

            if let Some(name) = name {
                updated.name = name;
            }
            if let Some(months) = months {
                updated.total_months = f64::from(months);
            }
            if let Some(installment) = installment {
                updated.installment_amount = installment;
            }
            if let Some(start) = start {
                updated.start_date = parse_date(&start)?;
            }
            if let Some(no) = chitty_no {
                updated.chitty_no = Some(no).filter(|s| !s.is_empty());
            }
            if let Some(branch) = branch {
                updated.branch = branch;
            }
            if let Some(owner) = owned_by {
                updated.owned_by = Some(owner).filter(|s| !s.is_empty());
            }
            if let Some(status) = status {
                updated.status = status.parse().map_err(|e: String| anyhow!(e))?;
            }
            if let Some(amount) = auction_amount {
                updated.auction_amount = Some(parse_amount("auction amount", amount)?);
            }
            if let Some(amount) = final_amount {
                updated.final_amount = Some(parse_amount("final amount", amount)?);
            }

            check_terms(&updated)?;

            let name = updated.name.clone();
            store.replace_pool(updated);
            OperationResult::ok_with_id(format!("Updated chitty '{name}'"), id).render(ctx.mode());
            Ok(())
        },
        PoolAction::Remove { id } => {
            let mut store = ctx.open_store();
            let name = require_pool(&store, &id)?.name.clone();
            store.delete_pool(&id);
            OperationResult::ok_with_id(format!("Removed chitty '{name}'"), id).render(ctx.mode());
            Ok(())
        },
    }
}

/// Same positivity rules as a new pool
fn check_terms(pool: &Pool) -> anyhow::Result<()> {
    let draft = PoolDraft {
        total_months: pool.total_months,
        ..PoolDraft::new(pool.name.as_str(), 1, pool.installment_amount, pool.start_date)
    };
    draft.validate().map_err(|e| anyhow!(e))
}

fn add(draft: PoolDraft, ctx: &Context) -> anyhow::Result<()> {
    draft.validate().map_err(|e| anyhow!(e))?;

    let mut store = ctx.open_store();
    let name = draft.name.clone();
    let id = store.create_pool(draft);

    OperationResult::ok_with_id(format!("Created chitty '{name}'"), id).render(ctx.mode());
    Ok(())
}

fn list(status: Option<&str>, ctx: &Context) -> anyhow::Result<()> {
    let filter = status
        .map(str::parse::<PoolStatus>)
        .transpose()
        .map_err(|e| anyhow!(e))?;

    let store = ctx.open_store();
    let pools: Vec<PoolInfo> = store
        .snapshot()
        .chitties
        .iter()
        .filter(|p| filter.as_ref().is_none_or(|s| &p.status == s))
        .map(PoolInfo::from)
        .collect();

    PoolListResult {
        total: pools.len(),
        pools,
    }
    .render(ctx.mode());
    Ok(())
}

fn show(id: &str, ctx: &Context) -> anyhow::Result<()> {
    let store = ctx.open_store();
    let pool = require_pool(&store, id)?;

    PoolShowResult {
        progress: pool_progress(pool),
        pool: pool.clone(),
    }
    .render(ctx.mode());
    Ok(())
}
