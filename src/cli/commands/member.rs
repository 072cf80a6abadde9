//! Member commands - add, list, remove

use super::{Context, require_pool};
use crate::cli::app::MemberAction;
use chitty::core::models::MemberDraft;
use chitty::core::services::member_directory;
use chitty::output::{MemberListResult, OperationResult, Render};

/// Handle member subcommands
pub fn member(action: MemberAction, ctx: &Context) -> anyhow::Result<()> {
    match action {
        MemberAction::Add {
            pool,
            name,
            phone,
            email,
        } => {
            if name.trim().is_empty() {
                anyhow::bail!("Member name must not be empty");
            }
            let mut store = ctx.open_store();
            let pool_name = require_pool(&store, &pool)?.name.clone();

            let draft = MemberDraft {
                phone: phone.filter(|s| !s.is_empty()),
                email: email.filter(|s| !s.is_empty()),
                ..MemberDraft::named(name.trim())
            };
            let id = store.add_member(&pool, draft);

            OperationResult::ok_with_id(format!("Added {} to '{pool_name}'", name.trim()), id)
                .render(ctx.mode());
            Ok(())
        },
        MemberAction::List { pool } => {
            let store = ctx.open_store();
            if let Some(id) = &pool {
                require_pool(&store, id)?;
            }
            let members: Vec<_> = member_directory(store.snapshot())
                .into_iter()
                .filter(|m| pool.as_ref().is_none_or(|id| &m.chitty_id == id))
                .collect();

            MemberListResult {
                total: members.len(),
                members,
            }
            .render(ctx.mode());
            Ok(())
        },
        MemberAction::Remove { pool, member } => {
            let mut store = ctx.open_store();
            let name = require_pool(&store, &pool)?
                .member(&member)
                .map(|m| m.name.clone())
                .ok_or_else(|| anyhow::anyhow!("Member not found: {member}"))?;

            store.delete_member(&pool, &member);
            OperationResult::ok_with_id(format!("Removed member {name}"), member).render(ctx.mode());
            Ok(())
        },
    }
}
