//! Property commands - add, edit, list, remove
//!
//! Properties have no store operation of their own: adding or editing one
//! builds an updated copy of the pool and replaces it.

use uuid::Uuid;

use super::{Context, parse_amount, require_pool};
use crate::cli::app::PropertyAction;
use chitty::core::models::PropertyDraft;
use chitty::core::services::property_totals;
use chitty::output::{OperationResult, PropertyInfo, PropertyListResult, Render};

/// Handle property subcommands
pub fn property(action: PropertyAction, ctx: &Context) -> anyhow::Result<()> {
    match action {
        PropertyAction::Add {
            pool,
            holder,
            location,
            measurement,
            value,
            given,
            pending,
        } => {
            if holder.trim().is_empty() {
                anyhow::bail!("Holder name must not be empty");
            }
            let draft = PropertyDraft {
                holder_name: holder.trim().to_string(),
                location,
                measurement,
                value: parse_amount("value", value)?,
                given_amount: parse_amount("given amount", given)?,
                pending_amount: pending.map(|p| parse_amount("pending amount", p)).transpose()?,
            };

            let mut store = ctx.open_store();
            let target = require_pool(&store, &pool)?;
            let id = Uuid::new_v4().to_string();
            let updated = target.with_property(draft.into_property(id.clone()));
            let name = updated.name.clone();

            store.replace_pool(updated);
            OperationResult::ok_with_id(format!("Added property to '{name}'"), id).render(ctx.mode());
            Ok(())
        },
        PropertyAction::Edit {
            pool,
            property,
            holder,
            location,
            measurement,
            value,
            given,
            pending,
        } => {
            let mut store = ctx.open_store();
            let target = require_pool(&store, &pool)?;
            let mut edited = target
                .properties()
                .iter()
                .find(|p| p.id == property)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("Property not found: {property}"))?;

            if let Some(holder) = holder {
                edited.holder_name = holder;
            }
            if let Some(location) = location {
                edited.location = location;
            }
            if let Some(measurement) = measurement {
                edited.measurement = measurement;
            }
            if let Some(value) = value {
                edited.value = parse_amount("value", value)?;
            }
            if let Some(given) = given {
                edited.given_amount = parse_amount("given amount", given)?;
            }
            if let Some(pending) = pending {
                edited.pending_amount = parse_amount("pending amount", pending)?;
            }

            let updated = target.with_updated_property(edited);
            store.replace_pool(updated);
            OperationResult::ok_with_id("Updated property", property).render(ctx.mode());
            Ok(())
        },
        PropertyAction::List { pool } => {
            let store = ctx.open_store();
            if let Some(id) = &pool {
                require_pool(&store, id)?;
            }

            let data = store.snapshot();
            let properties: Vec<PropertyInfo> = data
                .chitties
                .iter()
                .filter(|c| pool.as_ref().is_none_or(|id| &c.id == id))
                .flat_map(|c| {
                    c.properties().iter().map(move |p| PropertyInfo {
                        id: p.id.clone(),
                        chitty_id: c.id.clone(),
                        chitty_name: c.name.clone(),
                        holder_name: p.holder_name.clone(),
                        location: p.location.clone(),
                        measurement: p.measurement.clone(),
                        value: p.value,
                        given_amount: p.given_amount,
                        pending_amount: p.pending_amount,
                    })
                })
                .collect();

            let totals = property_totals(
                data.chitties.iter().filter(|c| pool.as_ref().is_none_or(|id| &c.id == id)),
            );

            PropertyListResult { totals, properties }.render(ctx.mode());
            Ok(())
        },
        PropertyAction::Remove { pool, property } => {
            let mut store = ctx.open_store();
            if !require_pool(&store, &pool)?.properties().iter().any(|p| p.id == property) {
                anyhow::bail!("Property not found: {property}");
            }

            store.delete_property(&pool, &property);
            OperationResult::ok_with_id("Removed property", property).render(ctx.mode());
            Ok(())
        },
    }
}
