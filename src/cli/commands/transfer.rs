//! Export and import commands

use std::path::{Path, PathBuf};

use super::Context;
use chitty::adapters::transfer::{export_to_dir, import_into};
use chitty::output::{OperationResult, Render};

/// Write the whole snapshot to `chitty_data_<today>.txt`
pub fn export(dir: Option<PathBuf>, ctx: &Context) -> anyhow::Result<()> {
    let dir = dir.unwrap_or_else(|| ctx.config().export_dir());
    let store = ctx.open_store();

    let path = export_to_dir(store.snapshot(), &dir, chrono::Local::now().date_naive())?;

    OperationResult::ok(format!("Exported data to {}", path.display())).render(ctx.mode());
    Ok(())
}

/// Replace the whole snapshot with an export file
pub fn import(file: &Path, ctx: &Context) -> anyhow::Result<()> {
    let mut store = ctx.open_store();
    import_into(&mut store, file)?;

    let data = store.snapshot();
    OperationResult::ok(format!(
        "Imported {} chitty(s) and {} reminder(s) from {}",
        data.chitties.len(),
        data.reminders.len(),
        file.display()
    ))
    .render(ctx.mode());
    Ok(())
}
