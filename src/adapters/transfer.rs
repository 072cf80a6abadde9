//! Export and import of the whole snapshot
//!
//! Export writes the snapshot as indented JSON to `chitty_data_<date>.txt`.
//! Import reads a user file, checks that it carries a `chitties` array,
//! decodes it and only then replaces the store's snapshot. Any failure
//! leaves the store untouched.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::info;

use crate::core::Store;
use crate::core::models::AppData;
use crate::error::{ChittyError, Result};

/// Prefix of every export file name
pub const EXPORT_PREFIX: &str = "chitty_data_";

/// Extension of every export file name
pub const EXPORT_EXTENSION: &str = "txt";

/// Serialize the snapshot as indented JSON
pub fn export_to_string(data: &AppData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// File name for an export made on `date`
#[must_use]
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{EXPORT_PREFIX}{}.{EXPORT_EXTENSION}", date.format("%Y-%m-%d"))
}

/// Write an export into `dir`, returning the file written
pub fn export_to_dir(data: &AppData, dir: &Path, date: NaiveDate) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| ChittyError::io(dir, e))?;
    let path = dir.join(export_file_name(date));
    let content = export_to_string(data)?;
    fs::write(&path, content).map_err(|e| ChittyError::io(&path, e))?;
    info!(
        "Exported {} pool(s) and {} reminder(s) to {}",
        data.chitties.len(),
        data.reminders.len(),
        path.display()
    );
    Ok(path)
}

/// Parse and validate the text of an import file
pub fn parse_import(text: &str) -> Result<AppData> {
    let document: serde_json::Value = serde_json::from_str(text)?;
    AppData::from_document(document)
}

/// Read and validate an import file
pub fn import_from_path(path: &Path) -> Result<AppData> {
    let text = fs::read_to_string(path).map_err(|e| ChittyError::io(path, e))?;
    parse_import(&text)
}

/// Import a file into the store, replacing its snapshot on success
pub fn import_into(store: &mut Store, path: &Path) -> Result<()> {
    let data = import_from_path(path)?;
    info!(
        "Importing {} pool(s) and {} reminder(s) from {}",
        data.chitties.len(),
        data.reminders.len(),
        path.display()
    );
    store.replace_snapshot(data);
    Ok(())
}
