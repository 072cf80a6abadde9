//! Centralized path definitions for chitty
//!
//! This module provides a single source of truth for all filesystem paths
//! used by chitty.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.chitty/                    # base directory ($CHITTY_HOME overrides)
//! ├── config.toml               # user configuration
//! ├── credentials.txt           # placeholder login list (email:password)
//! ├── session.json              # signed-in user
//! └── data/
//!     └── app-data.json         # the snapshot record
//! ```

use std::path::PathBuf;

/// Environment variable overriding the base directory
pub const HOME_ENV: &str = "CHITTY_HOME";

/// Base directory name under the user's home
const BASE_DIR: &str = ".chitty";

/// Configuration filename
const CONFIG_FILE: &str = "config.toml";

/// Snapshot record directory
const DATA_DIR: &str = "data";

/// Placeholder credential list
const CREDENTIALS_FILE: &str = "credentials.txt";

/// Session filename
const SESSION_FILE: &str = "session.json";

/// Get the base directory.
///
/// Returns `$CHITTY_HOME` when set, otherwise `~/.chitty/`.
#[must_use]
pub fn base_dir() -> PathBuf {
    std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()).map_or_else(
        || dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(BASE_DIR),
        PathBuf::from,
    )
}

/// Get the config file path.
#[must_use]
pub fn config_file() -> PathBuf {
    base_dir().join(CONFIG_FILE)
}

/// Get the default snapshot directory.
#[must_use]
pub fn data_dir() -> PathBuf {
    base_dir().join(DATA_DIR)
}

/// Get the default credential list path.
#[must_use]
pub fn credentials_file() -> PathBuf {
    base_dir().join(CREDENTIALS_FILE)
}

/// Get the session file path.
#[must_use]
pub fn session_file() -> PathBuf {
    base_dir().join(SESSION_FILE)
}
