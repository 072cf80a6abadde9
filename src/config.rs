//! Configuration management
//!
//! User settings live in `~/.chitty/config.toml`. Every field is optional;
//! anything left out falls back to the paths in [`crate::paths`].
//!
//! ```toml
//! [storage]
//! data_dir = "/home/me/chitty-data"
//!
//! [export]
//! dir = "/home/me/backups"
//!
//! [auth]
//! credentials_file = "/home/me/.chitty/credentials.txt"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// chitty configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// Login gate settings
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Snapshot storage settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the snapshot record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

/// Export settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exports are written to (default: current directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Login gate settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Plaintext `email:password` list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_file: Option<PathBuf>,
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::config_file()
    }

    /// Load config from disk, or defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from a specific file, or defaults if missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid config {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Save config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Directory holding the snapshot record
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.storage.data_dir.clone().unwrap_or_else(paths::data_dir)
    }

    /// Directory exports are written to
    #[must_use]
    pub fn export_dir(&self) -> PathBuf {
        self.export.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Plaintext credential list
    #[must_use]
    pub fn credentials_file(&self) -> PathBuf {
        self.auth.credentials_file.clone().unwrap_or_else(paths::credentials_file)
    }
}
