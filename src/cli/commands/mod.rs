//! Command implementations

mod auth;
mod dashboard;
mod member;
mod payment;
mod pool;
mod property;
mod reminder;
mod transfer;

pub use auth::{login, logout, whoami};
pub use dashboard::dashboard;
pub use member::member;
pub use payment::payment;
pub use pool::pool;
pub use property::property;
pub use reminder::reminder;
pub use transfer::{export, import};

use anyhow::Context as _;
use chrono::NaiveDate;

use chitty::Store;
use chitty::adapters::FileSnapshotStore;
use chitty::config::Config;
use chitty::core::models::{Pool, date};
use chitty::output::OutputMode;

/// Settings shared by every command
#[derive(Debug)]
pub struct Context {
    config: Config,
    mode: OutputMode,
}

impl Context {
    pub const fn new(config: Config, mode: OutputMode) -> Self {
        Self { config, mode }
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Open the store over the configured data directory
    pub fn open_store(&self) -> Store {
        Store::open(Box::new(FileSnapshotStore::new(self.config.data_dir())))
    }
}

/// Look up a pool or fail with a readable message
fn require_pool<'a>(store: &'a Store, id: &str) -> anyhow::Result<&'a Pool> {
    store.pool(id).with_context(|| format!("Chitty not found: {id}"))
}

fn parse_date(input: &str) -> anyhow::Result<NaiveDate> {
    date::parse(input).with_context(|| format!("Invalid date: {input}. Use YYYY-MM-DD"))
}

fn parse_amount(label: &str, amount: f64) -> anyhow::Result<f64> {
    if amount.is_finite() && amount >= 0.0 {
        Ok(amount)
    } else {
        anyhow::bail!("Invalid {label}: {amount}. Must be zero or more")
    }
}
