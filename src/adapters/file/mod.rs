//! File-backed snapshot storage
//!
//! Implements `SnapshotStore` as a small key-value directory: each key is one
//! JSON file, and the snapshot lives under the fixed `app-data` key.

mod store;

pub use store::FileSnapshotStore;
