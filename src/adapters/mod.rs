//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `file/` - Snapshot persistence in a key-value directory
//! - `memory` - In-process snapshot persistence
//! - `transfer` - Export/import of the snapshot as a text file
//! - `credentials` - Placeholder plaintext login gate and session file

pub mod credentials;
pub mod file;
pub mod memory;
pub mod transfer;

pub use credentials::CredentialFileAuthenticator;
pub use file::FileSnapshotStore;
pub use memory::MemorySnapshotStore;
