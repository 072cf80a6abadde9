//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the store and the systems it
//! talks to (durable storage, the login gate). Implementations live in the
//! `adapters` module.
//!
//! The store depends only on these traits, never on concrete adapters.

mod authenticator;
mod snapshot_store;

pub use authenticator::{Authenticator, User};
pub use snapshot_store::{DATA_KEY, SnapshotStore};
