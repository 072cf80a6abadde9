//! Core domain logic for chitty
//!
//! This module contains the snapshot model and the logic that changes it.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Pool, Member, Payment, Property, Reminder, `AppData`)
//! - `services/` - Pure logic (the reducer and derived summary views)
//! - `ports/` - Trait definitions for external dependencies
//! - `store` - The stateful store tying the reducer to a persistence port

pub mod models;
pub mod ports;
pub mod services;
pub mod store;

pub use store::Store;
