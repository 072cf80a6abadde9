//! Domain types for chitty
//!
//! Core abstractions:
//! - Pool: a savings circle owning its members, payments and properties
//! - Member / Payment / Property: records nested inside a pool
//! - Reminder: a dated note that references a pool by id
//! - `AppData`: the whole persisted document
//!
//! Each entity has a matching `*Draft` type carrying only the fields a
//! caller may edit; the store fills in identity and timestamps.

pub mod date;
mod member;
mod payment;
mod pool;
mod property;
mod reminder;
mod snapshot;

pub use member::{Member, MemberDraft};
pub use payment::{Payment, PaymentDraft, PaymentStatus};
pub use pool::{Pool, PoolDraft, PoolStatus, UNKNOWN_MEMBER};
pub use property::{Property, PropertyDraft};
pub use reminder::{Reminder, ReminderDraft};
pub use snapshot::{AppData, SCHEMA_VERSION, UNKNOWN_POOL};
