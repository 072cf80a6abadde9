//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they take a snapshot and return a new one or a view of it.
//!
//! - [`reducer`] - Apply named actions to a snapshot
//! - [`summary`] - Dashboard counters and other derived views

pub mod reducer;
pub mod summary;

pub use reducer::{Action, reduce};
pub use summary::{
    ACTIVITY_FEED_LIMIT, ActivityEntry, DashboardStats, DirectoryEntry, PoolProgress,
    PropertyTotals, UPCOMING_REMINDER_LIMIT, activity_feed, dashboard_stats, member_directory,
    pool_progress, property_totals, reminders_by_date, upcoming_reminders,
};
