//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{AppData, Payment, Pool, PoolStatus, Reminder};
use crate::core::services::{ActivityEntry, DashboardStats, DirectoryEntry, PoolProgress, PropertyTotals};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A result that can be printed in either mode
pub trait Render: Serialize {
    /// Print the human-readable form
    fn render_human(&self);

    /// Print pretty JSON
    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }

    /// Render the result based on output mode
    fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }
}

/// Format a rupee amount, dropping the fraction when it is zero
#[must_use]
pub fn format_amount(amount: f64) -> String {
    if amount.fract().abs() < f64::EPSILON {
        format!("₹{amount:.0}")
    } else {
        format!("₹{amount:.2}")
    }
}

fn colored_status(status: &PoolStatus) -> String {
    let text = status.as_str();
    match status {
        PoolStatus::Running => text.green().to_string(),
        PoolStatus::RunningAuctioned => text.cyan().to_string(),
        PoolStatus::Completed => text.dimmed().to_string(),
        PoolStatus::Other(_) => text.yellow().to_string(),
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Id of the record created or affected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl OperationResult {
    /// A successful result
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: None,
        }
    }

    /// A successful result about a specific record
    #[must_use]
    pub fn ok_with_id(message: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: Some(id.into()),
        }
    }

    /// A failed result
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
        }
    }
}

impl Render for OperationResult {
    fn render_human(&self) {
        println!("{}", self.message);
        if let Some(id) = &self.id {
            println!("  ID: {id}");
        }
    }
}

/// One-line information about a pool
#[derive(Debug, Serialize)]
pub struct PoolInfo {
    /// Pool id
    pub id: String,
    /// Pool name
    pub name: String,
    /// External reference number
    pub chitty_no: Option<String>,
    /// Branch label
    pub branch: String,
    /// Lifecycle status
    pub status: PoolStatus,
    /// Duration in months
    pub total_months: f64,
    /// Installment amount
    pub installment_amount: f64,
    /// Start date (`YYYY-MM-DD`)
    pub start_date: String,
    /// Number of members
    pub members: usize,
    /// Number of payments
    pub payments: usize,
    /// Number of properties
    pub properties: usize,
}

impl From<&Pool> for PoolInfo {
    fn from(pool: &Pool) -> Self {
        Self {
            id: pool.id.clone(),
            name: pool.name.clone(),
            chitty_no: pool.chitty_no.clone(),
            branch: pool.branch.clone(),
            status: pool.status.clone(),
            total_months: pool.total_months,
            installment_amount: pool.installment_amount,
            start_date: pool.start_date.to_string(),
            members: pool.members.len(),
            payments: pool.payments.len(),
            properties: pool.properties().len(),
        }
    }
}

impl PoolInfo {
    fn print_line(&self) {
        println!(
            "  {}  [{}]  {} x {} months  from {}",
            self.name.bold(),
            colored_status(&self.status),
            format_amount(self.installment_amount),
            self.total_months,
            self.start_date
        );
        println!(
            "      ID: {}  branch: {}  members: {}  payments: {}",
            self.id,
            if self.branch.is_empty() { "-" } else { self.branch.as_str() },
            self.members,
            self.payments
        );
    }
}

/// Result of a pool list operation
#[derive(Debug, Serialize)]
pub struct PoolListResult {
    /// Number of pools
    pub total: usize,
    /// The pools
    pub pools: Vec<PoolInfo>,
}

impl Render for PoolListResult {
    fn render_human(&self) {
        if self.pools.is_empty() {
            println!("No chitties yet.");
            return;
        }
        println!("Chitties ({}):\n", self.total);
        for pool in &self.pools {
            pool.print_line();
        }
    }
}

/// A payment with the member name resolved
#[derive(Debug, Serialize)]
pub struct PaymentInfo {
    /// Payment id
    pub id: String,
    /// Owning pool id
    pub chitty_id: String,
    /// Owning pool name
    pub chitty_name: String,
    /// Member id
    pub member_id: String,
    /// Member name ("Member" if the member is gone)
    pub member_name: String,
    /// Month index
    pub month_index: f64,
    /// Amount
    pub amount: f64,
    /// Status
    pub status: String,
    /// When logged
    pub date: String,
    /// Notes
    pub notes: Option<String>,
}

impl PaymentInfo {
    /// Join a payment with its pool
    #[must_use]
    pub fn new(pool: &Pool, payment: &Payment) -> Self {
        Self {
            id: payment.id.clone(),
            chitty_id: pool.id.clone(),
            chitty_name: pool.name.clone(),
            member_id: payment.member_id.clone(),
            member_name: pool.member_name(&payment.member_id).to_string(),
            month_index: payment.month_index,
            amount: payment.amount,
            status: payment.status.to_string(),
            date: payment.date.clone(),
            notes: payment.notes.clone(),
        }
    }

    fn print_line(&self) {
        println!(
            "  month {:>2}  {}  {}  [{}]  {}",
            self.month_index,
            self.member_name,
            format_amount(self.amount),
            self.status,
            self.id
        );
        if let Some(notes) = &self.notes {
            println!("            {notes}");
        }
    }
}

/// Result of a pool show operation
#[derive(Debug, Serialize)]
pub struct PoolShowResult {
    /// The pool
    pub pool: Pool,
    /// Payment progress
    pub progress: PoolProgress,
}

impl Render for PoolShowResult {
    fn render_human(&self) {
        let pool = &self.pool;
        println!("{}", pool.name.bold());
        println!("  ID:          {}", pool.id);
        if let Some(no) = &pool.chitty_no {
            println!("  Chitty no:   {no}");
        }
        println!("  Branch:      {}", pool.branch);
        if let Some(owner) = &pool.owned_by {
            println!("  Owned by:    {owner}");
        }
        println!("  Status:      {}", colored_status(&pool.status));
        println!("  Installment: {}", format_amount(pool.installment_amount));
        println!("  Months:      {}", pool.total_months);
        println!("  Start date:  {}", pool.start_date);
        if let Some(amount) = pool.auction_amount {
            println!("  Auction:     {}", format_amount(amount));
        }
        if let Some(amount) = pool.final_amount {
            println!("  Final:       {}", format_amount(amount));
        }
        println!(
            "  Paid:        {} over {} payment(s)",
            format_amount(self.progress.paid),
            self.progress.payments
        );

        println!("\nMembers ({}):", pool.members.len());
        for m in &pool.members {
            println!("  {}  {}", m.name, m.id);
        }

        println!("\nPayments ({}):", pool.payments.len());
        for p in &pool.payments {
            PaymentInfo::new(pool, p).print_line();
        }

        println!("\nProperties ({}):", pool.properties().len());
        for p in pool.properties() {
            println!(
                "  {}  value {}  given {}  pending {}  {}",
                p.holder_name,
                format_amount(p.value),
                format_amount(p.given_amount),
                format_amount(p.pending_amount),
                p.id
            );
        }
    }
}

/// Result of a member list operation
#[derive(Debug, Serialize)]
pub struct MemberListResult {
    /// Number of members
    pub total: usize,
    /// Members with their pool
    pub members: Vec<DirectoryEntry>,
}

impl Render for MemberListResult {
    fn render_human(&self) {
        if self.members.is_empty() {
            println!("No members yet.");
            return;
        }
        println!("Members ({}):\n", self.total);
        for m in &self.members {
            println!("  {}  ({})", m.name.bold(), m.chitty_name);
            let contact: Vec<&str> = [m.phone.as_deref(), m.email.as_deref()].into_iter().flatten().collect();
            if !contact.is_empty() {
                println!("      {}", contact.join("  "));
            }
            println!("      ID: {}", m.member_id);
        }
    }
}

/// Result of a payment list operation
#[derive(Debug, Serialize)]
pub struct PaymentListResult {
    /// Number of payments
    pub total: usize,
    /// Payments with resolved names
    pub payments: Vec<PaymentInfo>,
}

impl Render for PaymentListResult {
    fn render_human(&self) {
        if self.payments.is_empty() {
            println!("No payments recorded.");
            return;
        }
        println!("Payments ({}):\n", self.total);
        for p in &self.payments {
            p.print_line();
        }
    }
}

/// A property with its pool
#[derive(Debug, Serialize)]
pub struct PropertyInfo {
    /// Property id
    pub id: String,
    /// Owning pool id
    pub chitty_id: String,
    /// Owning pool name
    pub chitty_name: String,
    /// Holder name
    pub holder_name: String,
    /// Location
    pub location: String,
    /// Measurement / notes
    pub measurement: String,
    /// Declared value
    pub value: f64,
    /// Amount advanced
    pub given_amount: f64,
    /// Amount pending
    pub pending_amount: f64,
}

/// Result of a property list operation
#[derive(Debug, Serialize)]
pub struct PropertyListResult {
    /// Totals across the listed properties
    pub totals: PropertyTotals,
    /// The properties
    pub properties: Vec<PropertyInfo>,
}

impl Render for PropertyListResult {
    fn render_human(&self) {
        if self.properties.is_empty() {
            println!("No properties recorded.");
            return;
        }
        println!(
            "Properties ({}): value {}  given {}  pending {}\n",
            self.totals.count,
            format_amount(self.totals.value),
            format_amount(self.totals.given),
            format_amount(self.totals.pending)
        );
        for p in &self.properties {
            println!("  {}  ({})", p.holder_name.bold(), p.chitty_name);
            if !p.location.is_empty() {
                println!("      {}", p.location);
            }
            if !p.measurement.is_empty() {
                println!("      {}", p.measurement);
            }
            println!(
                "      value {}  given {}  pending {}",
                format_amount(p.value),
                format_amount(p.given_amount),
                format_amount(p.pending_amount)
            );
            println!("      ID: {}", p.id);
        }
    }
}

/// A reminder with its pool name resolved
#[derive(Debug, Serialize)]
pub struct ReminderInfo {
    /// Reminder id
    pub id: String,
    /// Referenced pool id
    pub chitty_id: String,
    /// Pool name, "Unknown chitty" if the pool is gone
    pub chitty_name: String,
    /// Date (`YYYY-MM-DD`)
    pub date: String,
    /// Note
    pub note: Option<String>,
}

impl ReminderInfo {
    /// Resolve a reminder against the snapshot
    #[must_use]
    pub fn new(data: &AppData, reminder: &Reminder) -> Self {
        Self {
            id: reminder.id.clone(),
            chitty_id: reminder.chitty_id.clone(),
            chitty_name: data.reminder_pool_name(reminder).to_string(),
            date: reminder.date.to_string(),
            note: reminder.note.clone(),
        }
    }

    fn print_line(&self) {
        println!(
            "  {}  {}  {}",
            self.date.bold(),
            self.chitty_name,
            self.note.as_deref().unwrap_or("")
        );
        println!("      ID: {}", self.id);
    }
}

/// Result of a reminder list operation
#[derive(Debug, Serialize)]
pub struct ReminderListResult {
    /// Number of reminders
    pub total: usize,
    /// Reminders ordered by date
    pub reminders: Vec<ReminderInfo>,
}

impl Render for ReminderListResult {
    fn render_human(&self) {
        if self.reminders.is_empty() {
            println!("No reminders set.");
            return;
        }
        println!("Reminders ({}):\n", self.total);
        for r in &self.reminders {
            r.print_line();
        }
    }
}

/// Result of the dashboard command
#[derive(Debug, Serialize)]
pub struct DashboardResult {
    /// Pool counters
    pub stats: DashboardStats,
    /// Snapshot modification time
    pub last_updated: String,
    /// Earliest reminders
    pub upcoming_reminders: Vec<ReminderInfo>,
    /// Pools still waiting for their auction
    pub running: Vec<PoolInfo>,
    /// Recent payments
    pub activity: Vec<ActivityEntry>,
}

impl Render for DashboardResult {
    fn render_human(&self) {
        let s = &self.stats;
        println!("{}", "Dashboard".bold());
        println!("  Total chitties:  {}", s.total);
        println!("  Active:          {}", s.active);
        println!("  Auctioned:       {}", s.auctioned);
        println!("  Coming auctions: {}", s.coming_auctions);
        println!("  With properties: {}", s.with_properties);
        println!("  Last updated:    {}", self.last_updated);

        println!("\nUpcoming reminders:");
        if self.upcoming_reminders.is_empty() {
            println!("  (none)");
        }
        for r in &self.upcoming_reminders {
            r.print_line();
        }

        println!("\nRunning chitties:");
        if self.running.is_empty() {
            println!("  (none)");
        }
        for p in &self.running {
            p.print_line();
        }

        println!("\nRecent activity:");
        if self.activity.is_empty() {
            println!("  (none)");
        }
        for a in &self.activity {
            println!(
                "  {} paid {} for month {} in {}",
                a.member_name,
                format_amount(a.amount),
                a.month_index,
                a.chitty_name
            );
        }
    }
}

