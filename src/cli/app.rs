//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, Context};
use chitty::config::Config;
use chitty::output::OutputMode;

/// chitty - Record keeping for rotating savings pools
#[derive(Parser, Debug)]
#[command(
    name = "chitty",
    version,
    about = "Record keeping for rotating savings pools",
    long_about = "Track chitties (rotating savings pools), their members, monthly\n\
                  payments, pledged properties and reminders.\n\n\
                  Every change is saved immediately. Use export/import to move\n\
                  the whole data set between machines."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Directory holding the saved data (overrides config)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage chitties (add, list, show, edit, remove)
    Pool {
        #[command(subcommand)]
        action: PoolAction,
    },

    /// Manage the members of a chitty
    Member {
        #[command(subcommand)]
        action: MemberAction,
    },

    /// Record and review monthly payments
    Payment {
        #[command(subcommand)]
        action: PaymentAction,
    },

    /// Track properties pledged against a chitty
    Property {
        #[command(subcommand)]
        action: PropertyAction,
    },

    /// Manage dated reminders
    Reminder {
        #[command(subcommand)]
        action: ReminderAction,
    },

    /// Show counters, upcoming reminders and recent payments
    Dashboard,

    /// Export all data to chitty_data_<date>.txt
    Export {
        /// Directory to write the export to (overrides config)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Replace all data with the contents of an export file
    Import {
        /// File to import
        file: PathBuf,
    },

    /// Sign in with the placeholder credential list
    Login {
        /// Login email
        #[arg(short, long)]
        email: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum PoolAction {
    /// Create a chitty
    Add {
        /// Chitty name
        name: String,

        /// Total number of months
        #[arg(short, long, default_value_t = 20)]
        months: u32,

        /// Monthly installment amount
        #[arg(short, long, default_value_t = 5000.0)]
        installment: f64,

        /// Start date (YYYY-MM-DD, default today)
        #[arg(short, long)]
        start: Option<String>,

        /// External reference number
        #[arg(long)]
        chitty_no: Option<String>,

        /// Branch
        #[arg(short, long, default_value = "")]
        branch: String,

        /// Owner
        #[arg(long)]
        owned_by: Option<String>,

        /// Status: running, running+auctioned, completed
        #[arg(long, default_value = "running")]
        status: String,

        /// Amount the auction went for
        #[arg(long)]
        auction_amount: Option<f64>,

        /// Final amount received
        #[arg(long)]
        final_amount: Option<f64>,
    },

    /// List chitties
    List {
        /// Filter by status: running, running+auctioned, completed
        #[arg(short, long)]
        status: Option<String>,
    },

    /// Show a chitty with its members, payments and properties
    Show {
        /// Chitty ID
        id: String,
    },

    /// Edit a chitty's details
    Edit {
        /// Chitty ID
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// Total number of months
        #[arg(short, long)]
        months: Option<u32>,

        /// Monthly installment amount
        #[arg(short, long)]
        installment: Option<f64>,

        /// Start date (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// External reference number
        #[arg(long)]
        chitty_no: Option<String>,

        /// Branch
        #[arg(short, long)]
        branch: Option<String>,

        /// Owner
        #[arg(long)]
        owned_by: Option<String>,

        /// Status: running, running+auctioned, completed
        #[arg(long)]
        status: Option<String>,

        /// Amount the auction went for
        #[arg(long)]
        auction_amount: Option<f64>,

        /// Final amount received
        #[arg(long)]
        final_amount: Option<f64>,
    },

    /// Remove a chitty with its members, payments and properties
    Remove {
        /// Chitty ID
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum MemberAction {
    /// Add a member to a chitty
    Add {
        /// Chitty ID
        pool: String,

        /// Member name
        name: String,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,
    },

    /// List members across chitties
    List {
        /// Only members of this chitty
        #[arg(short, long)]
        pool: Option<String>,
    },

    /// Remove a member (their payments are kept)
    Remove {
        /// Chitty ID
        pool: String,

        /// Member ID
        member: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PaymentAction {
    /// Record a payment
    Add {
        /// Chitty ID
        pool: String,

        /// Member ID
        #[arg(short, long)]
        member: String,

        /// Month number (1-based)
        #[arg(long)]
        month: u32,

        /// Amount paid (default: the installment amount)
        #[arg(short, long)]
        amount: Option<f64>,

        /// Status: paid, pending, missed
        #[arg(short, long, default_value = "paid")]
        status: String,

        /// Notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List payments
    List {
        /// Only payments of this chitty
        #[arg(short, long)]
        pool: Option<String>,

        /// Only payments by this member
        #[arg(short, long)]
        member: Option<String>,
    },

    /// Remove a payment
    Remove {
        /// Chitty ID
        pool: String,

        /// Payment ID
        payment: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum PropertyAction {
    /// Add a property to a chitty
    Add {
        /// Chitty ID
        pool: String,

        /// Holder name
        #[arg(long)]
        holder: String,

        /// Location
        #[arg(short, long, default_value = "")]
        location: String,

        /// Measurement or notes
        #[arg(short, long, default_value = "")]
        measurement: String,

        /// Declared value
        #[arg(long)]
        value: f64,

        /// Amount already advanced
        #[arg(short, long, default_value_t = 0.0)]
        given: f64,

        /// Amount pending (default: value minus given)
        #[arg(short, long)]
        pending: Option<f64>,
    },

    /// Edit a property
    Edit {
        /// Chitty ID
        pool: String,

        /// Property ID
        property: String,

        /// Holder name
        #[arg(long)]
        holder: Option<String>,

        /// Location
        #[arg(short, long)]
        location: Option<String>,

        /// Measurement or notes
        #[arg(short, long)]
        measurement: Option<String>,

        /// Declared value
        #[arg(long)]
        value: Option<f64>,

        /// Amount already advanced
        #[arg(short, long)]
        given: Option<f64>,

        /// Amount pending
        #[arg(short, long)]
        pending: Option<f64>,
    },

    /// List properties with totals
    List {
        /// Only properties of this chitty
        #[arg(long)]
        pool: Option<String>,
    },

    /// Remove a property
    Remove {
        /// Chitty ID
        pool: String,

        /// Property ID
        property: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReminderAction {
    /// Add a reminder
    Add {
        /// Chitty ID
        pool: String,

        /// Date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List reminders by date
    List,

    /// Remove a reminder
    Remove {
        /// Reminder ID
        id: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut config = Config::load();
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = Some(dir);
    }
    let ctx = Context::new(config, output_mode);

    match cli.command {
        Some(Command::Pool { action }) => commands::pool(action, &ctx),
        Some(Command::Member { action }) => commands::member(action, &ctx),
        Some(Command::Payment { action }) => commands::payment(action, &ctx),
        Some(Command::Property { action }) => commands::property(action, &ctx),
        Some(Command::Reminder { action }) => commands::reminder(action, &ctx),
        Some(Command::Dashboard) => commands::dashboard(&ctx),
        Some(Command::Export { dir }) => commands::export(dir, &ctx),
        Some(Command::Import { file }) => commands::import(&file, &ctx),
        Some(Command::Login { email, password }) => commands::login(&email, &password, &ctx),
        Some(Command::Logout) => commands::logout(&ctx),
        Some(Command::Whoami) => commands::whoami(&ctx),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": chitty::VERSION
                    })
                );
            } else {
                println!("chitty v{}", chitty::VERSION);
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": chitty::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("chitty v{}", chitty::VERSION);
                println!("\nRun 'chitty --help' for usage");
                println!("Run 'chitty pool add <name>' to get started");
            }
            Ok(())
        },
    }
}
