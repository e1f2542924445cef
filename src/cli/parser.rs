use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for dietario
/// CLI application to manage council sessions, attendance, and dieta reports
#[derive(Parser)]
#[command(
    name = "dietario",
    version = env!("CARGO_PKG_VERSION"),
    about = "Municipal council sessions, GPS-stamped attendance, and dieta compensation reports over SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values for problems")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage the council roster
    Person {
        #[command(subcommand)]
        action: PersonAction,
    },

    /// Manage council sessions and their lifecycle
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Mark an Entrada (check-in) for a person in an in-progress session
    Checkin {
        /// Session id
        session: i64,

        /// Person id
        person: i64,

        #[arg(long, help = "Latitude captured at marking time", allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, help = "Longitude captured at marking time", allow_hyphen_values = true)]
        lng: f64,

        #[arg(
            long,
            value_name = "DATETIME",
            help = "Override 'now' (YYYY-MM-DD HH:MM), for back-filling"
        )]
        at: Option<String>,
    },

    /// Mark a Salida (check-out) for a person in an in-progress session
    Checkout {
        /// Session id
        session: i64,

        /// Person id
        person: i64,

        #[arg(long, help = "Latitude captured at marking time", allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, help = "Longitude captured at marking time", allow_hyphen_values = true)]
        lng: f64,

        #[arg(
            long,
            value_name = "DATETIME",
            help = "Override 'now' (YYYY-MM-DD HH:MM), for back-filling"
        )]
        at: Option<String>,
    },

    /// Show attendance pairs and durations for one session
    Attendance {
        /// Session id
        session: i64,
    },

    /// Print the dieta payment report for a period
    Report {
        #[arg(long, help = "Report year (default: current year)")]
        year: Option<i32>,

        #[arg(long, help = "Narrow the report to one month (1-12)")]
        month: Option<u32>,

        #[arg(
            long,
            value_name = "AMOUNT",
            help = "Override the per-session dieta rate (e.g. 1500.00)"
        )]
        rate: Option<String>,
    },

    /// Export the dieta report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Report year (default: current year)")]
        year: Option<i32>,

        #[arg(long, help = "Narrow the report to one month (1-12)")]
        month: Option<u32>,

        #[arg(
            long,
            value_name = "AMOUNT",
            help = "Override the per-session dieta rate (e.g. 1500.00)"
        )]
        rate: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum PersonAction {
    /// Add a person to the roster
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "", help = "Protocol title, e.g. 'Concejal Segundo'")]
        title: String,
    },

    /// List the roster
    List,
}

#[derive(Subcommand)]
pub enum SessionAction {
    /// Create a session (starts in Preparing)
    Create {
        #[arg(long)]
        title: String,

        #[arg(long = "at", value_name = "DATETIME", help = "Scheduled start (YYYY-MM-DD HH:MM)")]
        scheduled: String,

        #[arg(long, default_value = "")]
        description: String,
    },

    /// Open a session for attendance (Preparing -> InProgress)
    Start { id: i64 },

    /// Finalize a session, freezing attendance (InProgress -> Finalized)
    Finalize { id: i64 },

    /// Re-open a finalized session for corrections (admin override)
    Reopen { id: i64 },

    /// List sessions of a year with their correlatives
    List {
        #[arg(long, help = "Year to list (default: current year)")]
        year: Option<i32>,
    },
}
