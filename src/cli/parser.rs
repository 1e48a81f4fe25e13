use crate::export::ExportFormat;
use crate::store::Backend;
use clap::{Parser, Subcommand};

/// Command-line interface definition for teamhours
#[derive(Parser)]
#[command(
    name = "teamhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track working hours and travel time, and report monthly overtime for you and your team",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user instead of the configured one
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Storage backend override
    #[arg(global = true, long = "backend", value_enum)]
    pub backend: Option<Backend>,

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

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Show or change your settings (work hours, compensation, profile)
    Settings {
        #[arg(long = "show", help = "Print the current settings")]
        show: bool,

        #[arg(long = "work-hours", help = "Daily contracted hours (1-10)")]
        work_hours: Option<f64>,

        #[arg(long = "driver-percent", help = "Compensation percent for driver time")]
        driver_percent: Option<f64>,

        #[arg(long = "passenger-percent", help = "Compensation percent for passenger time")]
        passenger_percent: Option<f64>,

        #[arg(long = "language")]
        language: Option<String>,

        #[arg(long = "name", help = "Display name (empty string clears it)")]
        name: Option<String>,

        #[arg(long = "email")]
        email: Option<String>,

        #[arg(long = "company")]
        company: Option<String>,

        #[arg(long = "address", help = "Company address")]
        address: Option<String>,
    },

    /// Add a work entry, or a special entry with --kind
    Add {
        /// Date of the entry (YYYY-MM-DD)
        date: String,

        #[arg(long = "in", help = "Start time (HH:MM)")]
        start: Option<String>,

        #[arg(long = "out", help = "End time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "pause", help = "Pause in minutes")]
        pause: Option<i64>,

        #[arg(long = "duration", help = "Duration instead of --out: 90, 45m, 2h, 1h30m, 2.5h")]
        duration: Option<String>,

        #[arg(long = "driver", help = "Driver travel time in hours")]
        driver: Option<f64>,

        #[arg(long = "passenger", help = "Passenger travel time in hours")]
        passenger: Option<f64>,

        #[arg(long = "pos", help = "Location: O=Office, R=Remote, C=Customer, T=Travel")]
        pos: Option<String>,

        #[arg(
            long = "kind",
            help = "Special entry: sick_leave, pto, bank_holiday, time_off_in_lieu"
        )]
        kind: Option<String>,
    },

    /// Change fields of an existing entry
    Edit {
        /// Entry id (see `list`)
        id: i64,

        #[arg(long = "date", help = "Move the entry to this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "in")]
        start: Option<String>,

        #[arg(long = "out")]
        end: Option<String>,

        #[arg(long = "pause")]
        pause: Option<i64>,

        #[arg(long = "duration")]
        duration: Option<String>,

        #[arg(long = "driver")]
        driver: Option<f64>,

        #[arg(long = "passenger")]
        passenger: Option<f64>,

        #[arg(long = "pos")]
        pos: Option<String>,

        #[arg(long = "kind")]
        kind: Option<String>,
    },

    /// Delete an entry by id
    Del {
        id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Clock in (now, or at --at HH:MM today)
    Start {
        #[arg(long = "at")]
        at: Option<String>,

        #[arg(long = "pos")]
        pos: Option<String>,
    },

    /// Clock out the running entry
    Stop {
        #[arg(long = "at")]
        at: Option<String>,

        #[arg(long = "pause", help = "Pause in minutes")]
        pause: Option<i64>,
    },

    /// List entries of a month
    List {
        #[arg(long, short, help = "Month (YYYY-MM), default current")]
        month: Option<String>,
    },

    /// Month summary with weekly breakdown and overtime
    Report {
        #[arg(long, short, help = "Month (YYYY-MM), default current")]
        month: Option<String>,
    },

    /// Publish your month to a team
    Publish {
        team: String,

        #[arg(long, short)]
        month: Option<String>,
    },

    /// Manage teams and team reports
    Team {
        #[command(subcommand)]
        action: TeamCommands,
    },

    /// Export a month (or a team summary) to CSV or JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short)]
        month: Option<String>,

        #[arg(long, help = "Export the team summary instead of your entries")]
        team: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum TeamCommands {
    /// Create a team
    Create { id: String, name: String },

    /// Add or update a member
    AddMember {
        team: String,

        #[arg(value_name = "USER")]
        user_id: String,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "email")]
        email: Option<String>,
    },

    /// Remove a member
    RemoveMember {
        team: String,

        #[arg(value_name = "USER")]
        user_id: String,
    },

    /// List members
    Members { team: String },

    /// Team month report from published data
    Report {
        team: String,

        #[arg(long, short)]
        month: Option<String>,
    },
}
