use crate::store::models::Status;
use clap::{Parser, Subcommand};

/// Command-line interface definition for attlog
/// CLI application to track daily school attendance
#[derive(Parser)]
#[command(
    name = "attlog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance logging CLI: mark school days, view the monthly calendar, and back up the log",
    long_about = None
)]
pub struct Cli {
    /// Override the record log path (useful for tests or a custom log)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Override the backup root directory
    #[arg(global = true, long = "remote")]
    pub remote: Option<String>,

    /// Run in test mode (no config file update, non-interactive auth)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the record log and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

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

    /// Mark attendance for today
    Mark {
        /// Attendance status for the day
        #[arg(value_enum)]
        status: Status,

        /// Skip the automatic backup push after marking
        #[arg(long = "no-sync")]
        no_sync: bool,

        /// Override the marked date (YYYY-MM-DD; testing only)
        #[arg(long = "date", hide = true)]
        date: Option<String>,
    },

    /// Show attendance totals and percentage
    Summary,

    /// List attendance records
    List {
        /// Filter by period.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2026")
        /// - YYYY-MM              → entire month (e.g. "2026-03")
        /// - YYYY-MM-DD           → specific day (e.g. "2026-03-10")
        ///
        /// Ranges (start:end) in the same format:
        /// - YYYY-MM:YYYY-MM      → month range (e.g. "2026-02:2026-04")
        ///
        /// Special value:
        /// - all                   → show the entire log (bypass date filtering)
        ///
        /// If omitted, the default is the current month.
        #[arg(
            long,
            short,
            help = "Filter by year/month/day or a custom range (YYYY, YYYY-MM, YYYY-MM-DD, or ranges)"
        )]
        period: Option<String>,
    },

    /// Show the monthly calendar grid
    Calendar {
        /// Month to display (YYYY-MM); defaults to the current month
        #[arg(long, value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// Push the record log to the backup folder
    Sync,

    /// Run the attendance reminder scheduler
    Remind {
        /// Perform a single tick check instead of looping
        #[arg(long)]
        once: bool,

        /// Override the current date-time ("DD-MM-YYYY HH:MM"; testing only)
        #[arg(long = "now", hide = true)]
        now: Option<String>,
    },
}
