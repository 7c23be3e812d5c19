use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkTracker
/// CLI application to log worked hours with SQLite
#[derive(Parser)]
#[command(
    name = "rworktracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work-hours tracker: log hours per day and summarize them using SQLite",
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

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Record worked hours
    Add {
        /// Number of hours worked (whole number)
        #[arg(allow_hyphen_values = true)]
        hours: String,

        /// When the hours were worked (YYYY-MM-DD[ HH:MM[:SS]]), default: now
        #[arg(long = "at", value_name = "WHEN")]
        at: Option<String>,
    },

    /// Show every record, most recent first
    List,

    /// Show today / this month / total hours
    Summary,

    /// Interactive console: enter hours repeatedly
    Prompt,

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Database maintenance (integrity check, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup as .zip")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },

    /// Export all records
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
