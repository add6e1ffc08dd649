use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for labtracker
/// Local web form to track lab process entries in SQLite
#[derive(Parser)]
#[command(
    name = "labtracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track laboratory process entries through a local web form backed by SQLite",
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
    /// Write the configuration file and create an empty tracking table
    Init,

    /// Start the web form (the tracking table is recreated empty)
    Serve {
        #[arg(long, help = "Address to bind (default from config: 127.0.0.1)")]
        host: Option<String>,

        #[arg(long, short, help = "Port to listen on (default from config: 8051)")]
        port: Option<u16>,
    },

    /// Add one entry from the command line
    Add {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Time (HH:MM), defaults to now
        #[arg(long)]
        time: Option<String>,

        /// Operator name (must be one of the configured operators)
        #[arg(long)]
        operator: Option<String>,

        /// Operation (must be one of the configured operations)
        #[arg(long)]
        operation: Option<String>,

        #[arg(
            long,
            help = "Status: 'Erledigt' (done), 'In Bearbeitung' (wip), 'Ausstehend' (pending)"
        )]
        status: Option<String>,

        /// Free-text comment
        #[arg(long)]
        comment: Option<String>,
    },

    /// Print all entries
    List {
        #[arg(long = "chart", help = "Also print the entries-per-operator bar chart")]
        chart: bool,
    },

    /// Export all entries to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite an existing file")]
        force: bool,
    },

    /// Manage the database (statistics, integrity check, reset)
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "reset", help = "Drop and recreate the tracking table")]
        reset: bool,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },
}
