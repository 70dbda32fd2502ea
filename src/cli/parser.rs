use crate::core::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for LedgerFlow
/// CLI application to track hourly work and projected earnings with SQLite
#[derive(Parser)]
#[command(
    name = "ledgerflow",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track hourly work entries and projected period earnings using SQLite",
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

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file path")]
        path: bool,
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

    /// Log worked hours into the active period
    Log {
        /// Worked hours (any positive number, e.g. 7.5)
        #[arg(allow_negative_numbers = true)]
        hours: f64,

        /// Date of the entry (YYYY-MM-DD, defaults to today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Optional note attached to the entry
        #[arg(long = "note")]
        note: Option<String>,
    },

    /// Start a new period or show the active one
    Period {
        #[arg(long = "start", help = "Close the active period and start a new one")]
        start: bool,

        /// Boundary date (YYYY-MM-DD, defaults to today; only with --start)
        #[arg(long = "date", requires = "start")]
        date: Option<String>,
    },

    /// Show totals and projected earnings for the active period
    Status {
        /// Target hours for the projection (defaults to the configured value)
        #[arg(long = "target", allow_negative_numbers = true)]
        target: Option<f64>,
    },

    /// List recent entries
    List {
        #[arg(long, short, help = "Maximum number of entries to show")]
        limit: Option<usize>,

        #[arg(long, help = "List every period, not just the active one")]
        all: bool,
    },

    /// View or update the configured rates (Save & Apply)
    Rates {
        #[arg(long = "print", help = "Print the current rates")]
        print: bool,

        /// Base hourly wage
        #[arg(long = "base", allow_negative_numbers = true)]
        base: Option<f64>,

        /// Include average tips in calculations
        #[arg(long = "tips", conflicts_with = "no_tips")]
        tips: bool,

        /// Exclude tips from calculations
        #[arg(long = "no-tips")]
        no_tips: bool,

        /// Average tips per hour
        #[arg(long = "avg-tip", allow_negative_numbers = true)]
        avg_tip: Option<f64>,
    },

    /// Export the ledger as a report
    Export {
        #[arg(long, value_enum, default_value = "text")]
        format: ExportFormat,

        /// Output file (stdout when omitted)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Delete all periods, entries and saved rates
    Clear {
        #[arg(long, short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
