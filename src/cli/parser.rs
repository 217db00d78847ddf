use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for timeclock
#[derive(Parser)]
#[command(
    name = "timeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal time clock: pick a job, clock in/out, take breaks; every punch is relayed to the logging endpoint",
    long_about = None
)]
pub struct Cli {
    /// Employee code (e.g. E01)
    #[arg(global = true, long = "emp", env = "TIMECLOCK_EMP")]
    pub emp: Option<String>,

    /// Session name; state is kept per session
    #[arg(global = true, long = "session", env = "TIMECLOCK_SESSION")]
    pub session: Option<String>,

    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the logging/jobs endpoint URL
    #[arg(global = true, long = "endpoint")]
    pub endpoint: Option<String>,

    /// Read the job list from a JSON file instead of the endpoint
    #[arg(global = true, long = "jobs-file", value_name = "FILE")]
    pub jobs_file: Option<String>,

    /// Latitude of the current position
    #[arg(global = true, long = "lat", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Longitude of the current position
    #[arg(global = true, long = "lon", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Accuracy of the position in metres
    #[arg(global = true, long = "accuracy")]
    pub accuracy: Option<f64>,

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

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// List the jobs offered by the endpoint
    Jobs,

    /// Select the current job
    Select {
        /// Job id as listed by `jobs`
        #[arg(required_unless_present = "clear")]
        job_id: Option<String>,

        /// Forget the selected job
        #[arg(long, conflicts_with = "job_id")]
        clear: bool,
    },

    /// Save notes to send with the next clock out
    Notes {
        /// Notes text; empty clears the draft
        text: Option<String>,

        /// Print the current draft
        #[arg(long, conflicts_with = "text")]
        show: bool,
    },

    /// Clock in on the selected job
    ClockIn,

    /// Start a break
    BreakStart,

    /// End the current break
    BreakEnd,

    /// Clock out (ends an open break first)
    ClockOut {
        /// Notes for this shift (overrides the saved draft)
        #[arg(long)]
        notes: Option<String>,
    },

    /// Show employee, job, clock state and available actions
    Status,

    /// Manage the current session
    Session {
        /// Clear every stored value of the session
        #[arg(long)]
        clear: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// List the local punch journal
    Punches {
        /// Include punches of every employee
        #[arg(long)]
        all: bool,
    },

    /// Export the punch journal
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Include punches of every employee
        #[arg(long)]
        all: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
