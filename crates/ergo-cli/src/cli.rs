//! Command-line surface for the `ergo` binary.

use clap::{Parser, Subcommand, ValueEnum};

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    pub db: Option<String>,
}

/// Top-level CLI parser for the `ergo` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ergo",
    version,
    about = "Ergo - NIOSH lifting assessments and kiosk sessions"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file path (overrides config)
    #[arg(long, global = true)]
    pub db: Option<String>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            db: self.db.clone(),
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the database file and schema.
    Init,
    /// Compute a lifting risk assessment; persist it when --user is given.
    Assess(AssessArgs),
    /// List a user's stored evaluations, newest first.
    History {
        /// Username whose history to list.
        #[arg(long)]
        user: String,
    },
    /// Log a user into the kiosk terminal (arbitrating the online row).
    Login {
        #[arg(long)]
        user: String,
    },
    /// Log a user out of the kiosk terminal.
    Logout {
        #[arg(long)]
        user: String,
    },
    /// Refresh an online user's heartbeat.
    Heartbeat {
        #[arg(long)]
        user: String,
    },
    /// Show who is online at the kiosk and whether the session is stale.
    Status,
    /// User provisioning.
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
    /// Access-log listing.
    Log(LogArgs),
}

/// Raw measurements for one assessment. Ranges are validated here, at the
/// UI boundary — the engine itself never re-validates.
#[derive(Debug, clap::Args)]
pub struct AssessArgs {
    /// Load actually lifted (kg, > 0).
    #[arg(long)]
    pub weight: f64,

    /// Horizontal distance of the hands from the ankles (cm, >= 0).
    #[arg(long)]
    pub horizontal: f64,

    /// Vertical height of the hands above the floor (cm, 0-175).
    #[arg(long)]
    pub vertical: f64,

    /// Vertical travel distance of the load (cm, > 0).
    #[arg(long)]
    pub distance: f64,

    /// Asymmetric angle (degrees, 0-135).
    #[arg(long)]
    pub angle: f64,

    /// Lifting frequency (lifts/min, > 0).
    #[arg(long)]
    pub frequency: f64,

    /// Activity duration: short, moderate, long (lenient; defaults to moderate).
    #[arg(long, default_value = "moderate")]
    pub duration: String,

    /// Grip quality: good, fair, poor (lenient; unknown counts as poor).
    #[arg(long, default_value = "fair")]
    pub grip: String,

    /// Optional label for the stored evaluation.
    #[arg(long)]
    pub name: Option<String>,

    /// Persist the result for this username.
    #[arg(long)]
    pub user: Option<String>,
}

#[derive(Clone, Debug, Subcommand)]
pub enum UserCommands {
    /// Create a user (name reservation only; credentials live elsewhere).
    Add {
        /// Unique username.
        name: String,
    },
}

#[derive(Debug, clap::Args)]
pub struct LogArgs {
    /// Only entries for this username.
    #[arg(long)]
    pub user: Option<String>,

    /// Only entries with this action: login, logout.
    #[arg(long)]
    pub action: Option<String>,

    /// Only kiosk-terminal entries.
    #[arg(long)]
    pub kiosk: bool,
}
