use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "acks", version, about = "Render the ACKs admin dashboard from a data snapshot")]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'o', value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// When to colorize output
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a TOML config file
    #[arg(long, env = "ACKS_CONFIG", global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// JSON snapshot of the data store (overrides config file)
    #[arg(long, short = 's', global = true, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// URL prefix of the admin site (overrides config file)
    #[arg(long, global = true, value_name = "PATH")]
    pub base_path: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(ValueEnum, Clone, Debug, Copy, Default)]
pub enum ColorChoice {
    /// Colorize output if stdout is a terminal
    #[default]
    Auto,
    /// Always colorize output
    Always,
    /// Never colorize output
    Never,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq, Eq)]
pub enum ViewName {
    /// Pull requests with reviews, labels and status
    #[value(name = "pull-requests", alias = "prs")]
    PullRequests,
    /// Bounties with payout actions
    #[value(name = "bounties", alias = "bounties-payable")]
    Bounties,
    /// Invoices issued for bounty payouts
    #[value(name = "invoices")]
    Invoices,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a view as an HTML table
    #[command(visible_alias = "r")]
    Render {
        #[arg(value_enum)]
        view: ViewName,

        /// Render the details page of the row with this key instead of the list
        #[arg(long, value_name = "KEY")]
        details: Option<String>,

        /// Only list rows whose searchable columns contain this text
        #[arg(long)]
        search: Option<String>,

        /// Zero-based list page
        #[arg(long, default_value_t = 0)]
        page: usize,

        /// Rows per page (overrides config file)
        #[arg(long)]
        page_size: Option<usize>,

        /// Reference time for relative dates (RFC 3339), defaults to now
        #[arg(long, value_name = "TIMESTAMP")]
        now: Option<DateTime<Utc>>,
    },
    /// List the configured views and their columns
    Views,
    /// Show configuration
    #[command(visible_alias = "cfg")]
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Show config file locations in search order
    Path,
}
