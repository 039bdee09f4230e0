//! Command-line interface definitions.
//!
//! Defines the CLI structure for eddep using `clap`. Most commands take a
//! location snippet: any case-sensitive substring of a visited
//! `system.station` name, such as `Nourse` for `Esumindii.Nourse City`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Elite Dangerous data explorer: snapshot housekeeping and trade planning
/// over market snapshots from visited stations
#[derive(Parser, Debug)]
#[command(name = "eddep")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file [default: ~/.eddep/config.toml]
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the snapshot files (overrides `data_dir`)
    #[arg(short = 'd', long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove all but the newest snapshot per location
    Clean(CleanArgs),

    /// List all snapshot files
    List,

    /// List all visited locations
    Visited,

    /// List commodities for sale at a location, with price and supply
    Buy(OriginArgs),

    /// List what a location buys, with price and demand
    Sell(OriginArgs),

    /// List profitable trades from an origin to a target location
    Trade2(Trade2Args),

    /// List high-profit trades between every pair of visited locations
    Ferengi(FerengiArgs),
}

/// Arguments for the `clean` subcommand.
#[derive(Parser, Debug)]
pub struct CleanArgs {
    /// Report what would be removed without deleting anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for commands that take a single location.
#[derive(Parser, Debug)]
pub struct OriginArgs {
    /// Location snippet, any substring of the full `system.station` name
    #[arg(short, long)]
    pub origin: String,
}

/// Arguments for the `trade2` subcommand.
#[derive(Parser, Debug)]
pub struct Trade2Args {
    /// Starting location snippet
    #[arg(short, long)]
    pub origin: String,

    /// Target location snippet
    #[arg(short = 't', long = "to")]
    pub target: String,
}

/// Arguments for the `ferengi` subcommand.
///
/// Both options override the `[trading]` section of the configuration.
#[derive(Parser, Debug)]
pub struct FerengiArgs {
    /// Lowest per-unit profit to report, in credits [default: 500]
    #[arg(short, long)]
    pub lowest_profit: Option<i64>,

    /// Canonical location that may not act as an origin (repeatable;
    /// replaces the configured list)
    #[arg(long = "exclude", value_name = "LOCATION")]
    pub exclude: Vec<String>,
}
