//! Routes a parsed command line to its handler.

use std::path::Path;

use crate::adapter::inbound::cli::command::{Cli, ColorChoice, Commands};
use crate::adapter::inbound::cli::output::{Output, OutputConfig};
use crate::adapter::inbound::cli::{clean, ferengi, market, snapshots, trade};
use crate::adapter::outbound::DirectoryStore;
use crate::application::{Explorer, SweepSettings};
use crate::error::Result;

/// Build the console renderer from the global flags.
pub fn output_for(cli: &Cli) -> Output {
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    Output::new(OutputConfig::new(cli.json, cli.quiet, cli.verbose))
}

/// Run the selected command against the snapshots in `data_dir`.
pub fn execute(cli: &Cli, data_dir: &Path, sweep: &SweepSettings, output: &Output) -> Result<()> {
    let store = DirectoryStore::new(data_dir);
    let explorer = Explorer::new(&store, output);
    tracing::debug!(data_dir = %data_dir.display(), "snapshot store ready");

    match &cli.command {
        Commands::Clean(args) => clean::execute(&explorer, output, args.dry_run),
        Commands::List => snapshots::list(&explorer, output),
        Commands::Visited => snapshots::visited(&explorer, output),
        Commands::Buy(args) => market::buy(&explorer, output, &args.origin),
        Commands::Sell(args) => market::sell(&explorer, output, &args.origin),
        Commands::Trade2(args) => trade::execute(&explorer, output, &args.origin, &args.target),
        Commands::Ferengi(args) => ferengi::execute(&explorer, output, args, sweep),
    }
}
