use std::process::ExitCode;

use clap::Parser;

use eddep::adapter::inbound::cli::command::Cli;
use eddep::adapter::inbound::cli::diagnostic::RecordDiagnostic;
use eddep::adapter::inbound::cli::dispatch;
use eddep::adapter::inbound::cli::output::Output;
use eddep::adapter::inbound::cli::paths;
use eddep::error::Error;
use eddep::infrastructure::config::settings::Config;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let output = dispatch::output_for(&cli);

    let mut config = match Config::load_or_default(cli.config.as_deref(), &paths::default_config()) {
        Ok(config) => config,
        Err(e) => return fail(&output, &e),
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    config.init_logging(cli.verbose);

    match dispatch::execute(&cli, &config.data_dir, &config.trading.sweep_settings(), &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&output, &e),
    }
}

fn fail(output: &Output, error: &Error) -> ExitCode {
    tracing::debug!(error = ?error, "command failed");
    match RecordDiagnostic::from_error(error) {
        Some(diagnostic) if !output.is_json() => {
            eprintln!("{:?}", miette::Report::new(diagnostic));
        }
        _ => output.error(&error.to_string()),
    }
    ExitCode::FAILURE
}
