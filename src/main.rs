use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use eoq::commands::base_commands::{CliArgs, Commands};
use eoq::commands::calculate_cmd::calculate_command;
use eoq::commands::forecast_cmd::forecast_command;
use eoq::commands::plot_cmd::plot_command;

fn main() -> ExitCode {
    init_logging();

    let args = CliArgs::parse();
    let result = match args.command {
        cmd @ Commands::Calculate { .. } => calculate_command(cmd),
        cmd @ Commands::Forecast { .. } => forecast_command(cmd),
        cmd @ Commands::Plot { .. } => plot_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            generate(shell, &mut command, "eoq", &mut std::io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr so reports on stdout stay machine-readable.
fn init_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("eoq=warn"));

    if std::env::var("EOQ_LOG_JSON").is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    }
}
