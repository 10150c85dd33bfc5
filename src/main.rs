//! Conveyor CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use conveyor::cli::{Cli, CommandDispatcher};
use conveyor::config::{load_config, validate, WorkerConfig};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
///
/// Logs go to stderr; stdout is reserved for reports.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("conveyor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("conveyor=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn resolve_config(cli: &Cli) -> conveyor::Result<WorkerConfig> {
    let mut config = load_config(cli.config.as_deref())?;
    config.apply(cli.overrides());
    validate(&config)?;
    Ok(config)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Conveyor starting with args: {:?}", cli);

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(2);
        }
    };

    let dispatcher = CommandDispatcher::new(config);

    match dispatcher.dispatch(&cli) {
        Ok(result) => ExitCode::from(result.exit_code as u8),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}
