//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. Most settings can also be
//! supplied through environment variables, which is how a queue worker
//! is usually configured.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ConfigOverrides;

/// Conveyor - run queued shell step sequences and report the result.
#[derive(Debug, Parser)]
#[command(name = "conveyor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to worker config file (YAML)
    #[arg(short, long, global = true, env = "CONVEYOR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Working directory for steps when the job sets no DIR
    #[arg(long, global = true, env = "CONVEYOR_ROOT_DIR")]
    pub root_dir: Option<PathBuf>,

    /// Shell used to interpret step commands
    #[arg(long, global = true, env = "CONVEYOR_SHELL")]
    pub shell: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config keys set on the command line or in the environment.
    pub fn overrides(&self) -> ConfigOverrides {
        let (response_url, timeout_secs) = match &self.command {
            Commands::Handle(args) => (args.response_url.clone(), args.timeout),
            Commands::Run(_) => (None, None),
        };

        ConfigOverrides {
            response_url,
            root_dir: self.root_dir.clone(),
            shell: self.shell.clone(),
            timeout_secs,
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run one job and print its report
    Run(RunArgs),

    /// Handle a queue event and deliver each report to the callback URL
    Handle(HandleArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Job file (JSON), or - for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Don't print the step summary
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for the `handle` command.
#[derive(Debug, Clone, clap::Args)]
pub struct HandleArgs {
    /// Queue event file (JSON), or - for stdin
    #[arg(default_value = "-")]
    pub input: PathBuf,

    /// Callback endpoint that receives each report
    #[arg(long, env = "RESPONSE_URL")]
    pub response_url: Option<String>,

    /// Callback timeout in seconds
    #[arg(long, value_name = "SECS", env = "CONVEYOR_TIMEOUT")]
    pub timeout: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_defaults_to_stdin() {
        let cli = Cli::parse_from(["conveyor", "run"]);
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.input, PathBuf::from("-"));
                assert!(!args.quiet);
            }
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn handle_accepts_response_url() {
        let cli = Cli::parse_from([
            "conveyor",
            "handle",
            "event.json",
            "--response-url",
            "https://example.com/",
            "--timeout",
            "5",
        ]);

        let overrides = cli.overrides();
        assert_eq!(overrides.response_url.as_deref(), Some("https://example.com/"));
        assert_eq!(overrides.timeout_secs, Some(5));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "conveyor",
            "run",
            "job.json",
            "--root-dir",
            "/work",
            "--shell",
            "/bin/bash",
            "--debug",
        ]);

        assert!(cli.debug);
        let overrides = cli.overrides();
        assert_eq!(overrides.root_dir, Some(PathBuf::from("/work")));
        assert_eq!(overrides.shell.as_deref(), Some("/bin/bash"));
        assert_eq!(overrides.response_url, None);
    }
}
