//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{Cli, Commands};
use crate::config::WorkerConfig;
use crate::error::Result;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    config: WorkerConfig,
}

impl CommandDispatcher {
    /// Create a dispatcher with resolved worker settings.
    pub fn new(config: WorkerConfig) -> Self {
        Self { config }
    }

    /// The worker settings commands run with.
    pub fn config(&self) -> &WorkerConfig {
        &self.config
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Commands::Run(args) => {
                let cmd = super::run::RunCommand::new(&self.config, args.clone());
                cmd.execute()
            }
            Commands::Handle(args) => {
                let cmd = super::handle::HandleCommand::new(&self.config, args.clone());
                cmd.execute()
            }
        }
    }
}
