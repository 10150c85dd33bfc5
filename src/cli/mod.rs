//! Command-line interface for Conveyor.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, HandleArgs, RunArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
