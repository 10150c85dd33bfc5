//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`].

pub mod dispatcher;
pub mod display;
pub mod handle;
pub mod input;
pub mod run;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
