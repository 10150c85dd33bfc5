//! Handle command implementation.
//!
//! `conveyor handle` processes a queue event: every record is run in order
//! and its report is POSTed to the callback URL.

use tracing::info;

use crate::cli::args::HandleArgs;
use crate::config::WorkerConfig;
use crate::delivery::HttpCallback;
use crate::error::{ConveyorError, Result};
use crate::queue::{JobHandler, QueueEvent};
use crate::runner::RunEngine;

use super::dispatcher::{Command, CommandResult};
use super::input::read_input;

/// The handle command implementation.
pub struct HandleCommand {
    config: WorkerConfig,
    args: HandleArgs,
}

impl HandleCommand {
    /// Create a new handle command.
    pub fn new(config: &WorkerConfig, args: HandleArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &HandleArgs {
        &self.args
    }
}

impl Command for HandleCommand {
    fn execute(&self) -> Result<CommandResult> {
        let url = self.config.response_url.as_deref().ok_or_else(|| {
            ConveyorError::ConfigValidationError {
                message: "response_url is not set (use --response-url or RESPONSE_URL)"
                    .to_string(),
            }
        })?;

        let event = QueueEvent::from_json(&read_input(&self.args.input)?)?;

        let engine = RunEngine::new(self.config.executor(std::env::vars().collect()));
        let callback = HttpCallback::with_timeout(url, self.config.timeout())?;
        let mut handler = JobHandler::new(engine, callback);

        let reports = handler.handle_event(&event)?;
        let failed = reports.iter().filter(|r| !r.is_success()).count();
        info!(
            "Delivered {} reports ({} failed) to {}",
            reports.len(),
            failed,
            url
        );

        Ok(CommandResult::success())
    }
}
