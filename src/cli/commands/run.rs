//! Run command implementation.
//!
//! `conveyor run` executes one job locally and prints its report as JSON.

use crate::cli::args::RunArgs;
use crate::config::WorkerConfig;
use crate::delivery::{ReportSink, WriterSink};
use crate::error::Result;
use crate::job::{Job, Report};
use crate::runner::{RunContext, RunEngine, RunProgress};

use super::dispatcher::{Command, CommandResult};
use super::display::{show_finished, show_skipped};
use super::input::read_input;

/// The run command implementation.
pub struct RunCommand {
    config: WorkerConfig,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(config: &WorkerConfig, args: RunArgs) -> Self {
        Self {
            config: config.clone(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }
}

impl Command for RunCommand {
    fn execute(&self) -> Result<CommandResult> {
        let job = Job::from_json(&read_input(&self.args.input)?)?;

        let engine = RunEngine::new(self.config.executor(std::env::vars().collect()));
        let quiet = self.args.quiet;
        let outcome = engine.run_with_progress(
            &job.commands,
            RunContext::new(job.env.clone()),
            |progress| match progress {
                RunProgress::StepFinished { result, .. } if !quiet => show_finished(result),
                RunProgress::StepSkipped { step } if !quiet => show_skipped(step),
                _ => {}
            },
        );

        let report = Report::new(outcome.success, outcome.steps, job);
        WriterSink::stdout().deliver(&report)?;

        if report.is_success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
