//! Job execution: the fail-fast/skip state machine.
//!
//! Steps run strictly in order. Once a step fails the run enters skip mode
//! and only steps marked `run_on_fail` still execute; skipped steps are left
//! out of the results entirely. Skip mode is never cleared.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::job::{Job, Report, Step};
use crate::steps::{StepExecutor, StepOutcome};

/// Environment shared by the steps of one run.
///
/// Owned by the run and lent to each step in turn; steps with
/// `include_in_env` write their output back into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunContext {
    env: HashMap<String, String>,
}

impl RunContext {
    /// Start a run with the job's environment.
    pub fn new(env: HashMap<String, String>) -> Self {
        Self { env }
    }

    /// Current environment.
    pub fn env(&self) -> &HashMap<String, String> {
        &self.env
    }

    /// Look up one variable.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.env.get(key).map(String::as_str)
    }

    /// Set a variable for all later steps.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.env.insert(key.into(), value.into());
    }

    /// Consume the context, returning the final environment.
    pub fn into_env(self) -> HashMap<String, String> {
        self.env
    }
}

/// Progress events emitted during a run.
#[derive(Debug)]
pub enum RunProgress<'a> {
    /// A step is about to start.
    StepStarting {
        step: &'a Step,
        index: usize,
        total: usize,
    },
    /// A step finished; `result` is the snapshot that goes in the report.
    StepFinished { result: &'a Step, faulted: bool },
    /// A step was skipped because an earlier step failed.
    StepSkipped { step: &'a Step },
}

/// Result of running a list of steps.
#[derive(Debug)]
pub struct RunOutcome {
    /// Whether the run finished outside skip mode.
    pub success: bool,
    /// Snapshots of the steps that ran, in order.
    pub steps: Vec<Step>,
    /// Environment after the last step.
    pub context: RunContext,
}

/// Drives a [`StepExecutor`] over a job's steps.
pub struct RunEngine<E> {
    executor: E,
}

impl<E: StepExecutor> RunEngine<E> {
    /// Create an engine over the given executor.
    pub fn new(executor: E) -> Self {
        Self { executor }
    }

    /// The executor this engine drives.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run a job and build its report.
    ///
    /// The report echoes the job as received, before any step exported
    /// into the environment.
    pub fn run_job(&self, job: &Job) -> Report {
        let outcome = self.run(&job.commands, RunContext::new(job.env.clone()));
        Report::new(outcome.success, outcome.steps, job.clone())
    }

    /// Run steps in order.
    pub fn run(&self, steps: &[Step], context: RunContext) -> RunOutcome {
        self.run_with_progress(steps, context, |_| {})
    }

    /// Run steps in order with a progress callback.
    pub fn run_with_progress(
        &self,
        steps: &[Step],
        mut context: RunContext,
        mut on_progress: impl FnMut(RunProgress<'_>),
    ) -> RunOutcome {
        let total = steps.len();
        let mut skip_non_essential = false;
        let mut results = Vec::new();

        for (index, step) in steps.iter().enumerate() {
            if skip_non_essential && !step.run_on_fail {
                debug!("Skipping step: {}", step.title);
                on_progress(RunProgress::StepSkipped { step });
                continue;
            }

            info!("Running step: {}", step.title);
            on_progress(RunProgress::StepStarting { step, index, total });

            let (result, faulted) = self.run_step(step, &mut context);

            if result.exit_is_failure() {
                skip_non_essential = true;
            }

            on_progress(RunProgress::StepFinished {
                result: &result,
                faulted,
            });
            results.push(result);
        }

        RunOutcome {
            success: !skip_non_essential,
            steps: results,
            context,
        }
    }

    /// Execute one step and export its output if configured.
    fn run_step(&self, step: &Step, context: &mut RunContext) -> (Step, bool) {
        let (result, faulted) = match self.executor.execute(step, context.env()) {
            StepOutcome::Exited(result) => (result, false),
            StepOutcome::Fault { message, .. } => (step.faulted(message), true),
        };

        if let Some(key) = step.env_export() {
            context.set(key, result.output.clone());
        }

        (result, faulted)
    }
}
