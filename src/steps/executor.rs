//! Step execution engine.
//!
//! Runs one [`Step`] under the job's environment and working directory,
//! recording timing, exit status and output on a copy of the step.

use crate::job::Step;
use crate::shell::{execute, CommandOptions, CommandResult, DEFAULT_SHELL};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Job environment key that selects the working directory.
pub const DIR_KEY: &str = "DIR";

/// Working directory used when `DIR` is unset or ignored.
pub const DEFAULT_ROOT_DIR: &str = "/";

/// What happened when a step was executed.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The command ran and exited with a code (zero or not).
    Exited(Step),

    /// The command could not be run to an exit code.
    ///
    /// The step carries `exit_code = -1`.
    Fault { step: Step, message: String },
}

impl StepOutcome {
    /// The updated step, regardless of outcome.
    pub fn step(&self) -> &Step {
        match self {
            StepOutcome::Exited(step) => step,
            StepOutcome::Fault { step, .. } => step,
        }
    }

    /// Whether the step could not be run.
    pub fn is_fault(&self) -> bool {
        matches!(self, StepOutcome::Fault { .. })
    }
}

/// Runs a single step.
///
/// The run engine depends on this trait rather than on the shell, so the
/// policy can be driven by scripted executors in tests.
pub trait StepExecutor {
    /// Execute `step` with the job environment `env`.
    fn execute(&self, step: &Step, env: &HashMap<String, String>) -> StepOutcome;
}

/// Executes steps as `<shell> -c <command>` child processes.
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    base_env: HashMap<String, String>,
    root_dir: PathBuf,
    shell: String,
}

impl ShellExecutor {
    /// Create an executor over an explicit base environment.
    pub fn new(base_env: HashMap<String, String>) -> Self {
        Self {
            base_env,
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            shell: DEFAULT_SHELL.to_string(),
        }
    }

    /// Create an executor over a snapshot of this process's environment.
    pub fn from_process_env() -> Self {
        Self::new(std::env::vars().collect())
    }

    /// Set the default working directory.
    pub fn with_root_dir(mut self, root_dir: impl Into<PathBuf>) -> Self {
        self.root_dir = root_dir.into();
        self
    }

    /// Set the shell used to interpret commands.
    pub fn with_shell(mut self, shell: impl Into<String>) -> Self {
        self.shell = shell.into();
        self
    }

    /// The default working directory.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// The shell used to interpret commands.
    pub fn shell(&self) -> &str {
        &self.shell
    }

    /// Working directory for `step`.
    ///
    /// `DIR` from the job environment wins, except for steps that must run
    /// before the repository exists (`clone`, `git_config`).
    pub fn working_dir(&self, step: &Step, env: &HashMap<String, String>) -> PathBuf {
        match env.get(DIR_KEY) {
            Some(dir) if !step.runs_at_root() => PathBuf::from(dir),
            _ => self.root_dir.clone(),
        }
    }

    /// Child environment: the base snapshot overlaid with the job env.
    pub fn command_env(&self, env: &HashMap<String, String>) -> HashMap<String, String> {
        let mut merged = self.base_env.clone();
        merged.extend(env.iter().map(|(k, v)| (k.clone(), v.clone())));
        merged
    }

    fn record_exit(mut step: Step, result: CommandResult) -> StepOutcome {
        step.duration = result.duration.as_secs_f64();

        if !result.stdout.is_empty() {
            debug!("{}", result.stdout.trim_end());
        }

        match result.exit_code {
            Some(0) => {
                step.completed = true;
                step.exit_code = 0;
                if step.include_output {
                    step.output.push_str(&result.stdout);
                }
                StepOutcome::Exited(step)
            }
            Some(code) => {
                warn!("Step '{}' exited with code {}", step.slug, code);
                if !result.stderr.is_empty() {
                    warn!("{}", result.stderr.trim_end());
                }
                step.completed = false;
                step.exit_code = code;
                step.output.push_str(&step.fail_message);
                StepOutcome::Exited(step)
            }
            None => {
                let message = match result.signal {
                    Some(signal) => format!("command terminated by signal {}", signal),
                    None => "command terminated without an exit code".to_string(),
                };
                warn!("Step '{}': {}", step.slug, message);
                step.completed = false;
                step.exit_code = -1;
                StepOutcome::Fault { step, message }
            }
        }
    }
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::from_process_env()
    }
}

impl StepExecutor for ShellExecutor {
    fn execute(&self, step: &Step, env: &HashMap<String, String>) -> StepOutcome {
        let mut step = step.clone();
        let cwd = self.working_dir(&step, env);

        info!("Running command: {} in {}", step.command, cwd.display());

        let options = CommandOptions {
            shell: self.shell.clone(),
            cwd: Some(cwd),
            env: self.command_env(env),
        };

        let started = Instant::now();
        match execute(&step.command, &options) {
            Ok(result) => Self::record_exit(step, result),
            Err(e) => {
                warn!("{}", e);
                step.duration = started.elapsed().as_secs_f64();
                step.completed = false;
                step.exit_code = -1;
                StepOutcome::Fault {
                    step,
                    message: e.to_string(),
                }
            }
        }
    }
}
