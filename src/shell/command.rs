//! Shell command execution.

use crate::error::{ConveyorError, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::time::{Duration, Instant};

/// Shell used when none is configured.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Signal that terminated the process, if any.
    pub signal: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Execution duration, from spawn until output is collected.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    fn from_status(status: ExitStatus, stdout: String, stderr: String, duration: Duration) -> Self {
        Self {
            exit_code: status.code(),
            signal: exit_signal(&status),
            stdout,
            stderr,
            duration,
            success: status.success(),
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone)]
pub struct CommandOptions {
    /// Shell executable; the command is passed as `<shell> -c <command>`.
    pub shell: String,

    /// Working directory.
    pub cwd: Option<PathBuf>,

    /// Complete environment of the child. Nothing is inherited.
    pub env: HashMap<String, String>,
}

impl Default for CommandOptions {
    fn default() -> Self {
        Self {
            shell: DEFAULT_SHELL.to_string(),
            cwd: None,
            env: HashMap::new(),
        }
    }
}

/// Execute a shell command line, capturing stdout and stderr.
///
/// A non-zero exit is reported through [`CommandResult`], not as an error.
///
/// # Errors
///
/// Returns `CommandSpawn` if the shell could not be started (missing
/// shell, missing working directory, OS error).
pub fn execute(command: &str, options: &CommandOptions) -> Result<CommandResult> {
    let mut cmd = Command::new(&options.shell);
    cmd.arg("-c");
    cmd.arg(command);

    if let Some(cwd) = &options.cwd {
        cmd.current_dir(cwd);
    }

    cmd.env_clear();
    cmd.envs(&options.env);

    cmd.stdin(Stdio::null());
    cmd.stdout(Stdio::piped());
    cmd.stderr(Stdio::piped());

    let start = Instant::now();
    let output = cmd.output().map_err(|e| ConveyorError::CommandSpawn {
        shell: options.shell.clone(),
        command: command.to_string(),
        message: e.to_string(),
    })?;
    let duration = start.elapsed();

    Ok(CommandResult::from_status(
        output.status,
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        duration,
    ))
}

#[cfg(unix)]
fn exit_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn exit_signal(_status: &ExitStatus) -> Option<i32> {
    None
}
