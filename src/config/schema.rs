//! Worker configuration schema.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::shell::DEFAULT_SHELL;
use crate::steps::{ShellExecutor, DEFAULT_ROOT_DIR};

/// Default callback timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for one worker process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkerConfig {
    /// Callback endpoint for reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_url: Option<String>,

    /// Working directory for steps when the job sets no `DIR`.
    pub root_dir: PathBuf,

    /// Shell that interprets step commands.
    pub shell: String,

    /// Callback request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            response_url: None,
            root_dir: PathBuf::from(DEFAULT_ROOT_DIR),
            shell: DEFAULT_SHELL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl WorkerConfig {
    /// Callback timeout as a duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build a shell executor over `base_env` with these settings.
    pub fn executor(&self, base_env: HashMap<String, String>) -> ShellExecutor {
        ShellExecutor::new(base_env)
            .with_root_dir(self.root_dir.clone())
            .with_shell(self.shell.clone())
    }

    /// Override keys that are set in `overrides`.
    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(url) = overrides.response_url {
            self.response_url = Some(url);
        }
        if let Some(root_dir) = overrides.root_dir {
            self.root_dir = root_dir;
        }
        if let Some(shell) = overrides.shell {
            self.shell = shell;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
    }
}

/// Per-key overrides from flags or environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub response_url: Option<String>,
    pub root_dir: Option<PathBuf>,
    pub shell: Option<String>,
    pub timeout_secs: Option<u64>,
}
