//! Step definition and per-step results.

use serde::{Deserialize, Serialize};

/// Slugs that always run at the root directory, ignoring `DIR`.
const ROOT_SLUGS: &[&str] = &["clone", "git_config"];

/// Slug whose exit code 2 means "plan has changes" rather than failure.
pub const TERRAFORM_PLAN_SLUG: &str = "terraform_plan";

/// A single shell step.
///
/// The first block of fields is configuration supplied by the job; the
/// second block is filled in by the executor once the step has run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Step {
    /// Human-readable label.
    #[serde(deserialize_with = "super::null_as_default")]
    pub title: String,

    /// Stable identifier.
    #[serde(deserialize_with = "super::null_as_default")]
    pub slug: String,

    /// Shell command line.
    #[serde(deserialize_with = "super::null_as_default")]
    pub command: String,

    /// Advisory flag, carried through unchanged.
    #[serde(deserialize_with = "super::null_as_default")]
    pub check: bool,

    /// Appended to `output` when the command exits non-zero.
    #[serde(deserialize_with = "super::null_as_default")]
    pub fail_message: String,

    /// Run this step even after an earlier step failed.
    #[serde(deserialize_with = "super::null_as_default")]
    pub run_on_fail: bool,

    /// Append captured stdout to `output` on success.
    #[serde(deserialize_with = "super::null_as_default")]
    pub include_output: bool,

    /// If non-empty, export `output` under this name to later steps.
    #[serde(deserialize_with = "super::null_as_default")]
    pub include_in_env: String,

    /// Whether the command exited cleanly.
    #[serde(deserialize_with = "super::null_as_default")]
    pub completed: bool,

    /// Wall-clock duration in seconds.
    #[serde(deserialize_with = "super::null_as_default")]
    pub duration: f64,

    /// Process exit code (`-1` when no exit code could be obtained).
    #[serde(deserialize_with = "super::null_as_default")]
    pub exit_code: i32,

    /// Accumulated output.
    #[serde(deserialize_with = "super::null_as_default")]
    pub output: String,
}

impl Step {
    /// Create a step with the given slug and command.
    pub fn new(slug: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            command: command.into(),
            ..Default::default()
        }
    }

    /// Whether this step ignores the job's `DIR` setting.
    pub fn runs_at_root(&self) -> bool {
        ROOT_SLUGS.contains(&self.slug.as_str())
    }

    /// Whether this step's exit code should put the run into skip mode.
    ///
    /// `terraform_plan` exits 2 when the plan contains changes, which is
    /// not a failure for a pipeline.
    pub fn exit_is_failure(&self) -> bool {
        if self.slug == TERRAFORM_PLAN_SLUG {
            self.exit_code != 0 && self.exit_code != 2
        } else {
            self.exit_code != 0
        }
    }

    /// The environment key this step exports to, if any.
    pub fn env_export(&self) -> Option<&str> {
        if self.include_in_env.is_empty() {
            None
        } else {
            Some(&self.include_in_env)
        }
    }

    /// A failed snapshot that keeps only the identifying fields.
    ///
    /// Used when a step could not be run at all; `exit_code` is always 1.
    pub fn faulted(&self, message: impl Into<String>) -> Self {
        Self {
            title: self.title.clone(),
            slug: self.slug.clone(),
            command: self.command.clone(),
            check: self.check,
            output: message.into(),
            exit_code: 1,
            ..Default::default()
        }
    }
}
