//! Inbound job record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConveyorError, Result};

use super::Step;

/// A queued job: a shared environment and an ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Job {
    /// Variables exported to every step.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub env: HashMap<String, String>,

    /// Steps in execution order.
    pub commands: Vec<Step>,
}

impl Job {
    /// Parse a job from its JSON wire form.
    ///
    /// # Errors
    ///
    /// Returns `JobParse` if the body is not valid JSON or `commands` is
    /// missing or malformed.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| ConveyorError::JobParse {
            message: e.to_string(),
        })
    }

    /// Number of steps in the job.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the job has no steps.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
