//! Outbound report and conclusion vocabulary.

use serde::{Deserialize, Serialize};

use super::{Job, Step};

/// Final verdict of a job.
///
/// The run engine only produces [`Conclusion::Success`] and
/// [`Conclusion::Failure`]; the rest belong to the shared vocabulary of
/// the reporting endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    ActionRequired,
    Cancelled,
    Failure,
    Neutral,
    Success,
    Skipped,
    Stale,
    TimedOut,
}

impl Conclusion {
    /// Map an overall pass/fail verdict to a conclusion.
    pub fn from_success(success: bool) -> Self {
        if success {
            Conclusion::Success
        } else {
            Conclusion::Failure
        }
    }
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Conclusion::ActionRequired => "action_required",
            Conclusion::Cancelled => "cancelled",
            Conclusion::Failure => "failure",
            Conclusion::Neutral => "neutral",
            Conclusion::Success => "success",
            Conclusion::Skipped => "skipped",
            Conclusion::Stale => "stale",
            Conclusion::TimedOut => "timed_out",
        };
        write!(f, "{}", s)
    }
}

/// Result of one job, as sent to the callback endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Overall verdict.
    pub conclusion: Conclusion,

    /// Snapshots of the steps that actually ran, in order.
    pub steps: Vec<Step>,

    /// The job as it was received.
    pub request: Job,
}

impl Report {
    /// Build a report from an engine verdict.
    pub fn new(success: bool, steps: Vec<Step>, request: Job) -> Self {
        Self {
            conclusion: Conclusion::from_success(success),
            steps,
            request,
        }
    }

    /// Whether the job succeeded.
    pub fn is_success(&self) -> bool {
        self.conclusion == Conclusion::Success
    }
}
