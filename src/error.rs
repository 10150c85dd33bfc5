//! Error types for Conveyor operations.
//!
//! This module defines [`ConveyorError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Step command failures and execution faults are NOT errors: the run
//!   engine folds them into the report (see [`crate::runner`])
//! - Use `ConveyorError` for failures around a run: bad input, bad
//!   configuration, delivery problems
//! - Use `anyhow::Error` (via `ConveyorError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Conveyor operations.
#[derive(Debug, Error)]
pub enum ConveyorError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Inbound job record could not be parsed. No run is attempted.
    #[error("Failed to parse job: {message}")]
    JobParse { message: String },

    /// The shell could not be started for a command.
    #[error("Failed to run `{command}` with {shell}: {message}")]
    CommandSpawn {
        shell: String,
        command: String,
        message: String,
    },

    /// A queue event arrived without any records.
    #[error("No records found in queue event")]
    EmptyEvent,

    /// The callback endpoint rejected a report.
    #[error("Report delivery to {url} failed with status {status}")]
    Delivery { url: String, status: u16 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Conveyor operations.
pub type Result<T> = std::result::Result<T, ConveyorError>;
