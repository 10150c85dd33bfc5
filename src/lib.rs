//! Conveyor - queue-triggered shell step runner.
//!
//! A job arrives as a JSON record holding an ordered list of shell steps and
//! a shared environment. Conveyor runs the steps one at a time, stops running
//! non-essential steps once one fails, lets steps export their output to
//! later steps, and reports a pass/fail conclusion with per-step results.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Worker configuration loading and validation
//! - [`delivery`] - Report sinks (HTTP callback, writer)
//! - [`error`] - Error types and result aliases
//! - [`job`] - Job, step and report data model
//! - [`queue`] - Queue event parsing and per-record handling
//! - [`runner`] - The run engine: skip policy and environment propagation
//! - [`shell`] - Shell command execution
//! - [`steps`] - Single-step execution
//!
//! # Example
//!
//! ```no_run
//! use conveyor::job::Job;
//! use conveyor::runner::RunEngine;
//! use conveyor::steps::ShellExecutor;
//!
//! let job = Job::from_json(
//!     r#"{"commands": [{"title": "Hello", "slug": "hello",
//!         "command": "echo hello", "include_output": true}]}"#,
//! )
//! .unwrap();
//!
//! let engine = RunEngine::new(ShellExecutor::from_process_env());
//! let report = engine.run_job(&job);
//! assert!(report.is_success());
//! assert_eq!(report.steps[0].output, "hello\n");
//! ```

pub mod cli;
pub mod config;
pub mod delivery;
pub mod error;
pub mod job;
pub mod queue;
pub mod runner;
pub mod shell;
pub mod steps;

pub use error::{ConveyorError, Result};
