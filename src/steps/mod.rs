//! Step execution.
//!
//! - [`StepExecutor`] - The seam the run engine drives, one step at a time
//! - [`ShellExecutor`] - Runs a step as a shell command line
//! - [`StepOutcome`] - Clean exit (any code) versus execution fault
//!
//! # Example
//!
//! ```no_run
//! use conveyor::job::Step;
//! use conveyor::steps::{ShellExecutor, StepExecutor, StepOutcome};
//! use std::collections::HashMap;
//!
//! let executor = ShellExecutor::from_process_env().with_root_dir("/tmp");
//! let mut step = Step::new("hello", "echo hello");
//! step.include_output = true;
//!
//! match executor.execute(&step, &HashMap::new()) {
//!     StepOutcome::Exited(step) => println!("exit {}: {}", step.exit_code, step.output),
//!     StepOutcome::Fault { message, .. } => println!("could not run: {}", message),
//! }
//! ```

pub mod executor;

pub use executor::{ShellExecutor, StepExecutor, StepOutcome, DEFAULT_ROOT_DIR, DIR_KEY};
