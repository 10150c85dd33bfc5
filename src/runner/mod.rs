//! Job execution orchestration.

pub mod engine;

pub use engine::{RunContext, RunEngine, RunOutcome, RunProgress};
