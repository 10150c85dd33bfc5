//! Queue ingestion.
//!
//! Jobs arrive as queue events holding one or more records; each record
//! body is a JSON [`Job`](crate::job::Job). [`JobHandler`] runs every record
//! in arrival order and hands each report to a
//! [`ReportSink`](crate::delivery::ReportSink).
//!
//! # Example
//!
//! ```no_run
//! use conveyor::delivery::WriterSink;
//! use conveyor::queue::{JobHandler, QueueEvent};
//! use conveyor::runner::RunEngine;
//! use conveyor::steps::ShellExecutor;
//!
//! let event = QueueEvent::from_json(
//!     r#"{"Records": [{"body": "{\"commands\": [{\"command\": \"echo hi\"}]}"}]}"#,
//! )
//! .unwrap();
//!
//! let engine = RunEngine::new(ShellExecutor::from_process_env());
//! let mut handler = JobHandler::new(engine, WriterSink::stdout());
//! handler.handle_event(&event).unwrap();
//! ```

pub mod event;
pub mod handler;

pub use event::{QueueEvent, QueueMessage};
pub use handler::JobHandler;
