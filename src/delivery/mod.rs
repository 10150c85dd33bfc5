//! Report delivery.
//!
//! A [`ReportSink`] takes a finished [`Report`](crate::job::Report) out of
//! the worker:
//!
//! - [`HttpCallback`] - POSTs the report as JSON to a callback endpoint
//! - [`WriterSink`] - Writes the report as a JSON line (local runs)

pub mod http;
pub mod writer;

pub use http::HttpCallback;
pub use writer::WriterSink;

use crate::error::Result;
use crate::job::Report;

/// Destination for finished reports.
pub trait ReportSink {
    /// Deliver one report.
    fn deliver(&mut self, report: &Report) -> Result<()>;
}
