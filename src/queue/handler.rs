//! Per-record job handling.

use tracing::{debug, info};

use crate::delivery::ReportSink;
use crate::error::Result;
use crate::job::{Job, Report};
use crate::runner::RunEngine;
use crate::steps::StepExecutor;

use super::{QueueEvent, QueueMessage};

/// Runs queued jobs and delivers their reports.
///
/// Records are processed one at a time; each gets a fresh run context, so
/// nothing leaks between jobs.
pub struct JobHandler<E, S> {
    engine: RunEngine<E>,
    sink: S,
}

impl<E: StepExecutor, S: ReportSink> JobHandler<E, S> {
    /// Create a handler.
    pub fn new(engine: RunEngine<E>, sink: S) -> Self {
        Self { engine, sink }
    }

    /// The report sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the handler, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Parse and run one record without delivering the report.
    ///
    /// # Errors
    ///
    /// Returns `JobParse` if the body is not a valid job. No step runs in
    /// that case.
    pub fn handle_record(&self, message: &QueueMessage) -> Result<Report> {
        let job = Job::from_json(&message.body)?;
        info!(
            "Received job {} with {} steps",
            message.label(),
            job.commands.len()
        );
        debug!("Received request: {}", message.body);

        let report = self.engine.run_job(&job);
        info!("Job {} finished: {}", message.label(), report.conclusion);
        Ok(report)
    }

    /// Run every record of an event in order, delivering each report.
    ///
    /// Stops at the first record that fails to parse or deliver.
    ///
    /// # Errors
    ///
    /// Returns `EmptyEvent` if there are no records, otherwise the first
    /// parse or delivery error.
    pub fn handle_event(&mut self, event: &QueueEvent) -> Result<Vec<Report>> {
        event.ensure_records()?;

        let mut reports = Vec::with_capacity(event.records.len());
        for message in &event.records {
            let report = self.handle_record(message)?;
            self.sink.deliver(&report)?;
            reports.push(report);
        }

        Ok(reports)
    }
}
