//! HTTP callback delivery.

use anyhow::Context;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::{debug, info};

use super::ReportSink;
use crate::error::{ConveyorError, Result};
use crate::job::Report;

/// Default request timeout for the callback.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// POSTs reports to a fixed callback URL.
pub struct HttpCallback {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpCallback {
    /// Create a callback with the default 30-second timeout.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    /// Create a callback with a custom timeout.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("conveyor/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.into(),
            timeout,
        })
    }

    /// The callback URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl ReportSink for HttpCallback {
    fn deliver(&mut self, report: &Report) -> Result<()> {
        info!(
            "Sending {} report ({} steps) to {}",
            report.conclusion,
            report.steps.len(),
            self.url
        );

        let response = self
            .client
            .post(&self.url)
            .header(ACCEPT, "application/json")
            .json(report)
            .send()
            .with_context(|| format!("Failed to deliver report to {}", self.url))?;

        let status = response.status();
        let body = response.text().unwrap_or_default();
        debug!("Response: {}", body);

        if !status.is_success() {
            return Err(ConveyorError::Delivery {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::job::{Job, Step};
    use httpmock::prelude::*;

    fn report() -> Report {
        Report::new(true, vec![Step::new("test", "true")], Job::default())
    }

    #[test]
    fn default_timeout_is_30_seconds() {
        let callback = HttpCallback::new("https://example.com/").unwrap();
        assert_eq!(callback.timeout(), Duration::from_secs(30));
        assert_eq!(callback.url(), "https://example.com/");
    }

    #[test]
    fn custom_timeout() {
        let callback =
            HttpCallback::with_timeout("https://example.com/", Duration::from_secs(5)).unwrap();
        assert_eq!(callback.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn posts_json_with_accept_header() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/hook")
                .header("accept", "application/json")
                .header("content-type", "application/json");
            then.status(200).body(r#"{"value": "fixed"}"#);
        });

        let mut callback = HttpCallback::new(server.url("/hook")).unwrap();
        callback.deliver(&report()).unwrap();

        mock.assert();
    }

    #[test]
    fn non_success_status_is_delivery_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/hook");
            then.status(503).body("unavailable");
        });

        let mut callback = HttpCallback::new(server.url("/hook")).unwrap();
        let err = callback.deliver(&report()).unwrap_err();

        match err {
            ConveyorError::Delivery { status, url } => {
                assert_eq!(status, 503);
                assert!(url.ends_with("/hook"));
            }
            other => panic!("expected delivery error, got {:?}", other),
        }
    }

    #[test]
    fn unreachable_endpoint_is_error() {
        let mut callback =
            HttpCallback::with_timeout("http://127.0.0.1:1/hook", Duration::from_secs(2)).unwrap();
        let err = callback.deliver(&report()).unwrap_err();

        assert!(matches!(err, ConveyorError::Other(_)));
        assert!(err.to_string().contains("Failed to deliver report"));
    }
}
