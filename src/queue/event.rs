//! Queue event wire format.

use serde::{Deserialize, Serialize};

use crate::error::{ConveyorError, Result};

/// A batch of queue records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueEvent {
    /// Records in arrival order.
    #[serde(rename = "Records", default)]
    pub records: Vec<QueueMessage>,
}

/// One queue record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueueMessage {
    /// Queue-assigned identifier, if the queue provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// JSON-encoded job.
    pub body: String,
}

impl QueueEvent {
    /// Parse an event from JSON.
    ///
    /// # Errors
    ///
    /// Returns `Json` if the event envelope is malformed. Record bodies are
    /// not parsed here.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Wrap a single job body as an event.
    pub fn single(body: impl Into<String>) -> Self {
        Self {
            records: vec![QueueMessage::new(body)],
        }
    }

    /// Fail with `EmptyEvent` when there is nothing to process.
    pub fn ensure_records(&self) -> Result<()> {
        if self.records.is_empty() {
            return Err(ConveyorError::EmptyEvent);
        }
        Ok(())
    }
}

impl QueueMessage {
    /// Create a record with no message id.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            message_id: None,
            body: body.into(),
        }
    }

    /// Identifier for log lines.
    pub fn label(&self) -> &str {
        self.message_id.as_deref().unwrap_or("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_records_envelope() {
        let event = QueueEvent::from_json(
            r#"{"Records": [
                {"messageId": "m-1", "body": "{\"commands\": []}", "eventSource": "aws:sqs"},
                {"body": "second"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(event.records.len(), 2);
        assert_eq!(event.records[0].message_id.as_deref(), Some("m-1"));
        assert_eq!(event.records[0].body, r#"{"commands": []}"#);
        assert_eq!(event.records[1].label(), "-");
    }

    #[test]
    fn missing_records_is_empty_event() {
        let event = QueueEvent::from_json("{}").unwrap();
        assert!(matches!(
            event.ensure_records(),
            Err(ConveyorError::EmptyEvent)
        ));
    }

    #[test]
    fn malformed_envelope_is_json_error() {
        let err = QueueEvent::from_json("[1, 2").unwrap_err();
        assert!(matches!(err, ConveyorError::Json(_)));
    }

    #[test]
    fn single_wraps_body() {
        let event = QueueEvent::single("{}");
        assert_eq!(event.records.len(), 1);
        assert!(event.ensure_records().is_ok());
    }
}
