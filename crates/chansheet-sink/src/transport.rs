use serde_json::Value;
use std::collections::BTreeSet;
use tokio::sync::Mutex;

use crate::error::TransportError;

/// Reply to a batch of format requests
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchReply {
    /// Requests the destination refused, by position in the batch, with the reason
    pub rejected: Vec<(usize, String)>,
}

/// Network seam of the sheet sink.
///
/// Implementations own authentication, retries and timeouts. Each method
/// is one round trip; the sink never calls per cell or per range.
#[allow(async_fn_in_trait)]
pub trait SheetTransport {
    /// Write `values` starting at `range` (A1 notation with sheet prefix)
    async fn write_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: Vec<Vec<Value>>,
    ) -> Result<(), TransportError>;

    /// Send `requests` as one batch update
    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        requests: Vec<Value>,
    ) -> Result<BatchReply, TransportError>;
}

/// One call seen by a [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    WriteValues {
        spreadsheet_id: String,
        range: String,
        values: Vec<Vec<Value>>,
    },
    BatchUpdate {
        spreadsheet_id: String,
        requests: Vec<Value>,
    },
}

/// In-memory transport that records every call.
///
/// Failures can be injected for the value write, for the whole batch, or
/// for individual requests of a batch.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    fail_values: Option<String>,
    fail_batch: Option<String>,
    reject: BTreeSet<usize>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every value write with `message`
    pub fn failing_values(mut self, message: impl Into<String>) -> Self {
        self.fail_values = Some(message.into());
        self
    }

    /// Fail every batch update as a whole with `message`
    pub fn failing_batch(mut self, message: impl Into<String>) -> Self {
        self.fail_batch = Some(message.into());
        self
    }

    /// Reject the batch requests at `indices`
    pub fn rejecting(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.reject.extend(indices);
        self
    }

    /// Snapshot of the calls made so far
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().await.clone()
    }
}

impl SheetTransport for RecordingTransport {
    async fn write_values(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: Vec<Vec<Value>>,
    ) -> Result<(), TransportError> {
        self.calls.lock().await.push(RecordedCall::WriteValues {
            spreadsheet_id: spreadsheet_id.to_string(),
            range: range.to_string(),
            values,
        });
        match &self.fail_values {
            Some(message) => Err(TransportError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }

    async fn batch_update(
        &self,
        spreadsheet_id: &str,
        requests: Vec<Value>,
    ) -> Result<BatchReply, TransportError> {
        let count = requests.len();
        self.calls.lock().await.push(RecordedCall::BatchUpdate {
            spreadsheet_id: spreadsheet_id.to_string(),
            requests,
        });
        if let Some(message) = &self.fail_batch {
            return Err(TransportError::Rejected {
                status: 400,
                message: message.clone(),
            });
        }

        let rejected = self
            .reject
            .iter()
            .filter(|idx| **idx < count)
            .map(|idx| (*idx, format!("request {idx} rejected")))
            .collect();
        Ok(BatchReply { rejected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_records_calls_in_order() {
        let transport = RecordingTransport::new();
        transport
            .write_values("doc", "'S'!A1", vec![vec![json!("a")]])
            .await
            .unwrap();
        let reply = transport.batch_update("doc", vec![json!({})]).await.unwrap();
        assert!(reply.rejected.is_empty());

        let calls = transport.calls().await;
        assert_eq!(calls.len(), 2);
        assert!(matches!(&calls[0], RecordedCall::WriteValues { range, .. } if range == "'S'!A1"));
        assert!(matches!(&calls[1], RecordedCall::BatchUpdate { requests, .. } if requests.len() == 1));
    }

    #[tokio::test]
    async fn test_injected_failures() {
        let transport = RecordingTransport::new()
            .failing_values("offline")
            .rejecting([1, 5]);
        let err = transport.write_values("doc", "A1", vec![]).await.unwrap_err();
        assert_eq!(err.to_string(), "Transport unavailable: offline");

        let reply = transport
            .batch_update("doc", vec![json!({}), json!({})])
            .await
            .unwrap();
        assert_eq!(reply.rejected, vec![(1, "request 1 rejected".to_string())]);

        let transport = RecordingTransport::new().failing_batch("quota");
        assert!(transport.batch_update("doc", vec![json!({})]).await.is_err());
    }
}
