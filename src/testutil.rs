//! Shared test sinks.

use std::sync::{Arc, Mutex};

use crate::logging::{Record, Sink, SinkError};

/// In-memory sink collecting every delivered record, optionally failing
/// on messages containing a given fragment.
pub struct CaptureSink {
    records: Mutex<Vec<Record>>,
    fail_on: Option<String>,
}

impl CaptureSink {
    pub fn new() -> Arc<Self> {
        Arc::new(CaptureSink {
            records: Mutex::new(Vec::new()),
            fail_on: None,
        })
    }

    /// A sink that rejects any record whose message contains `fragment`
    /// and collects everything else.
    pub fn failing_on(fragment: &str) -> Arc<Self> {
        Arc::new(CaptureSink {
            records: Mutex::new(Vec::new()),
            fail_on: Some(fragment.to_string()),
        })
    }

    pub fn records(&self) -> Vec<Record> {
        self.records.lock().unwrap().clone()
    }
}

impl Sink for CaptureSink {
    fn emit(&self, record: &Record) -> Result<(), SinkError> {
        if let Some(fragment) = &self.fail_on {
            if record.message.contains(fragment) {
                return Err(SinkError::Emit(format!(
                    "sink rejected message containing '{}'",
                    fragment
                )));
            }
        }

        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}
