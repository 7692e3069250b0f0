//! Testing utilities for the survey workspace
//!
//! Shared fixtures, fake submitters and fault-injecting stores.

#![allow(missing_docs)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use survey_catalog::AnswerSet;
use survey_store::{KeyValueStore, MemoryStore, StoreError};
use survey_submit::{SubmissionPayload, SubmitError, Submitter};
use tokio::sync::Notify;

/// Every built-in question answered; q3 and q8 are reverse-scored so each
/// scale ends up uniform (Usability 5, Design 7, Funktion 4).
pub fn complete_answers() -> AnswerSet {
    [
        ("q1", 5),
        ("q2", 5),
        ("q3", 1),
        ("q4", 7),
        ("q5", 7),
        ("q6", 7),
        ("q7", 4),
        ("q8", 0),
        ("q9", 4),
    ]
    .into_iter()
    .collect()
}

/// Records every payload it receives
#[derive(Debug, Default)]
pub struct RecordingSubmitter {
    payloads: Mutex<Vec<SubmissionPayload>>,
    delivered: Notify,
}

impl RecordingSubmitter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn payloads(&self) -> Vec<SubmissionPayload> {
        self.payloads.lock().clone()
    }

    /// Wait until at least one payload has arrived
    pub async fn wait_for_delivery(&self) {
        loop {
            let notified = self.delivered.notified();
            if !self.payloads.lock().is_empty() {
                return;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl Submitter for RecordingSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        self.payloads.lock().push(payload.clone());
        self.delivered.notify_waiters();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "recording"
    }
}

/// Always rejected by the "endpoint"
#[derive(Debug, Default)]
pub struct FailingSubmitter {
    attempts: Mutex<usize>,
}

impl FailingSubmitter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock()
    }
}

#[async_trait]
impl Submitter for FailingSubmitter {
    async fn submit(&self, _payload: &SubmissionPayload) -> Result<(), SubmitError> {
        *self.attempts.lock() += 1;
        Err(SubmitError::Status { status: 503 })
    }

    fn name(&self) -> &'static str {
        "failing"
    }
}

/// Never finishes delivering
#[derive(Debug, Default)]
pub struct StalledSubmitter;

#[async_trait]
impl Submitter for StalledSubmitter {
    async fn submit(&self, _payload: &SubmissionPayload) -> Result<(), SubmitError> {
        std::future::pending::<()>().await;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "stalled"
    }
}

/// Memory store whose writes can be made to fail
#[derive(Debug, Default)]
pub struct FlakyStore {
    inner: MemoryStore,
    fail_writes: Mutex<bool>,
}

impl FlakyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock() = fail;
    }

    fn check(&self) -> Result<(), StoreError> {
        if *self.fail_writes.lock() {
            Err(StoreError::io_error(
                "flaky-store",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "writes disabled"),
            ))
        } else {
            Ok(())
        }
    }
}

impl KeyValueStore for FlakyStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check()?;
        self.inner.set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.check()?;
        self.inner.remove(key)
    }
}
