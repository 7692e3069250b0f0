//! Fire-and-forget dispatch
//!
//! The session hands a payload to [`SubmissionDispatcher::dispatch`] and moves
//! on. Delivery runs as a spawned task; its outcome is only logged. There is
//! no retry and no cancellation.

use crate::error::SubmitError;
use crate::payload::SubmissionPayload;
use crate::submitter::Submitter;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Spawns submissions on a runtime
#[derive(Debug, Clone)]
pub struct SubmissionDispatcher {
    submitter: Arc<dyn Submitter>,
    runtime: Handle,
}

impl SubmissionDispatcher {
    /// Create dispatcher on an explicit runtime
    #[inline]
    #[must_use]
    pub fn new(submitter: Arc<dyn Submitter>, runtime: Handle) -> Self {
        Self { submitter, runtime }
    }

    /// Create dispatcher on the runtime of the calling context
    ///
    /// # Errors
    /// [`SubmitError::NoRuntime`] outside a tokio runtime.
    pub fn from_current(submitter: Arc<dyn Submitter>) -> Result<Self, SubmitError> {
        let runtime = Handle::try_current().map_err(|_| SubmitError::NoRuntime)?;
        Ok(Self::new(submitter, runtime))
    }

    /// Submitter in use
    #[inline]
    #[must_use]
    pub fn submitter(&self) -> &Arc<dyn Submitter> {
        &self.submitter
    }

    /// Start delivery without waiting for it
    ///
    /// The returned handle may be dropped; the task keeps running. Awaiting it
    /// never yields an error, since failures are logged inside the task.
    pub fn dispatch(&self, payload: SubmissionPayload) -> JoinHandle<()> {
        let submitter = Arc::clone(&self.submitter);
        tracing::debug!(submitter = submitter.name(), "submission dispatched");

        self.runtime.spawn(async move {
            match submitter.submit(&payload).await {
                Ok(()) => tracing::debug!(submitter = submitter.name(), "submission delivered"),
                Err(e) => tracing::warn!(
                    submitter = submitter.name(),
                    error = %e,
                    "submission failed (fire and forget)"
                ),
            }
        })
    }
}
