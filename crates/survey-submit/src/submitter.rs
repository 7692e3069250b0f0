//! Submission port and implementations

use crate::error::SubmitError;
use crate::payload::SubmissionPayload;
use async_trait::async_trait;
use std::time::Duration;

/// Delivers a finished survey somewhere
#[async_trait]
pub trait Submitter: Send + Sync + std::fmt::Debug {
    /// Deliver one payload
    ///
    /// # Errors
    /// Any delivery failure; callers are expected to log and drop it.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError>;

    /// Short name for logs
    fn name(&self) -> &'static str;
}

/// JSON `POST` to a fixed endpoint
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpSubmitter {
    /// Default request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Create submitter for an endpoint
    ///
    /// # Errors
    /// [`SubmitError::Transport`] if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("survey/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Target URL
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, answers = payload.data.len(), "posting submission");

        let response = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(SubmitError::Status {
                status: status.as_u16(),
            })
        }
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

/// Used when no endpoint is configured: accepts and discards
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSubmitter;

#[async_trait]
impl Submitter for NoopSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), SubmitError> {
        tracing::info!(
            answers = payload.data.len(),
            "no submission endpoint configured, submission skipped"
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}
