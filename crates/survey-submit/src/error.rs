//! Error types for the submission boundary

/// Submission errors
///
/// None of these reach the respondent; the dispatcher logs and drops them.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Connection, TLS, timeout or client construction failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("endpoint rejected submission with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
    },

    /// No tokio runtime to spawn the submission on
    #[error("no async runtime available for submission")]
    NoRuntime,
}

impl SubmitError {
    /// Whether the endpoint was reached at all
    #[inline]
    #[must_use]
    pub fn reached_endpoint(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}
