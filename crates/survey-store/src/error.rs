//! Error types for the persistence boundary

use std::path::PathBuf;

/// Store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// IO error on the backing file
    #[error("io error on {path}: {source}")]
    Io {
        /// Backing file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Backing file is not a JSON object of strings
    #[error("corrupt store file {path}: {reason}")]
    CorruptFile {
        /// Backing file
        path: PathBuf,
        /// What failed to parse
        reason: String,
    },

    /// A persisted value does not decode into valid survey state
    #[error("corrupt persisted state under '{key}': {reason}")]
    CorruptState {
        /// Store key
        key: String,
        /// Decode or validation failure
        reason: String,
    },

    /// Value could not be encoded
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create corrupt-state error for key
    pub fn corrupt_state(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::CorruptState {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Whether persisted data is unreadable (as opposed to an IO failure)
    #[inline]
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::CorruptFile { .. } | Self::CorruptState { .. })
    }
}
