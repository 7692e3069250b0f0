//! Error types for survey flow and session control

use std::path::PathBuf;
use survey_catalog::{AnswerError, CatalogError, QuestionId};
use survey_store::StoreError;

/// Flow controller errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// Current question needs an answer first
    #[error("question {question} has not been answered")]
    Unanswered {
        /// The unanswered question
        question: QuestionId,
    },

    /// Submission attempted before the last question
    #[error("cannot submit at question {index}: last question is {last}")]
    NotAtLastQuestion {
        /// Current index
        index: usize,
        /// Index of the last question
        last: usize,
    },

    /// Answer rejected by the catalog
    #[error(transparent)]
    Answer(#[from] AnswerError),
}

/// Session errors
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Flow precondition failed
    #[error("flow error: {0}")]
    Flow(#[from] FlowError),

    /// Persistence failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Operation needs the survey view
    #[error("survey has already been completed")]
    NotInSurvey,

    /// Operation needs the results view
    #[error("survey has not been completed yet")]
    NotInResults,
}

impl SessionError {
    /// Whether persisted data could not be decoded
    #[inline]
    #[must_use]
    pub fn is_corrupt_state(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_corrupt())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        /// Config or catalog file
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Invalid TOML
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configured catalog is invalid
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
