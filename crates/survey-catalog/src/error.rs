//! Error types for the question catalog
//!
//! Two families:
//! - [`CatalogError`]: the catalog table itself violates its contract
//! - [`AnswerError`]: an answer does not fit the catalog it is checked against

use crate::{QuestionId, ScaleId};

/// Catalog construction errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Question references a scale that is not defined
    #[error("question {question} references unknown scale {scale}")]
    UnknownScale {
        /// Offending question
        question: QuestionId,
        /// Unresolved scale identifier
        scale: ScaleId,
    },

    /// Scale range is empty or inverted
    #[error("scale {scale} has invalid range [{min}, {max}]: min must be below max")]
    InvalidRange {
        /// Offending scale
        scale: ScaleId,
        /// Lower bound
        min: i32,
        /// Upper bound
        max: i32,
    },

    /// Two questions share an identifier
    #[error("duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    /// Two scales share an identifier
    #[error("duplicate scale id: {0}")]
    DuplicateScale(ScaleId),

    /// Scale has no questions
    #[error("scale {0} owns no questions")]
    EmptyScale(ScaleId),

    /// Catalog has no questions at all
    #[error("catalog contains no questions")]
    Empty,

    /// Catalog document could not be parsed
    #[error("catalog parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Answer acceptance errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    /// Answer targets a question the catalog does not know
    #[error("unknown question: {0}")]
    UnknownQuestion(String),

    /// Answer lies outside the owning scale's range
    #[error("answer {value} for {question} is outside [{min}, {max}]")]
    OutOfRange {
        /// Question being answered
        question: QuestionId,
        /// Rejected value
        value: i32,
        /// Scale minimum
        min: i32,
        /// Scale maximum
        max: i32,
    },
}
