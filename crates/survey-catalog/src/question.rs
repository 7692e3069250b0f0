//! Questions

use crate::ScaleId;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Question identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create question ID
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow as string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for QuestionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single Likert item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier
    pub id: QuestionId,
    /// Owning scale
    #[serde(rename = "scale")]
    pub scale_id: ScaleId,
    /// Prompt shown to the respondent
    pub text: String,
    /// Negatively phrased: scored as `max + min - raw`
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub reverse: bool,
}

impl Question {
    /// Create question
    #[must_use]
    pub fn new(id: impl Into<String>, scale_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: QuestionId::new(id),
            scale_id: ScaleId::new(scale_id),
            text: text.into(),
            reverse: false,
        }
    }

    /// Mark as reverse-scored
    #[inline]
    #[must_use]
    pub fn reversed(mut self) -> Self {
        self.reverse = true;
        self
    }
}
