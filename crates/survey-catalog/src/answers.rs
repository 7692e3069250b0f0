//! Answer sets
//!
//! Maps question identifiers to raw responses. Insertion order is kept so the
//! persisted JSON object lists answers in the order they were given.

use crate::QuestionId;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw responses of one respondent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(IndexMap<QuestionId, i32>);

impl AnswerSet {
    /// Create empty answer set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite an answer, returning the previous value
    #[inline]
    pub fn insert(&mut self, question: impl Into<QuestionId>, value: i32) -> Option<i32> {
        self.0.insert(question.into(), value)
    }

    /// With answer (builder form of [`AnswerSet::insert`])
    #[inline]
    #[must_use]
    pub fn with(mut self, question: &str, value: i32) -> Self {
        self.insert(question, value);
        self
    }

    /// Answer for a question
    #[inline]
    #[must_use]
    pub fn get(&self, question: &str) -> Option<i32> {
        self.0.get(question).copied()
    }

    /// Whether the question has been answered
    #[inline]
    #[must_use]
    pub fn contains(&self, question: &str) -> bool {
        self.0.contains_key(question)
    }

    /// Number of answers
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether nothing has been answered
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Answers in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, i32)> {
        self.0.iter().map(|(id, value)| (id, *value))
    }

    /// Encode as a JSON object
    ///
    /// # Errors
    /// Only if serialization itself fails, which a map of integers does not.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Decode from a JSON object without checking it against a catalog
    ///
    /// # Errors
    /// Returns the JSON error for malformed input or non-integer values.
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

impl<'a> FromIterator<(&'a str, i32)> for AnswerSet {
    fn from_iter<T: IntoIterator<Item = (&'a str, i32)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(id, v)| (QuestionId::new(id), v)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_overwrites() {
        let mut answers = AnswerSet::new();
        assert_eq!(answers.insert("q1", 3), None);
        assert_eq!(answers.insert("q1", 5), Some(3));
        assert_eq!(answers.get("q1"), Some(5));
        assert_eq!(answers.len(), 1);
    }

    #[test]
    fn json_keeps_insertion_order() {
        let answers = AnswerSet::new().with("q2", 4).with("q10", 1).with("q1", 5);
        assert_eq!(answers.to_json().unwrap(), r#"{"q2":4,"q10":1,"q1":5}"#);
    }

    #[test]
    fn from_json_rejects_fractional_values() {
        assert!(AnswerSet::from_json(r#"{"q1":2.5}"#).is_err());
        assert!(AnswerSet::from_json("not json").is_err());
        assert_eq!(AnswerSet::from_json("{}").unwrap(), AnswerSet::new());
    }
}
