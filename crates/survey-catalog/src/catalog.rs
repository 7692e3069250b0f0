//! Question catalog
//!
//! Ordered questions plus the scale table they refer to. A [`Catalog`] can
//! only be obtained through [`CatalogBuilder::build`] (directly, from a TOML
//! document, or via [`Catalog::builtin`]), so every instance satisfies:
//! - question and scale identifiers are unique
//! - every question's scale resolves
//! - every scale has `min < max` and owns at least one question

use crate::error::{AnswerError, CatalogError};
use crate::{AnswerSet, Question, QuestionId, Scale, ScaleId};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Validated question catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    scales: IndexMap<ScaleId, Scale>,
    questions: Vec<Question>,
    positions: HashMap<QuestionId, usize>,
}

/// Questions of one scale, in catalog order
#[derive(Debug, Clone)]
pub struct ScaleGroup<'a> {
    /// The scale
    pub scale: &'a Scale,
    /// Its questions
    pub questions: Vec<&'a Question>,
}

impl Catalog {
    /// Start building a catalog
    #[inline]
    #[must_use]
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    /// Parse and validate a TOML catalog document
    ///
    /// ```toml
    /// [[scales]]
    /// id = "Usability"
    /// name = "Usability"
    /// min = 1
    /// max = 5
    /// min_label = "stimme gar nicht zu"
    /// max_label = "stimme voll zu"
    ///
    /// [[questions]]
    /// id = "q1"
    /// scale = "Usability"
    /// text = "Die Bedienung der App ist intuitiv."
    /// ```
    ///
    /// # Errors
    /// [`CatalogError::Parse`] for malformed TOML, otherwise any contract
    /// violation reported by [`CatalogBuilder::build`].
    pub fn from_toml_str(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = toml::from_str(raw)?;
        Self::from_document(document)
    }

    /// Validate a deserialized document
    ///
    /// # Errors
    /// Any contract violation reported by [`CatalogBuilder::build`].
    pub fn from_document(document: CatalogDocument) -> Result<Self, CatalogError> {
        CatalogBuilder {
            scales: document.scales,
            questions: document.questions,
        }
        .build()
    }

    /// Serializable form of this catalog
    #[must_use]
    pub fn to_document(&self) -> CatalogDocument {
        CatalogDocument {
            scales: self.scales.values().cloned().collect(),
            questions: self.questions.clone(),
        }
    }

    /// Number of questions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always false for a built catalog
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions in presentation order
    #[inline]
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Question at a presentation index
    #[inline]
    #[must_use]
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Look up a question by identifier
    #[must_use]
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.position(id).map(|i| &self.questions[i])
    }

    /// Presentation index of a question
    #[inline]
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// Look up a scale by identifier
    #[inline]
    #[must_use]
    pub fn scale(&self, id: &str) -> Option<&Scale> {
        self.scales.get(id)
    }

    /// Scale owning a question
    #[inline]
    #[must_use]
    pub fn scale_of(&self, question: &Question) -> Option<&Scale> {
        self.scales.get(&question.scale_id)
    }

    /// Scales in declaration order
    pub fn scales(&self) -> impl Iterator<Item = &Scale> {
        self.scales.values()
    }

    /// Questions grouped by scale
    ///
    /// Groups appear in order of each scale's first question; within a group
    /// questions keep catalog order.
    #[must_use]
    pub fn groups(&self) -> Vec<ScaleGroup<'_>> {
        let mut grouped: IndexMap<&ScaleId, Vec<&Question>> = IndexMap::new();
        for question in &self.questions {
            grouped.entry(&question.scale_id).or_default().push(question);
        }

        grouped
            .into_iter()
            .filter_map(|(id, questions)| {
                self.scales
                    .get(id)
                    .map(|scale| ScaleGroup { scale, questions })
            })
            .collect()
    }

    /// Check a single answer against the catalog
    ///
    /// # Errors
    /// [`AnswerError::UnknownQuestion`] or [`AnswerError::OutOfRange`].
    pub fn check_answer(&self, question_id: &str, value: i32) -> Result<&Question, AnswerError> {
        let question = self
            .question(question_id)
            .ok_or_else(|| AnswerError::UnknownQuestion(question_id.to_string()))?;
        let scale = self
            .scale_of(question)
            .ok_or_else(|| AnswerError::UnknownQuestion(question_id.to_string()))?;

        if scale.contains(value) {
            Ok(question)
        } else {
            Err(AnswerError::OutOfRange {
                question: question.id.clone(),
                value,
                min: scale.min,
                max: scale.max,
            })
        }
    }

    /// Check every answer of a set
    ///
    /// # Errors
    /// The first failing answer in insertion order.
    pub fn check_answers(&self, answers: &AnswerSet) -> Result<(), AnswerError> {
        answers
            .iter()
            .try_for_each(|(id, value)| self.check_answer(id.as_str(), value).map(|_| ()))
    }
}

/// Plain catalog table, as read from or written to TOML/JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Scale table
    #[serde(default)]
    pub scales: Vec<Scale>,
    /// Questions in presentation order
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Catalog builder
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    scales: Vec<Scale>,
    questions: Vec<Question>,
}

impl CatalogBuilder {
    /// Add a scale
    #[inline]
    #[must_use]
    pub fn scale(mut self, scale: Scale) -> Self {
        self.scales.push(scale);
        self
    }

    /// Append a question
    #[inline]
    #[must_use]
    pub fn question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Validate and build
    ///
    /// # Errors
    /// The first contract violation found.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut scales = IndexMap::with_capacity(self.scales.len());
        for scale in self.scales {
            if scale.min >= scale.max {
                return Err(CatalogError::InvalidRange {
                    scale: scale.id,
                    min: scale.min,
                    max: scale.max,
                });
            }
            if scales.contains_key(&scale.id) {
                return Err(CatalogError::DuplicateScale(scale.id));
            }
            scales.insert(scale.id.clone(), scale);
        }

        if self.questions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut positions = HashMap::with_capacity(self.questions.len());
        for (index, question) in self.questions.iter().enumerate() {
            if !scales.contains_key(&question.scale_id) {
                return Err(CatalogError::UnknownScale {
                    question: question.id.clone(),
                    scale: question.scale_id.clone(),
                });
            }
            if positions.insert(question.id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
        }

        if let Some(orphan) = scales
            .keys()
            .find(|id| !self.questions.iter().any(|q| &q.scale_id == *id))
        {
            return Err(CatalogError::EmptyScale(orphan.clone()));
        }

        Ok(Catalog {
            scales,
            questions: self.questions,
            positions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> CatalogBuilder {
        Catalog::builder()
            .scale(Scale::new("A", 1, 5))
            .scale(Scale::new("B", 0, 4))
            .question(Question::new("a1", "A", "first"))
            .question(Question::new("b1", "B", "second").reversed())
            .question(Question::new("a2", "A", "third"))
    }

    #[test]
    fn builds_and_indexes() {
        let catalog = small().build().unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.position("a2"), Some(2));
        assert!(catalog.question("b1").unwrap().reverse);
        assert_eq!(catalog.scale("B").unwrap().max, 4);
        assert!(catalog.question("zz").is_none());
    }

    #[test]
    fn groups_keep_first_appearance_and_catalog_order() {
        let catalog = small().build().unwrap();
        let groups = catalog.groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].scale.id.as_str(), "A");
        let ids: Vec<_> = groups[0].questions.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids, vec!["a1", "a2"]);
        assert_eq!(groups[1].scale.id.as_str(), "B");
    }

    #[test]
    fn rejects_unknown_scale() {
        let err = small()
            .question(Question::new("c1", "C", "dangling"))
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownScale { .. }));
    }

    #[test]
    fn rejects_inverted_range() {
        let err = Catalog::builder()
            .scale(Scale::new("A", 5, 5))
            .question(Question::new("a1", "A", "x"))
            .build()
            .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidRange { min: 5, max: 5, .. }));
    }

    #[test]
    fn rejects_duplicates() {
        let err = small().question(Question::new("a1", "A", "again")).build().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateQuestion(_)));

        let err = small().scale(Scale::new("A", 1, 3)).build().unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateScale(_)));
    }

    #[test]
    fn rejects_empty_and_orphan_scales() {
        let err = Catalog::builder().scale(Scale::new("A", 1, 5)).build().unwrap_err();
        assert!(matches!(err, CatalogError::Empty));

        let err = small().scale(Scale::new("Z", 1, 3)).build().unwrap_err();
        assert!(matches!(err, CatalogError::EmptyScale(ref id) if id.as_str() == "Z"));
    }

    #[test]
    fn check_answer_guards_range() {
        let catalog = small().build().unwrap();
        assert!(catalog.check_answer("a1", 5).is_ok());
        assert!(catalog.check_answer("b1", 0).is_ok());
        assert_eq!(
            catalog.check_answer("b1", 5).unwrap_err(),
            AnswerError::OutOfRange {
                question: QuestionId::new("b1"),
                value: 5,
                min: 0,
                max: 4,
            }
        );
        assert_eq!(
            catalog.check_answer("nope", 1).unwrap_err(),
            AnswerError::UnknownQuestion("nope".into())
        );
    }
}
