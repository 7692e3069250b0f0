//! One-question-at-a-time survey flow
//!
//! States are `AnsweringQuestion(i)` for `i` in `0..N`:
//! - `advance`: `i → i+1`, needs an answer for `i`, no-op at `N-1`
//! - `retreat`: `i → i-1`, no-op at `0`
//! - `submit`: only at `N-1` with an answer
//!
//! Answers can be changed freely while moving back and forth; each one is
//! checked against its scale's range when given.

use crate::error::FlowError;
use std::sync::Arc;
use survey_catalog::{AnswerSet, Catalog, Question, Scale};

/// Navigation actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlowAction {
    /// Go to the next question
    Advance,
    /// Go to the previous question
    Retreat,
    /// Finish the survey
    Submit,
}

/// Survey flow controller
#[derive(Debug, Clone)]
pub struct FlowController {
    catalog: Arc<Catalog>,
    index: usize,
    answers: AnswerSet,
}

impl FlowController {
    /// Start at the first question with no answers
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            index: 0,
            answers: AnswerSet::new(),
        }
    }

    /// Catalog being walked
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current question index
    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of questions
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.catalog.len()
    }

    /// Question at the current index
    #[must_use]
    pub fn current_question(&self) -> &Question {
        // A built catalog is never empty and the index stays below its length.
        &self.catalog.questions()[self.index]
    }

    /// Scale of the current question
    #[must_use]
    pub fn current_scale(&self) -> Option<&Scale> {
        self.catalog.scale_of(self.current_question())
    }

    /// Answer given to the current question
    #[inline]
    #[must_use]
    pub fn current_answer(&self) -> Option<i32> {
        self.answers.get(self.current_question().id.as_str())
    }

    /// Answers so far
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    /// At the first question
    #[inline]
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// At the last question
    #[inline]
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.total()
    }

    /// Current question has an answer
    #[inline]
    #[must_use]
    pub fn is_current_answered(&self) -> bool {
        self.current_answer().is_some()
    }

    /// `advance` would move forward
    #[inline]
    #[must_use]
    pub fn can_advance(&self) -> bool {
        !self.is_last() && self.is_current_answered()
    }

    /// `submit` would succeed
    #[inline]
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.is_last() && self.is_current_answered()
    }

    /// Actions that would succeed right now
    #[must_use]
    pub fn allowed_actions(&self) -> Vec<FlowAction> {
        let mut actions = Vec::with_capacity(2);
        if !self.is_first() {
            actions.push(FlowAction::Retreat);
        }
        if self.can_advance() {
            actions.push(FlowAction::Advance);
        }
        if self.can_submit() {
            actions.push(FlowAction::Submit);
        }
        actions
    }

    /// Record an answer for any question of the catalog
    ///
    /// # Errors
    /// [`FlowError::Answer`] for an unknown question or an out-of-range value.
    pub fn select_answer(&mut self, question_id: &str, value: i32) -> Result<(), FlowError> {
        let question = self.catalog.check_answer(question_id, value)?;
        let id = question.id.clone();
        let previous = self.answers.insert(id, value);
        tracing::debug!(question = question_id, value, ?previous, "answer selected");
        Ok(())
    }

    /// Record an answer for the current question
    ///
    /// # Errors
    /// [`FlowError::Answer`] for an out-of-range value.
    pub fn answer_current(&mut self, value: i32) -> Result<(), FlowError> {
        let id = self.current_question().id.clone();
        self.select_answer(id.as_str(), value)
    }

    /// Move to the next question; stays put on the last one
    ///
    /// # Errors
    /// [`FlowError::Unanswered`] if the current question has no answer.
    pub fn advance(&mut self) -> Result<usize, FlowError> {
        self.require_answer()?;
        if !self.is_last() {
            self.index += 1;
            tracing::debug!(index = self.index, "advanced");
        }
        Ok(self.index)
    }

    /// Move to the previous question; stays put on the first one
    pub fn retreat(&mut self) -> usize {
        if self.index > 0 {
            self.index -= 1;
            tracing::debug!(index = self.index, "retreated");
        }
        self.index
    }

    /// Final answer set
    ///
    /// # Errors
    /// [`FlowError::NotAtLastQuestion`] before the last question,
    /// [`FlowError::Unanswered`] if the last question has no answer.
    pub fn submit(&self) -> Result<AnswerSet, FlowError> {
        if !self.is_last() {
            return Err(FlowError::NotAtLastQuestion {
                index: self.index,
                last: self.total() - 1,
            });
        }
        self.require_answer()?;
        Ok(self.answers.clone())
    }

    /// Share of questions already passed, `index / total × 100`
    ///
    /// Reads 0 on the first question.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.index as f64 / self.total() as f64;
        ratio * 100.0
    }

    /// [`progress_percent`](Self::progress_percent) rounded for display
    #[must_use]
    pub fn progress_rounded(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = self.progress_percent().round() as u32;
        rounded
    }

    /// "Frage i von N"
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("Frage {} von {}", self.index + 1, self.total())
    }

    fn require_answer(&self) -> Result<(), FlowError> {
        if self.is_current_answered() {
            Ok(())
        } else {
            Err(FlowError::Unanswered {
                question: self.current_question().id.clone(),
            })
        }
    }
}
