//! Typed access to the persisted survey keys
//!
//! | key | value |
//! |---|---|
//! | [`DONE_KEY`] | `"true"` or absent |
//! | [`ANSWERS_KEY`] | JSON answer set or absent |

use crate::backend::KeyValueStore;
use crate::error::StoreError;
use survey_catalog::{AnswerSet, Catalog};

/// Completion flag key
pub const DONE_KEY: &str = "survey_2026_done";

/// Raw answers key
pub const ANSWERS_KEY: &str = "survey_2026_answers";

const DONE_VALUE: &str = "true";

/// Survey state on top of a key-value store
#[derive(Debug)]
pub struct SurveyState<S> {
    store: S,
}

impl<S: KeyValueStore> SurveyState<S> {
    /// Wrap a store
    #[inline]
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether a previous run completed the survey
    ///
    /// Anything other than the exact string `"true"` counts as not completed.
    ///
    /// # Errors
    /// Backend failure.
    pub fn is_completed(&self) -> Result<bool, StoreError> {
        Ok(self.store.get(DONE_KEY)?.as_deref() == Some(DONE_VALUE))
    }

    /// Persisted answers, validated against the catalog
    ///
    /// # Errors
    /// [`StoreError::CorruptState`] when the value is not a JSON object of
    /// integers, names an unknown question, or holds an out-of-range answer.
    pub fn load_answers(&self, catalog: &Catalog) -> Result<Option<AnswerSet>, StoreError> {
        let Some(raw) = self.store.get(ANSWERS_KEY)? else {
            return Ok(None);
        };

        let answers = AnswerSet::from_json(&raw)
            .map_err(|e| StoreError::corrupt_state(ANSWERS_KEY, e))?;
        catalog
            .check_answers(&answers)
            .map_err(|e| StoreError::corrupt_state(ANSWERS_KEY, e))?;

        Ok(Some(answers))
    }

    /// Record a finished survey
    ///
    /// # Errors
    /// Encode or backend failure; the flag is written first, as the answers
    /// are only meaningful once it is set.
    pub fn save_completion(&self, answers: &AnswerSet) -> Result<(), StoreError> {
        let encoded = answers.to_json()?;
        self.store.set(DONE_KEY, DONE_VALUE)?;
        self.store.set(ANSWERS_KEY, &encoded)?;
        tracing::debug!(answers = answers.len(), "completion persisted");
        Ok(())
    }

    /// Forget completion flag and answers
    ///
    /// # Errors
    /// Backend failure.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.store.remove(DONE_KEY)?;
        self.store.remove(ANSWERS_KEY)?;
        tracing::debug!("persisted survey state cleared");
        Ok(())
    }
}
