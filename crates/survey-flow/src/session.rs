//! Survey session
//!
//! Owns the view (survey or results) and wires the flow controller to the
//! persistence and submission ports.
//!
//! # Workflow
//! 1. [`SurveySession::start`] reads the completion flag and picks the view
//! 2. The front end drives [`FlowController`] through [`SurveySession::flow_mut`]
//! 3. [`SurveySession::submit`] dispatches the answers, persists them and
//!    switches to the results view
//! 4. [`SurveySession::reset`] forgets everything and starts over

use crate::error::SessionError;
use crate::flow::FlowController;
use std::sync::Arc;
use survey_catalog::{AnswerSet, Catalog};
use survey_scoring::ResultsReport;
use survey_store::{KeyValueStore, SurveyState};
use survey_submit::{SubmissionDispatcher, SubmissionPayload};
use tokio::task::JoinHandle;

/// What the user is looking at
#[derive(Debug, Clone)]
pub enum View {
    /// Answering questions
    Survey(FlowController),
    /// Looking at results; answers are present only if submitted in this
    /// session
    Results(Option<AnswerSet>),
}

impl View {
    fn fresh(catalog: &Arc<Catalog>) -> Self {
        Self::Survey(FlowController::new(Arc::clone(catalog)))
    }
}

/// Survey session over a key-value store
#[derive(Debug)]
pub struct SurveySession<S> {
    catalog: Arc<Catalog>,
    state: SurveyState<S>,
    dispatcher: SubmissionDispatcher,
    view: View,
    detached: Vec<JoinHandle<()>>,
}

impl<S: KeyValueStore> SurveySession<S> {
    /// Open a session, resuming in the results view if a previous run
    /// completed the survey
    ///
    /// # Errors
    /// Store backend failure while reading the completion flag.
    pub fn start(
        catalog: Arc<Catalog>,
        store: S,
        dispatcher: SubmissionDispatcher,
    ) -> Result<Self, SessionError> {
        let state = SurveyState::new(store);
        let view = if state.is_completed()? {
            tracing::info!("survey already completed, showing results");
            View::Results(None)
        } else {
            tracing::info!(questions = catalog.len(), "survey started");
            View::fresh(&catalog)
        };

        Ok(Self {
            catalog,
            state,
            dispatcher,
            view,
            detached: Vec::new(),
        })
    }

    /// Catalog in use
    #[inline]
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current view
    #[inline]
    #[must_use]
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Whether the results view is active
    #[inline]
    #[must_use]
    pub fn is_results(&self) -> bool {
        matches!(self.view, View::Results(_))
    }

    /// Persisted state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &SurveyState<S> {
        &self.state
    }

    /// Active flow controller
    #[must_use]
    pub fn flow(&self) -> Option<&FlowController> {
        match &self.view {
            View::Survey(flow) => Some(flow),
            View::Results(_) => None,
        }
    }

    /// Active flow controller, mutable
    ///
    /// # Errors
    /// [`SessionError::NotInSurvey`] in the results view.
    pub fn flow_mut(&mut self) -> Result<&mut FlowController, SessionError> {
        match &mut self.view {
            View::Survey(flow) => Ok(flow),
            View::Results(_) => Err(SessionError::NotInSurvey),
        }
    }

    /// Finish the survey
    ///
    /// The payload is handed to the dispatcher before anything is written
    /// locally; delivery runs on its own and its outcome is never reported
    /// here. The returned handle may be awaited or dropped.
    ///
    /// # Errors
    /// - [`SessionError::NotInSurvey`] in the results view
    /// - [`SessionError::Flow`] when the flow cannot be submitted yet; nothing
    ///   changes
    /// - [`SessionError::Store`] when persisting fails; the submission has
    ///   already been dispatched, its handle is kept for
    ///   [`take_detached`](Self::take_detached), and the view stays on the
    ///   survey so the submit can be retried
    pub fn submit(&mut self) -> Result<JoinHandle<()>, SessionError> {
        let answers = match &self.view {
            View::Survey(flow) => flow.submit()?,
            View::Results(_) => return Err(SessionError::NotInSurvey),
        };

        let handle = self
            .dispatcher
            .dispatch(SubmissionPayload::new(answers.clone()));
        if let Err(e) = self.state.save_completion(&answers) {
            tracing::warn!(error = %e, "answers dispatched but not saved");
            self.detached.push(handle);
            return Err(e.into());
        }

        tracing::info!(answers = answers.len(), "survey submitted");
        self.view = View::Results(Some(answers));
        Ok(handle)
    }

    /// Deliveries started by submits whose local save failed
    ///
    /// Callers about to exit can await these so the requests are not cut off.
    pub fn take_detached(&mut self) -> Vec<JoinHandle<()>> {
        std::mem::take(&mut self.detached)
    }

    /// Results for the current view
    ///
    /// Uses the answers submitted in this session, else the persisted ones.
    /// Without either, the report carries placeholder statistics and the
    /// anonymous-data notice.
    ///
    /// # Errors
    /// - [`SessionError::NotInResults`] in the survey view
    /// - [`SessionError::Store`] when persisted answers cannot be read or are
    ///   corrupt
    pub fn results(&self) -> Result<ResultsReport, SessionError> {
        let View::Results(in_memory) = &self.view else {
            return Err(SessionError::NotInResults);
        };

        if let Some(answers) = in_memory {
            return Ok(ResultsReport::build(&self.catalog, Some(answers)));
        }

        let persisted = match self.state.load_answers(&self.catalog) {
            Ok(persisted) => persisted,
            Err(e) => {
                if e.is_corrupt() {
                    tracing::warn!(error = %e, "persisted answers are corrupt");
                }
                return Err(e.into());
            }
        };
        Ok(ResultsReport::build(&self.catalog, persisted.as_ref()))
    }

    /// Forget completion and answers, start a fresh survey
    ///
    /// # Errors
    /// Store backend failure; the view is left unchanged.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.state.clear()?;
        self.view = View::fresh(&self.catalog);
        tracing::info!("survey reset");
        Ok(())
    }
}
