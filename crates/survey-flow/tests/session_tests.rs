//! Session scenarios: submit, restart, corrupt state, reset

use pretty_assertions::assert_eq;
use std::sync::Arc;
use survey_catalog::{AnswerSet, Catalog};
use survey_flow::{SessionError, SurveySession, View};
use survey_scoring::StatisticsOrigin;
use survey_store::{FileStore, KeyValueStore, MemoryStore, ANSWERS_KEY, DONE_KEY};
use survey_submit::{SubmissionDispatcher, Submitter};
use survey_test_utils::{
    complete_answers, FailingSubmitter, FlakyStore, RecordingSubmitter, StalledSubmitter,
};

fn catalog() -> Arc<Catalog> {
    Arc::new(Catalog::builtin())
}

fn dispatcher(submitter: Arc<dyn Submitter>) -> SubmissionDispatcher {
    SubmissionDispatcher::from_current(submitter).unwrap()
}

/// Walk every question, answering from `answers`, and stop on the last one
fn answer_all<S: KeyValueStore>(session: &mut SurveySession<S>, answers: &AnswerSet) {
    let flow = session.flow_mut().unwrap();
    loop {
        let id = flow.current_question().id.clone();
        flow.answer_current(answers.get(id.as_str()).unwrap()).unwrap();
        if flow.is_last() {
            break;
        }
        flow.advance().unwrap();
    }
}

#[tokio::test]
async fn test_submit_persists_and_shows_results() {
    let recorder = RecordingSubmitter::new();
    let store = Arc::new(MemoryStore::new());
    let mut session = SurveySession::start(catalog(), store.clone(), dispatcher(recorder.clone())).unwrap();

    answer_all(&mut session, &complete_answers());
    let flow = session.flow().unwrap();
    assert_eq!(flow.position_label(), "Frage 9 von 9");
    assert_eq!(flow.progress_rounded(), 89);

    let handle = session.submit().unwrap();
    assert!(session.is_results());
    assert!(matches!(session.view(), View::Results(Some(_))));

    assert_eq!(store.get(DONE_KEY).unwrap().as_deref(), Some("true"));
    let persisted = AnswerSet::from_json(&store.get(ANSWERS_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(persisted, complete_answers());

    handle.await.unwrap();
    let payloads = recorder.payloads();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].data, complete_answers());

    let report = session.results().unwrap();
    assert_eq!(report.statistics.origin, StatisticsOrigin::Measured);
    assert_eq!(report.notice, None);
    let means: Vec<f64> = report.radar.axes.iter().map(|a| a.value).collect();
    assert_eq!(means, vec![5.0, 7.0, 4.0]);
}

#[tokio::test]
async fn test_restart_reads_persisted_answers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.json");

    {
        let store = FileStore::open(&path).unwrap();
        let mut session = SurveySession::start(catalog(), store, dispatcher(RecordingSubmitter::new())).unwrap();
        answer_all(&mut session, &complete_answers());
        session.submit().unwrap().await.unwrap();
    }

    let store = FileStore::open(&path).unwrap();
    let session = SurveySession::start(catalog(), store, dispatcher(RecordingSubmitter::new())).unwrap();
    assert!(matches!(session.view(), View::Results(None)));

    let report = session.results().unwrap();
    assert_eq!(report.statistics.origin, StatisticsOrigin::Measured);
    assert_eq!(report.statistics.get("Funktion").unwrap().values, vec![4, 4, 4]);
}

#[tokio::test]
async fn test_completed_without_answers_shows_placeholder() {
    let store = MemoryStore::new();
    store.set(DONE_KEY, "true").unwrap();
    let session = SurveySession::start(catalog(), store, dispatcher(RecordingSubmitter::new())).unwrap();

    let report = session.results().unwrap();
    assert!(report.statistics.is_placeholder());
    assert!(report.notice.is_some());
    let usability = report.statistics.get("Usability").unwrap();
    assert_eq!((usability.mean, usability.sd), (3.0, 0.5));
}

#[tokio::test]
async fn test_corrupt_answers_are_an_error() {
    let store = MemoryStore::new();
    store.set(DONE_KEY, "true").unwrap();
    store.set(ANSWERS_KEY, r#"{"q1": 42}"#).unwrap();
    let session = SurveySession::start(catalog(), store, dispatcher(RecordingSubmitter::new())).unwrap();

    let err = session.results().unwrap_err();
    assert!(err.is_corrupt_state());
}

#[tokio::test]
async fn test_flag_other_than_true_starts_survey() {
    let store = MemoryStore::new();
    store.set(DONE_KEY, "yes").unwrap();
    let session = SurveySession::start(catalog(), store, dispatcher(RecordingSubmitter::new())).unwrap();
    assert!(!session.is_results());
}

#[tokio::test]
async fn test_store_failure_after_dispatch() {
    let recorder = RecordingSubmitter::new();
    let store = FlakyStore::new();
    let mut session = SurveySession::start(catalog(), store.clone(), dispatcher(recorder.clone())).unwrap();
    answer_all(&mut session, &complete_answers());

    store.fail_writes(true);
    let err = session.submit().unwrap_err();
    assert!(matches!(err, SessionError::Store(_)));
    assert!(!session.is_results());

    // already dispatched before the write failed; the handle is kept
    let detached = session.take_detached();
    assert_eq!(detached.len(), 1);
    for handle in detached {
        handle.await.unwrap();
    }
    assert_eq!(recorder.payloads().len(), 1);
    assert!(session.take_detached().is_empty());

    store.fail_writes(false);
    session.submit().unwrap();
    assert!(session.is_results());
}

#[tokio::test]
async fn test_failed_submission_does_not_block_results() {
    let failing = FailingSubmitter::new();
    let mut session = SurveySession::start(catalog(), MemoryStore::new(), dispatcher(failing.clone())).unwrap();
    answer_all(&mut session, &complete_answers());

    session.submit().unwrap().await.unwrap();
    assert_eq!(failing.attempts(), 1);
    assert!(session.is_results());
    assert!(session.state().is_completed().unwrap());
}

#[tokio::test]
async fn test_stalled_submission_is_not_awaited() {
    let mut session =
        SurveySession::start(catalog(), MemoryStore::new(), dispatcher(Arc::new(StalledSubmitter))).unwrap();
    answer_all(&mut session, &complete_answers());

    let handle = session.submit().unwrap();
    assert!(session.is_results());
    assert!(!handle.is_finished());
    handle.abort();
}

#[tokio::test]
async fn test_reset_starts_over() {
    let store = Arc::new(MemoryStore::new());
    let mut session =
        SurveySession::start(catalog(), store.clone(), dispatcher(RecordingSubmitter::new())).unwrap();
    answer_all(&mut session, &complete_answers());
    session.submit().unwrap();

    session.reset().unwrap();
    assert!(!session.is_results());
    let flow = session.flow().unwrap();
    assert_eq!(flow.index(), 0);
    assert!(flow.answers().is_empty());
    assert_eq!(store.get(DONE_KEY).unwrap(), None);
    assert_eq!(store.get(ANSWERS_KEY).unwrap(), None);
}
