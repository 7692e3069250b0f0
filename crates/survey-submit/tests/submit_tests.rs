//! HTTP submission and dispatch tests against a local fake endpoint

use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;
use survey_submit::{
    HttpSubmitter, NoopSubmitter, SubmissionDispatcher, SubmissionPayload, SubmitError, Submitter,
};
use survey_test_utils::{complete_answers, FailingSubmitter, RecordingSubmitter};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Raw request as seen by the fake endpoint
#[derive(Debug)]
struct CapturedRequest {
    head: String,
    body: String,
}

/// Serve exactly one request with the given status line
async fn one_shot_endpoint(status_line: &'static str) -> (String, oneshot::Receiver<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/api/submit", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        let head_end = loop {
            let n = socket.read(&mut chunk).await.unwrap();
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
        let length = head
            .lines()
            .find_map(|l| {
                let (name, value) = l.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        while buf.len() < head_end + length {
            let n = socket.read(&mut chunk).await.unwrap();
            buf.extend_from_slice(&chunk[..n]);
        }
        let body = String::from_utf8_lossy(&buf[head_end..head_end + length]).to_string();

        let response = format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
        socket.write_all(response.as_bytes()).await.unwrap();
        let _ = tx.send(CapturedRequest { head, body });
    });

    (url, rx)
}

#[tokio::test]
async fn test_http_submit_posts_json() {
    let (url, captured) = one_shot_endpoint("HTTP/1.1 200 OK").await;
    let submitter = HttpSubmitter::new(&url, Duration::from_secs(5)).unwrap();
    let payload = SubmissionPayload::new(complete_answers());

    submitter.submit(&payload).await.unwrap();

    let request = captured.await.unwrap();
    assert!(request.head.starts_with("POST /api/submit "));
    assert!(request
        .head
        .to_ascii_lowercase()
        .contains("content-type: application/json"));

    let body: serde_json::Value = serde_json::from_str(&request.body).unwrap();
    assert_eq!(body["data"]["q4"], 7);
    assert_eq!(body["data"]["q8"], 0);
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_http_submit_reports_status() {
    let (url, _captured) = one_shot_endpoint("HTTP/1.1 500 Internal Server Error").await;
    let submitter = HttpSubmitter::new(url, Duration::from_secs(5)).unwrap();

    let err = submitter
        .submit(&SubmissionPayload::new(complete_answers()))
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Status { status: 500 }));
    assert!(err.reached_endpoint());
}

#[tokio::test]
async fn test_http_submit_unreachable_endpoint() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}/", listener.local_addr().unwrap());
    drop(listener);

    let submitter = HttpSubmitter::new(url, Duration::from_secs(2)).unwrap();
    let err = submitter
        .submit(&SubmissionPayload::new(complete_answers()))
        .await
        .unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
    assert!(!err.reached_endpoint());
}

#[tokio::test]
async fn test_dispatch_delivers_in_background() {
    let recorder = RecordingSubmitter::new();
    let dispatcher = SubmissionDispatcher::from_current(recorder.clone()).unwrap();

    let handle = dispatcher.dispatch(SubmissionPayload::new(complete_answers()));
    recorder.wait_for_delivery().await;
    handle.await.unwrap();

    let payloads = recorder.payloads();
    assert_eq!(payloads.len(), 1);
    assert_eq!(payloads[0].data, complete_answers());
}

#[tokio::test]
async fn test_dispatch_swallows_failure() {
    let failing = FailingSubmitter::new();
    let dispatcher = SubmissionDispatcher::from_current(failing.clone()).unwrap();

    dispatcher
        .dispatch(SubmissionPayload::new(complete_answers()))
        .await
        .unwrap();
    assert_eq!(failing.attempts(), 1);
}

#[tokio::test]
async fn test_noop_submitter_accepts() {
    let dispatcher = SubmissionDispatcher::from_current(Arc::new(NoopSubmitter)).unwrap();
    assert_eq!(dispatcher.submitter().name(), "noop");
    dispatcher
        .dispatch(SubmissionPayload::new(complete_answers()))
        .await
        .unwrap();
}

#[test]
fn test_dispatcher_needs_runtime() {
    let err = SubmissionDispatcher::from_current(Arc::new(NoopSubmitter)).unwrap_err();
    assert!(matches!(err, SubmitError::NoRuntime));
}
