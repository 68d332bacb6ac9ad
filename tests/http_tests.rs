// Integration tests for the HTTP surface
//
// These exercise the router directly with tower's oneshot, without binding a
// socket: upload persistence, the SSE error path for a degraded gateway, and
// the health check.

use anyhow::Result;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use meeting_insights::{
    create_router, AppState, FfmpegExtractor, InferenceGateway, PipelineConfig,
};
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn make_state(upload_dir: &TempDir, gateway: InferenceGateway) -> AppState {
    AppState::new(
        upload_dir.path().to_path_buf(),
        PipelineConfig::default(),
        Arc::new(gateway),
        Arc::new(FfmpegExtractor),
    )
}

#[tokio::test]
async fn test_health_check() -> Result<()> {
    let temp = TempDir::new()?;
    let router = create_router(make_state(&temp, InferenceGateway::degraded()), &[]);

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty())?)
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    Ok(())
}

#[tokio::test]
async fn test_upload_persists_file_and_returns_filename() -> Result<()> {
    let temp = TempDir::new()?;
    let router = create_router(make_state(&temp, InferenceGateway::degraded()), &[]);

    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"file\"; filename=\"standup.mp4\"\r\n\
         Content-Type: video/mp4\r\n\r\n\
         fake video bytes\r\n\
         --{boundary}--\r\n"
    );

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/upload-meeting")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let value: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(value["filename"], "standup.mp4");

    let persisted = std::fs::read(temp.path().join("standup.mp4"))?;
    assert_eq!(persisted, b"fake video bytes");
    Ok(())
}

#[tokio::test]
async fn test_upload_without_file_part_is_rejected() -> Result<()> {
    let temp = TempDir::new()?;
    let router = create_router(make_state(&temp, InferenceGateway::degraded()), &[]);

    let boundary = "test-boundary";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"note\"\r\n\r\n\
         no file here\r\n\
         --{boundary}--\r\n"
    );

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/upload-meeting")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn test_degraded_stream_emits_error_then_done() -> Result<()> {
    let temp = TempDir::new()?;
    let router = create_router(make_state(&temp, InferenceGateway::degraded()), &[]);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/transcribe-stream/anything.mp4")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/event-stream"));

    // The stream terminates after Done, so the whole body can be collected.
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = String::from_utf8(bytes.to_vec())?;

    assert!(body.contains(r#"data: {"message":"AI models failed to load at startup. Check console logs.","tag":"ERROR"}"#));
    assert!(body.trim_end().ends_with("data: [DONE]"));
    Ok(())
}

#[tokio::test]
async fn test_stream_for_missing_file_emits_error_then_done() -> Result<()> {
    // A live gateway whose engines are never reached: validation fails first.
    struct NeverSpeechToText;
    impl meeting_insights::SpeechToText for NeverSpeechToText {
        fn transcribe(&self, _: &std::path::Path, _: u32) -> Result<String> {
            unreachable!("validation must fail before transcription")
        }
    }
    struct NeverSummarizer;
    impl meeting_insights::Summarizer for NeverSummarizer {
        fn summarize(&self, _: &str, _: u32, _: u32) -> Result<String> {
            unreachable!("validation must fail before summarization")
        }
    }

    let temp = TempDir::new()?;
    let gateway = InferenceGateway::new(Arc::new(NeverSpeechToText), Arc::new(NeverSummarizer));
    let router = create_router(make_state(&temp, gateway), &[]);

    let response = router
        .oneshot(
            Request::builder()
                .uri("/transcribe-stream/missing.mp4")
                .body(Body::empty())?,
        )
        .await?;

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let body = String::from_utf8(bytes.to_vec())?;

    assert!(body.contains(r#"data: {"message":"File not found on server.","tag":"ERROR"}"#));
    assert!(body.trim_end().ends_with("data: [DONE]"));
    Ok(())
}
