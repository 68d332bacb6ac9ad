use super::state::AppState;
use crate::events::{Event, EventSink};
use crate::pipeline::Orchestrator;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::sse::{KeepAlive, Sse},
    response::{IntoResponse, Json},
};
use futures::stream::Stream;
use serde::Serialize;
use std::convert::Infallible;
use std::path::Path as FsPath;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::StreamExt;
use tracing::{error, info};

/// Bounded per-stream event buffer; emits are write-through, so this only
/// smooths bursts, it never accumulates a backlog.
const EVENT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// POST /upload-meeting
/// Persist the uploaded recording under the upload directory, keyed by its
/// client filename. Last write wins on collision.
pub async fn upload_meeting(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> impl IntoResponse {
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Malformed multipart request: {e}"),
                    }),
                )
                    .into_response();
            }
        };

        let Some(filename) = field.file_name().map(sanitize_filename) else {
            continue;
        };

        let bytes = match field.bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: format!("Failed to read uploaded file: {e}"),
                    }),
                )
                    .into_response();
            }
        };

        if filename.is_empty() || bytes.is_empty() {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Empty file uploaded.".to_string(),
                }),
            )
                .into_response();
        }

        let path = state.upload_dir.join(&filename);
        if let Err(e) = tokio::fs::write(&path, &bytes).await {
            error!("Failed to persist upload {}: {}", path.display(), e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: format!("Failed to persist upload: {e}"),
                }),
            )
                .into_response();
        }

        info!("File uploaded: {} ({} bytes)", filename, bytes.len());
        return (StatusCode::OK, Json(UploadResponse { filename })).into_response();
    }

    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Empty file uploaded.".to_string(),
        }),
    )
        .into_response()
}

/// GET /transcribe-stream/:filename
/// Open a server-sent event stream and run the pipeline for the given
/// uploaded file. Each event is one JSON object; `data: [DONE]` terminates
/// the stream on every path.
pub async fn transcribe_stream(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Sse<impl Stream<Item = Result<axum::response::sse::Event, Infallible>>> {
    let filename = sanitize_filename(&filename);
    info!("Stream requested for {}", filename);

    let (sink, rx) = EventSink::channel(EVENT_CHANNEL_CAPACITY);

    let orchestrator = Orchestrator::new(
        state.gateway,
        state.extractor,
        state.pipeline,
        state.upload_dir,
    );
    tokio::spawn(orchestrator.run(filename, sink));

    let stream = ReceiverStream::new(rx).map(|event: Event| Ok(event.into_sse()));
    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// GET /health
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Strip any path components so uploads stay inside the upload directory.
fn sanitize_filename(name: &str) -> String {
    FsPath::new(name)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
