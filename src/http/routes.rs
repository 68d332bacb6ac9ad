use super::handlers;
use super::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Meeting recordings are large; allow up to 512 MiB per upload.
const MAX_UPLOAD_BYTES: usize = 512 * 1024 * 1024;

/// Create the HTTP router with all routes
pub fn create_router(state: AppState, allow_origins: &[String]) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Upload a meeting recording
        .route("/upload-meeting", post(handlers::upload_meeting))
        // Progressive transcription + analysis stream
        .route(
            "/transcribe-stream/:filename",
            get(handlers::transcribe_stream),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors_layer(allow_origins))
        // Add tracing middleware for request logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(allow_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allow_origins.iter().filter_map(|o| o.parse().ok()).collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
