//! HTTP surface for the streaming pipeline
//!
//! - POST /upload-meeting - persist an uploaded recording, return its filename
//! - GET /transcribe-stream/:filename - SSE stream of pipeline events,
//!   terminated by the literal `data: [DONE]` line
//! - GET /health - health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
