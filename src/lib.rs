pub mod audio;
pub mod config;
pub mod error;
pub mod events;
pub mod http;
pub mod inference;
pub mod pipeline;
pub mod segment;

pub use audio::{FfmpegExtractor, MediaExtractor};
pub use config::{Config, InferenceConfig, PipelineConfig};
pub use error::PipelineError;
pub use events::{Event, EventSink};
pub use http::{create_router, AppState};
pub use inference::{InferenceGateway, SpeechToText, Summarizer};
pub use pipeline::{Job, Orchestrator, Stage};
pub use segment::{display_chunks, segment_transcript, split_sentences, Segment};
