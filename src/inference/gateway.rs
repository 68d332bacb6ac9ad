use crate::error::PipelineError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Speech-recognition collaborator. Inputs an audio file path plus chunking
/// parameters, returns the transcript text. Calls are blocking and
/// resource-intensive.
pub trait SpeechToText: Send + Sync {
    fn transcribe(&self, audio_path: &Path, chunk_length_secs: u32) -> anyhow::Result<String>;
}

/// Summarization collaborator. Inputs a text blob plus length bounds,
/// returns the summary text. Calls are blocking and resource-intensive.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, text: &str, max_length: u32, min_length: u32) -> anyhow::Result<String>;
}

struct Models {
    asr: Arc<dyn SpeechToText>,
    summarizer: Arc<dyn Summarizer>,
}

/// Executes inference calls on the blocking thread pool so the event loop
/// keeps servicing connections and flushing queued events.
///
/// Shared read-only across all requests: initialized once before serving
/// begins, never mutated per-request. If the engines failed to initialize,
/// the gateway is permanently degraded and every call fails fast with
/// `ModelsUnavailable` without attempting the call. No internal retries; a
/// failed call surfaces as a single `Inference` error with the underlying
/// message preserved.
pub struct InferenceGateway {
    models: Option<Models>,
}

impl InferenceGateway {
    pub fn new(asr: Arc<dyn SpeechToText>, summarizer: Arc<dyn Summarizer>) -> Self {
        Self {
            models: Some(Models { asr, summarizer }),
        }
    }

    /// Gateway in the permanent degraded state.
    pub fn degraded() -> Self {
        Self { models: None }
    }

    pub fn is_degraded(&self) -> bool {
        self.models.is_none()
    }

    /// Fail fast if the engines never initialized.
    pub fn ensure_available(&self) -> Result<(), PipelineError> {
        if self.models.is_none() {
            return Err(PipelineError::ModelsUnavailable);
        }
        Ok(())
    }

    pub async fn transcribe(
        &self,
        audio_path: &Path,
        chunk_length_secs: u32,
    ) -> Result<String, PipelineError> {
        let models = self.models.as_ref().ok_or(PipelineError::ModelsUnavailable)?;
        let asr = Arc::clone(&models.asr);
        let path: PathBuf = audio_path.to_path_buf();

        info!("Running speech recognition on {}", path.display());

        tokio::task::spawn_blocking(move || asr.transcribe(&path, chunk_length_secs))
            .await
            .map_err(|e| PipelineError::Inference {
                message: format!("transcription task panicked: {e}"),
            })?
            .map_err(|e| PipelineError::Inference {
                message: e.to_string(),
            })
    }

    pub async fn summarize(
        &self,
        text: String,
        max_length: u32,
        min_length: u32,
    ) -> Result<String, PipelineError> {
        let models = self.models.as_ref().ok_or(PipelineError::ModelsUnavailable)?;
        let summarizer = Arc::clone(&models.summarizer);

        tokio::task::spawn_blocking(move || summarizer.summarize(&text, max_length, min_length))
            .await
            .map_err(|e| PipelineError::Inference {
                message: format!("summarization task panicked: {e}"),
            })?
            .map_err(|e| PipelineError::Inference {
                message: e.to_string(),
            })
    }
}
