use super::job::Job;
use super::stage::Stage;
use crate::audio::MediaExtractor;
use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::events::{Event, EventSink};
use crate::inference::InferenceGateway;
use crate::segment;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

const DECISION_PROMPT: &str = "From the following transcript, identify and list any key decisions made. If no clear decisions are found, state 'No key decisions were explicitly mentioned.': ";
const ACTION_ITEM_PROMPT: &str = "From the following transcript, list all action items or next steps assigned to individuals. If none are found, state 'No specific action items were assigned.': ";

/// Drives the end-to-end pipeline for a single client stream.
///
/// One orchestrator instance per request; the shared inference gateway is an
/// injected read-only capability. Whatever happens inside the stages, the
/// stream always ends with cleanup of the intermediate audio artifact and
/// exactly one `Done` event.
pub struct Orchestrator {
    gateway: Arc<InferenceGateway>,
    extractor: Arc<dyn MediaExtractor>,
    params: PipelineConfig,
    upload_dir: PathBuf,
}

impl Orchestrator {
    pub fn new(
        gateway: Arc<InferenceGateway>,
        extractor: Arc<dyn MediaExtractor>,
        params: PipelineConfig,
        upload_dir: PathBuf,
    ) -> Self {
        Self {
            gateway,
            extractor,
            params,
            upload_dir,
        }
    }

    /// Run the whole pipeline, emitting progress into `sink`.
    ///
    /// Every failure is converted to a single client-visible `Error` event
    /// here; a disconnected client aborts the remaining stages silently.
    /// Cleanup and the final `Done` run exactly once on every path.
    pub async fn run(self, source_file: String, sink: EventSink) {
        let mut job = Job::new(&self.upload_dir, &source_file);
        info!("Starting pipeline job {} for {}", job.id, source_file);

        match self.execute(&mut job, &sink).await {
            Ok(()) => {
                info!("Pipeline job {} completed", job.id);
            }
            Err(PipelineError::ClientDisconnected) => {
                // Nobody left to tell; just stop and clean up.
                warn!("Client disconnected during job {}", job.id);
            }
            Err(e) => {
                error!("Pipeline job {} failed: {}", job.id, e);
                job.advance(Stage::Failed);
                let _ = sink
                    .emit(Event::Error {
                        message: e.client_message(),
                    })
                    .await;
            }
        }

        self.cleanup(&job).await;

        let _ = sink.emit(Event::Done).await;
        sink.close();
    }

    async fn execute(&self, job: &mut Job, sink: &EventSink) -> Result<(), PipelineError> {
        // Degraded engines fail every request before any stage runs.
        self.gateway.ensure_available()?;

        if tokio::fs::metadata(&job.source_path).await.is_err() {
            return Err(PipelineError::Validation {
                message: "File not found on server.".to_string(),
            });
        }

        sink.emit(Event::Status {
            message: "Connection established. Starting audio extraction...".to_string(),
        })
        .await?;

        job.advance(Stage::Extracting);
        self.extractor
            .extract(&job.source_path, &job.audio_path)
            .await?;

        job.advance(Stage::Transcribing);
        sink.emit(Event::Status {
            message: "Running speech recognition... (This may take a moment)".to_string(),
        })
        .await?;

        let transcript = self
            .gateway
            .transcribe(&job.audio_path, self.params.chunk_length_secs)
            .await?;
        job.transcript = transcript.trim().to_string();
        info!("Transcript length: {} characters", job.transcript.len());

        for chunk in segment::display_chunks(&job.transcript) {
            sink.emit(Event::TranscriptChunk { text: chunk }).await?;
        }

        sink.emit(Event::Status {
            message: "Transcription complete. Starting structured analysis...".to_string(),
        })
        .await?;

        job.advance(Stage::Segmenting);
        let segments = segment::segment_transcript(&job.transcript, self.params.segment_max_words);
        info!("Generated {} segments for summarization", segments.len());

        sink.emit(Event::Status {
            message: format!("Summarizing {} text blocks...", segments.len()),
        })
        .await?;

        job.advance(Stage::Summarizing);
        let mut summary_parts = Vec::with_capacity(segments.len());
        for seg in &segments {
            // Streamed per segment, never batched; one failed segment aborts
            // the whole run.
            let summary = self
                .gateway
                .summarize(
                    seg.text(),
                    self.params.summary_max_length,
                    self.params.summary_min_length,
                )
                .await?;
            sink.emit(Event::SummaryChunk {
                text: summary.clone(),
            })
            .await?;
            summary_parts.push(summary);
        }
        job.segments = segments;
        job.summary_parts = summary_parts;

        // The two extraction calls run against the full transcript, not the
        // segments, with shorter length bounds than segment summarization.
        job.advance(Stage::ExtractingDecisions);
        sink.emit(Event::Status {
            message: "Extracting Key Decisions...".to_string(),
        })
        .await?;

        let decisions = self
            .gateway
            .summarize(
                format!("{DECISION_PROMPT}{}", job.transcript),
                self.params.extract_max_length,
                self.params.extract_min_length,
            )
            .await?
            .trim()
            .to_string();
        sink.emit(Event::Decision {
            text: decisions.clone(),
        })
        .await?;
        job.decisions = Some(decisions);

        job.advance(Stage::ExtractingActionItems);
        sink.emit(Event::Status {
            message: "Extracting Action Items...".to_string(),
        })
        .await?;

        let action_items = self
            .gateway
            .summarize(
                format!("{ACTION_ITEM_PROMPT}{}", job.transcript),
                self.params.extract_max_length,
                self.params.extract_min_length,
            )
            .await?
            .trim()
            .to_string();
        sink.emit(Event::ActionItem {
            text: action_items.clone(),
        })
        .await?;
        job.action_items = Some(action_items);

        sink.emit(Event::Status {
            message: "Structured analysis complete. Report ready.".to_string(),
        })
        .await?;

        job.advance(Stage::Completed);
        Ok(())
    }

    /// Delete the intermediate audio artifact. Missing file is a no-op, not
    /// an error: the failure may have happened before extraction. The
    /// uploaded source file is never touched.
    async fn cleanup(&self, job: &Job) {
        match tokio::fs::remove_file(&job.audio_path).await {
            Ok(()) => info!("Cleaned up {}", job.audio_path.display()),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove {}: {}", job.audio_path.display(), e),
        }
    }
}
