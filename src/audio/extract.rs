use crate::error::PipelineError;
use async_trait::async_trait;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::info;

/// Strips the audio track from an input media file into a stable
/// intermediate format.
///
/// Implementations must run asynchronously relative to the event loop so
/// progress-event delivery is not blocked while the external process runs.
#[async_trait]
pub trait MediaExtractor: Send + Sync {
    async fn extract(&self, input: &Path, output: &Path) -> Result<(), PipelineError>;
}

/// Extracts audio by invoking `ffmpeg` non-interactively.
///
/// Output/error streams are discarded and any existing output file is
/// overwritten. A non-zero exit is the only failure signal ffmpeg gives us;
/// no output file is assumed to exist after a failure.
pub struct FfmpegExtractor;

#[async_trait]
impl MediaExtractor for FfmpegExtractor {
    async fn extract(&self, input: &Path, output: &Path) -> Result<(), PipelineError> {
        info!("Extracting audio from {}", input.display());

        let status = Command::new("ffmpeg")
            .arg("-y")
            .arg("-i")
            .arg(input)
            .arg("-vn")
            .arg("-acodec")
            .arg("mp3")
            .arg(output)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| PipelineError::ExternalProcess {
                message: format!("failed to launch ffmpeg: {e}"),
            })?;

        if !status.success() {
            return Err(PipelineError::ExternalProcess {
                message: format!("ffmpeg exited with {status}"),
            });
        }

        info!("Audio extracted to {}", output.display());

        Ok(())
    }
}
