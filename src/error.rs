use thiserror::Error;

/// Failure taxonomy for a pipeline run.
///
/// Every variant except `ClientDisconnected` is converted to exactly one
/// client-visible `Error` event at the orchestrator boundary. `ClientDisconnected`
/// is a cancellation signal: the client is gone, so there is nobody to tell.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The requested source file does not exist. Detected before any stage runs.
    #[error("{message}")]
    Validation { message: String },

    /// The external decoding process failed. A non-zero exit is the only
    /// failure signal it gives us.
    #[error("audio extraction failed: {message}")]
    ExternalProcess { message: String },

    /// The inference engines failed to initialize at startup. Permanent for
    /// the lifetime of the process; every call fails fast.
    #[error("AI models failed to load at startup. Check console logs.")]
    ModelsUnavailable,

    /// A single inference call failed. No retries; the underlying message is
    /// preserved for diagnostics.
    #[error("inference failed: {message}")]
    Inference { message: String },

    /// The client dropped the connection mid-stream. Not an error event;
    /// remaining stages are abandoned and cleanup still runs.
    #[error("client disconnected")]
    ClientDisconnected,
}

impl PipelineError {
    /// Human-readable message for the client-visible `Error` event.
    pub fn client_message(&self) -> String {
        match self {
            PipelineError::Validation { message } => message.clone(),
            PipelineError::ModelsUnavailable => self.to_string(),
            other => format!("Processing failed: {other}"),
        }
    }
}
