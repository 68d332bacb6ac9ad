use crate::audio::MediaExtractor;
use crate::config::PipelineConfig;
use crate::inference::InferenceGateway;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state for HTTP handlers.
///
/// The gateway and extractor are read-only capabilities shared by all
/// requests; each stream request gets its own job and orchestrator.
#[derive(Clone)]
pub struct AppState {
    pub upload_dir: PathBuf,
    pub pipeline: PipelineConfig,
    pub gateway: Arc<InferenceGateway>,
    pub extractor: Arc<dyn MediaExtractor>,
}

impl AppState {
    pub fn new(
        upload_dir: PathBuf,
        pipeline: PipelineConfig,
        gateway: Arc<InferenceGateway>,
        extractor: Arc<dyn MediaExtractor>,
    ) -> Self {
        Self {
            upload_dir,
            pipeline,
            gateway,
            extractor,
        }
    }
}
