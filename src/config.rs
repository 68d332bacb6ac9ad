use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
    /// Origins allowed by CORS (the development frontend).
    #[serde(default)]
    pub allow_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory uploaded recordings are persisted under, keyed by filename.
    pub upload_dir: String,
}

/// External inference collaborators, selected at process startup. Empty
/// commands leave the gateway in the permanent degraded state.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InferenceConfig {
    /// Speech-to-text command; `{input}` and `{chunk_length}` placeholders
    /// are substituted per call.
    #[serde(default)]
    pub asr_command: Vec<String>,

    /// Summarization command; text on stdin, `{max_length}`/`{min_length}`
    /// placeholders substituted per call.
    #[serde(default)]
    pub summarizer_command: Vec<String>,
}

/// Bounded numeric parameters for the pipeline stages.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    /// ASR chunking window in seconds.
    #[serde(default = "default_chunk_length_secs")]
    pub chunk_length_secs: u32,

    /// Soft word ceiling for summarization segments.
    #[serde(default = "default_segment_max_words")]
    pub segment_max_words: usize,

    /// Length bounds for per-segment summaries.
    #[serde(default = "default_summary_max_length")]
    pub summary_max_length: u32,
    #[serde(default = "default_summary_min_length")]
    pub summary_min_length: u32,

    /// Shorter length bounds for the decision / action-item extraction calls.
    #[serde(default = "default_extract_max_length")]
    pub extract_max_length: u32,
    #[serde(default = "default_extract_min_length")]
    pub extract_min_length: u32,
}

fn default_chunk_length_secs() -> u32 {
    30
}
fn default_segment_max_words() -> usize {
    400
}
fn default_summary_max_length() -> u32 {
    120
}
fn default_summary_min_length() -> u32 {
    30
}
fn default_extract_max_length() -> u32 {
    150
}
fn default_extract_min_length() -> u32 {
    10
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_length_secs: default_chunk_length_secs(),
            segment_max_words: default_segment_max_words(),
            summary_max_length: default_summary_max_length(),
            summary_min_length: default_summary_min_length(),
            extract_max_length: default_extract_max_length(),
            extract_min_length: default_extract_min_length(),
        }
    }
}

impl Config {
    /// Load from the named config file, overridable through the environment
    /// (`MEETING_INSIGHTS__INFERENCE__ASR_COMMAND`, ...).
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(config::Environment::with_prefix("MEETING_INSIGHTS").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
