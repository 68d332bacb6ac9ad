use super::stage::Stage;
use crate::segment::Segment;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// State for one pipeline run.
///
/// Created when a stream request arrives, owned exclusively by the
/// orchestrator handling that request, and discarded when the stream ends.
/// Never shared across requests or persisted.
pub struct Job {
    pub id: Uuid,

    /// Client-supplied identifier of the uploaded source file.
    pub source_file: String,

    /// Full path of the uploaded source file.
    pub source_path: PathBuf,

    /// Intermediate audio artifact, deleted on every terminal path.
    pub audio_path: PathBuf,

    /// Accumulated transcript (set after speech recognition).
    pub transcript: String,

    /// Sentence-aligned segments fed to summarization.
    pub segments: Vec<Segment>,

    /// One summary fragment per segment, in segment order.
    pub summary_parts: Vec<String>,

    /// Key-decision extraction result.
    pub decisions: Option<String>,

    /// Action-item extraction result.
    pub action_items: Option<String>,

    stage: Stage,
}

impl Job {
    pub fn new(upload_dir: &Path, source_file: &str) -> Self {
        let source_path = upload_dir.join(source_file);
        let stem = Path::new(source_file)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| source_file.to_string());
        let audio_path = upload_dir.join(format!("{stem}_temp_audio.mp3"));

        Self {
            id: Uuid::new_v4(),
            source_file: source_file.to_string(),
            source_path,
            audio_path,
            transcript: String::new(),
            segments: Vec::new(),
            summary_parts: Vec::new(),
            decisions: None,
            action_items: None,
            stage: Stage::Init,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Advance the state machine. Illegal transitions are a programming
    /// error and trip under tests.
    pub fn advance(&mut self, next: Stage) {
        debug_assert!(
            self.stage.can_advance_to(next),
            "illegal stage transition {:?} -> {:?}",
            self.stage,
            next
        );
        self.stage = next;
    }
}
