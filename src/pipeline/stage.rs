/// One named step in the orchestrator's state machine.
///
/// The happy path is strictly linear; `Failed` is an absorbing state
/// reachable from any non-terminal stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    Extracting,
    Transcribing,
    Segmenting,
    Summarizing,
    ExtractingDecisions,
    ExtractingActionItems,
    Completed,
    Failed,
}

impl Stage {
    pub fn is_terminal(self) -> bool {
        matches!(self, Stage::Completed | Stage::Failed)
    }

    /// Whether `next` is a legal successor of this stage.
    pub fn can_advance_to(self, next: Stage) -> bool {
        use Stage::*;
        match (self, next) {
            (Init, Extracting)
            | (Extracting, Transcribing)
            | (Transcribing, Segmenting)
            | (Segmenting, Summarizing)
            | (Summarizing, ExtractingDecisions)
            | (ExtractingDecisions, ExtractingActionItems)
            | (ExtractingActionItems, Completed) => true,
            (from, Failed) => !from.is_terminal(),
            _ => false,
        }
    }
}
