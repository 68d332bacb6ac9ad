use serde_json::json;

/// One unit of progress pushed to the client over the open stream.
///
/// Exactly one `Done` is emitted per stream, always last, on every code path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Status { message: String },
    TranscriptChunk { text: String },
    SummaryChunk { text: String },
    Decision { text: String },
    ActionItem { text: String },
    Error { message: String },
    Done,
}

impl Event {
    /// The wire payload carried on the SSE `data:` line.
    ///
    /// Each variant serializes to a JSON object with its own key set;
    /// consumers discriminate on which key is present, not on a fixed
    /// schema. `Done` is not JSON: it is the literal `[DONE]` sentinel the
    /// client uses to stop listening.
    pub fn wire_data(&self) -> String {
        match self {
            Event::Status { message } => json!({ "tag": "STATUS", "message": message }).to_string(),
            Event::TranscriptChunk { text } => json!({ "transcript": text }).to_string(),
            Event::SummaryChunk { text } => json!({ "summary": text }).to_string(),
            Event::Decision { text } => json!({ "decision": text }).to_string(),
            Event::ActionItem { text } => json!({ "action_item": text }).to_string(),
            Event::Error { message } => json!({ "tag": "ERROR", "message": message }).to_string(),
            Event::Done => "[DONE]".to_string(),
        }
    }

    /// Adapt to an axum server-sent event (`data: <payload>\n\n` on the wire).
    pub fn into_sse(self) -> axum::response::sse::Event {
        axum::response::sse::Event::default().data(self.wire_data())
    }
}
