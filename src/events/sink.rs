use super::event::Event;
use crate::error::PipelineError;
use tokio::sync::mpsc;

/// Write-through sender half of one client's event stream.
///
/// The channel is bounded, so no unbounded backlog can accumulate; events
/// are delivered strictly in the order they are emitted. A failed send means
/// the receiver is gone, which the orchestrator observes as
/// `ClientDisconnected` at its next emit.
pub struct EventSink {
    tx: mpsc::Sender<Event>,
}

impl EventSink {
    /// Create a sink and the receiver half that feeds the client connection.
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Event>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self { tx }, rx)
    }

    pub async fn emit(&self, event: Event) -> Result<(), PipelineError> {
        self.tx
            .send(event)
            .await
            .map_err(|_| PipelineError::ClientDisconnected)
    }

    /// Close the stream. No further writes are permitted; the receiver ends
    /// once drained.
    pub fn close(self) {}
}
