//! Outbound event stream
//!
//! The closed set of progress events pushed to the client, their wire
//! serialization (one JSON object per event, terminated by the literal
//! `[DONE]` sentinel), and the bounded write-through channel the
//! orchestrator emits into.

mod event;
mod sink;

pub use event::Event;
pub use sink::EventSink;
