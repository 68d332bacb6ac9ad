//! Staged streaming pipeline
//!
//! This module is the core of the service: the state machine that sequences
//! audio extraction, speech recognition, segmentation, and summarization for
//! one client stream, pushing incremental progress events and guaranteeing
//! terminal cleanup and error delivery regardless of where a failure occurs.

mod job;
mod orchestrator;
mod stage;

pub use job::Job;
pub use orchestrator::Orchestrator;
pub use stage::Stage;
