//! Bridge to the external inference collaborators
//!
//! The speech-to-text and summarization engines are external collaborators:
//! this module defines their interfaces, runs each call as an isolated
//! blocking unit of work off the event loop, and models the permanent
//! degraded state when the engines failed to initialize at startup.

mod command;
mod gateway;

pub use command::{load, CommandSpeechToText, CommandSummarizer};
pub use gateway::{InferenceGateway, SpeechToText, Summarizer};
