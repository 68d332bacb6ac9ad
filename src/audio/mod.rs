//! Audio track extraction from uploaded media files

mod extract;

pub use extract::{FfmpegExtractor, MediaExtractor};
