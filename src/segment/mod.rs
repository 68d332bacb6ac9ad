//! Transcript segmentation
//!
//! Two independent chunking rules live here:
//! - `segment_transcript`: sentence-aware, word-bounded segments fed to
//!   summarization. Segment boundaries never split a sentence.
//! - `display_chunks`: plain word grouping into at most 12 chunks, used only
//!   for progressive transcript display on the client.
//!
//! Both are pure functions with no inference dependency.

/// A sentence-aligned, word-bounded chunk of transcript text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Whole sentences, in transcript order.
    pub sentences: Vec<String>,
}

impl Segment {
    /// The segment's text as passed to summarization.
    pub fn text(&self) -> String {
        self.sentences.join(" ")
    }

    /// Total word count across all sentences.
    pub fn word_count(&self) -> usize {
        self.sentences
            .iter()
            .map(|s| s.split_whitespace().count())
            .sum()
    }
}

/// Split a transcript into sentences.
///
/// A sentence ends at `.`, `?`, or `!` followed by whitespace. Each sentence
/// is trimmed; empty sentences are discarded. Text with no terminator yields
/// a single sentence containing the whole (trimmed) input.
pub fn split_sentences(transcript: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = transcript.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '?' | '!') && chars.peek().is_some_and(|n| n.is_whitespace()) {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Group sentences into segments bounded by a soft word ceiling.
///
/// Before adding a sentence, if the running word count plus the sentence's
/// word count would exceed `max_words`, the current segment is closed and the
/// over-threshold sentence starts the next one. The ceiling is a soft
/// trigger: a single sentence longer than `max_words` is never split, so a
/// segment may exceed the ceiling only through one over-long leading
/// sentence. An empty transcript yields zero segments.
pub fn segment_transcript(transcript: &str, max_words: usize) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut current: Vec<String> = Vec::new();
    let mut current_words = 0;

    for sentence in split_sentences(transcript) {
        let words = sentence.split_whitespace().count();
        if !current.is_empty() && current_words + words > max_words {
            segments.push(Segment {
                sentences: std::mem::take(&mut current),
            });
            current_words = 0;
        }
        current_words += words;
        current.push(sentence);
    }

    if !current.is_empty() {
        segments.push(Segment { sentences: current });
    }

    segments
}

/// Split a transcript into at most 12 roughly equal word groups for
/// progressive client display. Independent of the sentence-aware
/// segmentation above. An empty transcript yields zero chunks.
pub fn display_chunks(transcript: &str) -> Vec<String> {
    let words: Vec<&str> = transcript.split_whitespace().collect();
    if words.is_empty() {
        return Vec::new();
    }

    let group_size = words.len().div_ceil(12);
    words.chunks(group_size).map(|w| w.join(" ")).collect()
}
