//! Output types for the API

use std::time::Duration;

/// Transliteration output with metadata
#[derive(Debug, Clone)]
pub struct Output {
    /// Transliterated text
    pub text: String,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// Metadata about the processing
#[derive(Debug, Clone)]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Code of the script pipeline used
    pub script: String,
    /// Additional statistics
    pub stats: ProcessingStats,
}

/// Additional processing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingStats {
    /// Total bytes processed
    pub bytes_processed: usize,
    /// Total characters processed
    pub chars_processed: usize,
    /// Segments produced by the tokenizer
    pub segment_count: usize,
    /// Segments carrying Armenian letters
    pub armenian_segment_count: usize,
    /// Words transliterated
    pub word_count: usize,
}

impl ProcessingStats {
    pub(crate) fn from_pipeline(bytes: usize, stats: crate::pipeline::TextStats) -> Self {
        Self {
            bytes_processed: bytes,
            chars_processed: stats.chars,
            segment_count: stats.segments,
            armenian_segment_count: stats.armenian_segments,
            word_count: stats.words,
        }
    }
}
