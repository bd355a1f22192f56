//! Output formatting module

use anyhow::Result;
use hytranslit_core::Output;

/// One transliterated input: a file, literal text or stdin
#[derive(Debug, Clone)]
pub struct Document {
    /// Where the text came from
    pub source: String,
    /// Transliteration result
    pub output: Output,
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output a single document
    fn format_document(&mut self, document: &Document) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
