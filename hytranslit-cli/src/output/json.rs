//! JSON output formatter

use super::{Document, OutputFormatter};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs documents as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    documents: Vec<DocumentData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input file, `<text>` or `<stdin>`
    pub source: String,
    /// Script code used
    pub script: String,
    /// Transliterated text
    pub text: String,
    /// Processing statistics
    pub stats: StatsData,
}

/// Statistics as serialized
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsData {
    pub bytes: usize,
    pub chars: usize,
    pub segments: usize,
    pub armenian_segments: usize,
    pub words: usize,
    pub duration_ms: f64,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_document(&mut self, document: &Document) -> Result<()> {
        let metadata = &document.output.metadata;
        self.documents.push(DocumentData {
            source: document.source.clone(),
            script: metadata.script.clone(),
            text: document.output.text.clone(),
            stats: StatsData {
                bytes: metadata.stats.bytes_processed,
                chars: metadata.stats.chars_processed,
                segments: metadata.stats.segment_count,
                armenian_segments: metadata.stats.armenian_segment_count,
                words: metadata.stats.word_count,
                duration_ms: metadata.duration.as_secs_f64() * 1000.0,
            },
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.documents)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
