//! Plain text output formatter

use super::{Document, OutputFormatter};
use anyhow::Result;
use std::io::{self, Write};

/// Plain text formatter - outputs the transliterated text of each document
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_document(&mut self, document: &Document) -> Result<()> {
        let text = &document.output.text;
        self.writer.write_all(text.as_bytes())?;
        // Keep documents on separate lines
        if !text.is_empty() && !text.ends_with('\n') {
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
