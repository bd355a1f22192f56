//! Input sources for the API

use std::io::Read;
use std::path::{Path, PathBuf};

use crate::api::Error;

/// Where the text to transliterate comes from
pub enum Input {
    /// Text already in memory
    Text(String),
    /// UTF-8 file on disk
    File(PathBuf),
    /// UTF-8 encoded bytes
    Bytes(Vec<u8>),
    /// Any reader, drained to the end
    Reader(Box<dyn Read + Send + Sync>),
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(text) => write!(f, "Input::Text({} bytes)", text.len()),
            Input::File(path) => write!(f, "Input::File({})", path.display()),
            Input::Bytes(bytes) => write!(f, "Input::Bytes({} bytes)", bytes.len()),
            Input::Reader(_) => f.write_str("Input::Reader"),
        }
    }
}

impl Input {
    pub fn from_text(text: impl Into<String>) -> Self {
        Input::Text(text.into())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Input::File(path.as_ref().to_path_buf())
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    pub fn from_reader(reader: impl Read + Send + Sync + 'static) -> Self {
        Input::Reader(Box::new(reader))
    }

    /// Resolve the source into a string; non-UTF-8 content is rejected
    pub(crate) fn into_text(self) -> Result<String, Error> {
        let bytes = match self {
            Input::Text(text) => return Ok(text),
            Input::Bytes(bytes) => bytes,
            Input::File(path) => std::fs::read(&path).map_err(|e| {
                Error::Infrastructure(format!("Failed to read {}: {e}", path.display()))
            })?,
            Input::Reader(mut reader) => {
                let mut buffer = Vec::new();
                reader
                    .read_to_end(&mut buffer)
                    .map_err(|e| Error::Infrastructure(format!("Failed to read input: {e}")))?;
                buffer
            }
        };

        String::from_utf8(bytes)
            .map_err(|e| Error::InvalidInput(format!("Input is not valid UTF-8: {e}")))
    }
}
